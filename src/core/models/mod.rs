//! Core data models

pub mod user;

pub use user::{RbacUser, Role, UserStatus};

//! Shared utilities

pub mod error;

pub use error::{RbacError, Result};

//! # erpguard
//!
//! Role-based access control resolution for a business-management platform
//! (warehouse/inventory, sales invoicing, clients, finance, employees, and
//! RBAC-gated admin screens).
//!
//! ## Features
//!
//! - **Role hierarchy**: seven roles in a strict total order, from
//!   `super_admin` down to `viewer`
//! - **Static permission matrix**: declarative per-role (resource, action)
//!   grants, optionally constrained to the actor's department or branch
//! - **Navigation-route guard**: prefix-matched route rules checked before a
//!   page attempts data access
//! - **Delegation rules**: rank comparison for admin screens that manage
//!   other users' roles
//! - **Deny by default**: every decision is a total function; malformed
//!   input is logged and denied, never thrown
//!
//! ## Quick Start
//!
//! ```rust
//! use erpguard::{AuthClaims, RbacConfig, RbacResolver, Role, SessionContext, UserStatus};
//! use uuid::Uuid;
//!
//! fn main() -> erpguard::Result<()> {
//!     let resolver = RbacResolver::new(&RbacConfig::default())?;
//!
//!     let mut session = SessionContext::new();
//!     session.initialize_from_auth(AuthClaims {
//!         user_id: Uuid::new_v4(),
//!         role: "manager".to_string(),
//!         department: Some("sales".to_string()),
//!         filial_id: Some("f-01".to_string()),
//!         status: UserStatus::Active,
//!     });
//!
//!     assert!(resolver.has_permission(Role::Manager, "finance", "export", None));
//!     assert!(resolver.can_access_route(&session, "/finance/overview"));
//!     assert!(!resolver.has_permission(Role::Viewer, "users", "delete", None));
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

mod auth;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use auth::audit::{AuditLog, AuditLogEntry};
pub use auth::rbac::{
    AccessContext, Action, Constraint, Permission, PermissionCheck, RbacResolver, Resource,
    RouteRule, is_valid_action, is_valid_resource,
};
pub use auth::session::{AuthClaims, SessionContext};
pub use config::{RbacConfig, RoutePermissionConfig, RouteRuleConfig};
pub use crate::core::models::{RbacUser, Role, UserStatus};
pub use utils::error::{RbacError, Result};

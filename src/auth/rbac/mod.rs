//! Role-Based Access Control (RBAC) resolution
//!
//! Given a role and a requested (resource, action) pair plus optional
//! contextual attributes, decides allow/deny; also derives allowed actions
//! per resource, navigation-route access, and relative role ranking for
//! management-delegation checks. All decisions are total functions that
//! default to denial on ambiguous, missing, or malformed input.

mod delegation;
mod permissions;
mod routes;
mod system;
mod types;

pub use permissions::{is_valid_action, is_valid_resource};
pub use system::RbacResolver;
pub use types::{
    AccessContext, Action, Constraint, Permission, PermissionCheck, Resource, RouteRule,
};

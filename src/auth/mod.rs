//! Authorization layer: RBAC resolution, session lifecycle, audit history

pub mod audit;
pub mod rbac;
pub mod session;

pub use audit::{AuditLog, AuditLogEntry};
pub use rbac::RbacResolver;
pub use session::{AuthClaims, SessionContext};

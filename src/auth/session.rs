//! Session context lifecycle
//!
//! Two states: uninitialized until authentication completes, initialized
//! after [`SessionContext::initialize_from_auth`], back to uninitialized on
//! [`SessionContext::reset`] (logout). The resolver treats an uninitialized
//! session as deny-everything.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::core::models::{RbacUser, Role, UserStatus};

/// Identity claims the auth collaborator supplies at login. The role arrives
/// as an arbitrary backend string and is coerced to the closed role set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClaims {
    /// User id
    pub user_id: Uuid,
    /// Backend role string, coerced via [`Role::coerce`]
    pub role: String,
    /// Department, if known
    #[serde(default)]
    pub department: Option<String>,
    /// Branch/filial, if known
    #[serde(default)]
    pub filial_id: Option<String>,
    /// Account status
    pub status: UserStatus,
}

/// Snapshot of the current session's user projection.
///
/// Owned by the caller (typically one per session); the resolver only ever
/// reads it. Callers replace the snapshot wholesale on role changes rather
/// than mutating it in place.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    user: Option<RbacUser>,
}

impl SessionContext {
    /// New uninitialized session
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the user projection from authenticated identity claims
    pub fn initialize_from_auth(&mut self, claims: AuthClaims) {
        let role = Role::coerce(&claims.role);
        info!(user_id = %claims.user_id, %role, "Session initialized");
        self.user = Some(RbacUser {
            id: claims.user_id,
            role,
            department: claims.department,
            filial_id: claims.filial_id,
            status: claims.status,
        });
    }

    /// Discard the user projection (logout)
    pub fn reset(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "Session reset");
        }
    }

    /// Whether authentication has completed for this session
    pub fn is_initialized(&self) -> bool {
        self.user.is_some()
    }

    /// The current user projection, if initialized
    pub fn user(&self) -> Option<&RbacUser> {
        self.user.as_ref()
    }
}

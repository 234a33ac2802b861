//! Role-comparison and delegation methods
//!
//! Backs admin screens that must decide whether the acting user may change
//! another user's role. Lateral management is never allowed: equal rank is
//! not "higher".

use tracing::debug;
use uuid::Uuid;

use crate::auth::session::SessionContext;
use crate::core::models::Role;

use super::system::RbacResolver;
use super::types::{AccessContext, Action, PermissionCheck, Resource};

impl RbacResolver {
    /// Whether the session's role strictly outranks `candidate`
    pub fn is_higher_role(&self, session: &SessionContext, candidate: Role) -> bool {
        session
            .user()
            .is_some_and(|user| user.role.rank() > candidate.rank())
    }

    /// Whether the session's user may manage (elevate, demote, deactivate)
    /// the target user. Denies on self-management, on a missing
    /// `users.update` grant, and unless the acting role strictly outranks
    /// the target's.
    pub fn can_manage_user(
        &self,
        session: &SessionContext,
        target_user_id: Uuid,
        target_role: Role,
    ) -> bool {
        self.can_manage_user_detailed(session, target_user_id, target_role)
            .granted
    }

    /// Same decision as [`can_manage_user`](Self::can_manage_user), with a
    /// denial reason. Self-management carries a distinct reason so callers
    /// can show "cannot modify your own role" instead of a generic
    /// insufficient-permission message.
    pub fn can_manage_user_detailed(
        &self,
        session: &SessionContext,
        target_user_id: Uuid,
        target_role: Role,
    ) -> PermissionCheck {
        let Some(user) = session.user() else {
            return PermissionCheck::denied(Role::Viewer, "No authenticated session");
        };
        if !user.is_active() {
            return PermissionCheck::denied(user.role, "Account is not active");
        }
        if user.id == target_user_id {
            debug!(user_id = %user.id, "Self role-management attempt denied");
            return PermissionCheck::denied(user.role, "Cannot modify your own role");
        }

        let ctx = AccessContext::for_actor(user);
        let update_check = self.check_grant(user.role, Resource::Users, Action::Update, Some(&ctx));
        if !update_check.granted {
            return update_check;
        }

        if user.role.rank() > target_role.rank() {
            PermissionCheck::granted(user.role)
        } else {
            PermissionCheck::denied(
                user.role,
                format!("Role {} does not outrank {}", user.role, target_role),
            )
        }
    }
}

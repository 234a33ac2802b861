//! Permission checking methods

use std::str::FromStr;

use tracing::warn;

use crate::core::models::Role;

use super::system::RbacResolver;
use super::types::{AccessContext, Action, Permission, PermissionCheck, Resource};

/// Membership test against the closed resource set
pub fn is_valid_resource(value: &str) -> bool {
    Resource::from_str(value).is_ok()
}

/// Membership test against the closed action set
pub fn is_valid_action(value: &str) -> bool {
    Action::from_str(value).is_ok()
}

impl RbacResolver {
    /// Decide whether `role` may perform `action` on `resource`.
    ///
    /// Validation happens before lookup: an unrecognized resource or action
    /// string denies and logs a warning, for every role including
    /// `super_admin`. A matching entry that carries a constraint only grants
    /// when the constraint holds against the supplied context. Pure and
    /// deterministic; never panics.
    pub fn has_permission(
        &self,
        role: Role,
        resource: &str,
        action: &str,
        ctx: Option<&AccessContext>,
    ) -> bool {
        self.check_detailed(role, resource, action, ctx).granted
    }

    /// Same decision as [`has_permission`](Self::has_permission), with a
    /// denial reason callers can surface to the user
    pub fn check_detailed(
        &self,
        role: Role,
        resource: &str,
        action: &str,
        ctx: Option<&AccessContext>,
    ) -> PermissionCheck {
        let Ok(resource) = Resource::from_str(resource) else {
            warn!(resource, "Permission check on unknown resource, denying");
            return PermissionCheck::denied(role, format!("Unknown resource: {}", resource));
        };
        let Ok(action) = Action::from_str(action) else {
            warn!(action, "Permission check on unknown action, denying");
            return PermissionCheck::denied(role, format!("Unknown action: {}", action));
        };

        self.check_grant(role, resource, action, ctx)
    }

    /// Typed permission check, used internally once inputs are validated
    pub(super) fn check_grant(
        &self,
        role: Role,
        resource: Resource,
        action: Action,
        ctx: Option<&AccessContext>,
    ) -> PermissionCheck {
        let mut constraint_failed = false;

        for entry in self.matching_entries(role, resource, action) {
            match (entry.constraint, ctx) {
                (None, _) => return PermissionCheck::granted(role),
                (Some(constraint), Some(ctx)) if constraint.holds(ctx) => {
                    return PermissionCheck::granted(role);
                }
                (Some(_), _) => constraint_failed = true,
            }
        }

        if constraint_failed {
            PermissionCheck::denied(
                role,
                format!("Constraint not satisfied for {}.{}", resource, action),
            )
        } else {
            PermissionCheck::denied(role, format!("Missing permission: {}.{}", resource, action))
        }
    }

    /// Whether the role may perform any action at all on the resource
    pub fn can_access_resource(&self, role: Role, resource: &str) -> bool {
        let Ok(resource) = Resource::from_str(resource) else {
            warn!(resource, "Resource access check on unknown resource, denying");
            return false;
        };
        self.permissions_for(role)
            .iter()
            .any(|entry| entry.resource == resource)
    }

    /// Actions the role holds at least one grant for on the resource,
    /// in canonical action order. Constrained grants are included: whether
    /// they apply to a concrete record still depends on context at check
    /// time. Unknown resources yield an empty list.
    pub fn get_allowed_actions(&self, role: Role, resource: &str) -> Vec<Action> {
        let Ok(resource) = Resource::from_str(resource) else {
            warn!(resource, "Allowed-actions lookup on unknown resource");
            return Vec::new();
        };
        let permissions = self.permissions_for(role);
        Action::ALL
            .into_iter()
            .filter(|action| {
                permissions
                    .iter()
                    .any(|entry| entry.resource == resource && entry.action == *action)
            })
            .collect()
    }

    fn matching_entries(
        &self,
        role: Role,
        resource: Resource,
        action: Action,
    ) -> impl Iterator<Item = &Permission> {
        self.permissions_for(role)
            .iter()
            .filter(move |entry| entry.resource == resource && entry.action == action)
    }
}

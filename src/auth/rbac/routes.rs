//! Navigation-route guard methods

use tracing::debug;

use crate::auth::session::SessionContext;

use super::system::RbacResolver;
use super::types::AccessContext;

impl RbacResolver {
    /// Decide whether the session's user may enter a logical application
    /// route.
    ///
    /// The first rule whose prefix matches the path wins (rules are ordered
    /// longest prefix first). A path no rule matches is allowed: routes not
    /// explicitly protected are public within the authenticated shell. That
    /// default-allow is a deliberate product behavior, not a gap. An
    /// uninitialized session denies everything, protected or not.
    ///
    /// Returns a boolean for the caller to act on; performs no redirect.
    pub fn can_access_route(&self, session: &SessionContext, path: &str) -> bool {
        let Some(user) = session.user() else {
            debug!(path, "Route check without an authenticated session, denying");
            return false;
        };
        if !user.is_active() {
            debug!(path, user_id = %user.id, "Route check for non-active user, denying");
            return false;
        }

        let Some(rule) = self.routes.iter().find(|rule| path.starts_with(&rule.prefix)) else {
            return true;
        };

        if !rule.required_roles.contains(&user.role) {
            debug!(path, role = %user.role, "Role not permitted for route");
            return false;
        }

        match rule.required_permission {
            Some((resource, action)) => {
                let ctx = AccessContext::for_actor(user);
                self.check_grant(user.role, resource, action, Some(&ctx)).granted
            }
            None => true,
        }
    }
}

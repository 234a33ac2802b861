//! Resolver core: static permission tables and route rules

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::{debug, info};

use crate::config::RbacConfig;
use crate::core::models::{RbacUser, Role};
use crate::utils::error::{RbacError, Result};

use super::types::{Action, Constraint, Permission, Resource, RouteRule};

/// Built-in route protection. Rules for routes outside this table
/// default-allow within the authenticated shell.
static DEFAULT_ROUTE_RULES: Lazy<Vec<RouteRule>> = Lazy::new(|| {
    vec![
        RouteRule::with_permission(
            "/admin/users",
            vec![Role::SuperAdmin, Role::Admin],
            Resource::Users,
            Action::Read,
        ),
        RouteRule::new("/admin", vec![Role::SuperAdmin, Role::Admin]),
        RouteRule::with_permission(
            "/finance",
            vec![Role::SuperAdmin, Role::Admin, Role::Manager],
            Resource::Finance,
            Action::Read,
        ),
        RouteRule::new("/settings", vec![Role::SuperAdmin, Role::Admin]),
        RouteRule::new(
            "/employees",
            vec![Role::SuperAdmin, Role::Admin, Role::Manager, Role::TeamLead],
        ),
    ]
});

/// RBAC resolver: a stateless decision function layered over static tables.
///
/// Holds the role → permission mapping and the route rule table, both fixed
/// at construction. Session state is passed in explicitly by callers; the
/// resolver itself never mutates anything after `new`.
#[derive(Debug, Clone)]
pub struct RbacResolver {
    /// Resolver configuration
    pub(super) config: RbacConfig,
    /// Permission table per role
    pub(super) tables: HashMap<Role, Vec<Permission>>,
    /// Route rules, longest prefix first
    pub(super) routes: Vec<RouteRule>,
}

impl RbacResolver {
    /// Create a new resolver from configuration.
    ///
    /// Fails only on invalid configuration (unparseable role, resource, or
    /// action names in route rules); the permission tables themselves are
    /// static data.
    pub fn new(config: &RbacConfig) -> Result<Self> {
        info!("Initializing RBAC resolver");

        config.validate()?;

        let tables = default_permission_tables();
        for role in Role::ALL {
            if tables.get(&role).is_none_or(|perms| perms.is_empty()) {
                return Err(RbacError::config(format!(
                    "Role {} has no permissions in the static table",
                    role
                )));
            }
        }

        let mut routes = if config.routes.is_empty() {
            DEFAULT_ROUTE_RULES.clone()
        } else {
            config.route_rules()?
        };
        // First-match-wins, so more specific prefixes must come first.
        routes.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));

        debug!(
            roles = tables.len(),
            routes = routes.len(),
            "RBAC resolver initialized"
        );

        Ok(Self {
            config: config.clone(),
            tables,
            routes,
        })
    }

    /// Permissions granted to a role. Never empty for a defined role.
    pub fn permissions_for(&self, role: Role) -> &[Permission] {
        self.tables.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Route rules in evaluation order (longest prefix first)
    pub fn route_rules(&self) -> &[RouteRule] {
        &self.routes
    }

    /// Role assigned to newly provisioned users, from configuration
    pub fn default_role(&self) -> Role {
        Role::coerce(&self.config.default_role)
    }

    /// Whether the user's role is one of the configured admin roles
    pub fn is_admin(&self, user: &RbacUser) -> bool {
        self.config.admin_roles.contains(&user.role.to_string())
    }
}

/// The static permission matrix, expressed as data so it can be diffed in
/// review and tested exhaustively. Higher ranks extend lower ones where the
/// grant is identical; constrained grants are widened (not duplicated) as
/// rank increases.
fn default_permission_tables() -> HashMap<Role, Vec<Permission>> {
    use Action::*;
    use Resource::*;

    let viewer = vec![Permission::new(Dashboard, Read), Permission::new(Reports, Read)];

    let mut intern = viewer.clone();
    intern.extend([Permission::new(Clients, Read), Permission::new(Sales, Read)]);

    let mut employee = intern.clone();
    employee.extend([
        Permission::new(Clients, Create),
        Permission::new(Clients, Update),
        Permission::new(Sales, Create),
        Permission::new(Sales, Update),
        Permission::constrained(Employees, Read, Constraint::SameDepartment),
    ]);

    let mut team_lead = employee.clone();
    team_lead.extend([
        Permission::constrained(Sales, Approve, Constraint::SameDepartment),
        Permission::constrained(Sales, Reject, Constraint::SameDepartment),
        Permission::constrained(Employees, Assign, Constraint::SameDepartment),
        Permission::new(Reports, Export),
        Permission::constrained(Finance, Read, Constraint::SameFilial),
    ]);

    // Manager and above drop the department/filial constraints, so their
    // tables are spelled out rather than extended.
    let manager = vec![
        Permission::new(Dashboard, Read),
        Permission::new(Reports, Read),
        Permission::new(Reports, Export),
        Permission::new(Clients, Create),
        Permission::new(Clients, Read),
        Permission::new(Clients, Update),
        Permission::new(Clients, Delete),
        Permission::new(Clients, Export),
        Permission::new(Clients, Import),
        Permission::new(Sales, Create),
        Permission::new(Sales, Read),
        Permission::new(Sales, Update),
        Permission::new(Sales, Delete),
        Permission::new(Sales, Approve),
        Permission::new(Sales, Reject),
        Permission::new(Sales, Export),
        Permission::new(Employees, Read),
        Permission::new(Employees, Update),
        Permission::new(Employees, Assign),
        Permission::new(Finance, Read),
        Permission::new(Finance, Export),
        Permission::new(Settings, Read),
    ];

    let mut admin = manager.clone();
    admin.extend([
        Permission::new(Users, Create),
        Permission::new(Users, Read),
        Permission::new(Users, Update),
        Permission::new(Users, Delete),
        Permission::new(Users, Assign),
        Permission::new(Employees, Create),
        Permission::new(Employees, Delete),
        Permission::new(Employees, Import),
        Permission::new(Employees, Export),
        Permission::new(Finance, Create),
        Permission::new(Finance, Update),
        Permission::new(Finance, Approve),
        Permission::new(Finance, Reject),
        Permission::new(Settings, Update),
        Permission::new(AuditLogs, Read),
        Permission::new(SystemConfig, Read),
    ]);

    let super_admin = Resource::ALL
        .into_iter()
        .flat_map(|resource| {
            Action::ALL
                .into_iter()
                .map(move |action| Permission::new(resource, action))
        })
        .collect();

    HashMap::from([
        (Role::Viewer, viewer),
        (Role::Intern, intern),
        (Role::Employee, employee),
        (Role::TeamLead, team_lead),
        (Role::Manager, manager),
        (Role::Admin, admin),
        (Role::SuperAdmin, super_admin),
    ])
}

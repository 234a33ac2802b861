//! RBAC type definitions

use serde::{Deserialize, Serialize};

use crate::core::models::{RbacUser, Role};

/// Protected domain object categories. Closed set: anything outside it is
/// rejected before permission lookup, never silently allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// Platform accounts and role assignments
    Users,
    /// Employee records
    Employees,
    /// Client records
    Clients,
    /// Sales and invoicing
    Sales,
    /// Finance data
    Finance,
    /// Dashboard widgets
    Dashboard,
    /// Application settings
    Settings,
    /// Generated reports
    Reports,
    /// Local audit history
    AuditLogs,
    /// System-level configuration
    SystemConfig,
}

impl Resource {
    /// All protected resources
    pub const ALL: [Resource; 10] = [
        Resource::Users,
        Resource::Employees,
        Resource::Clients,
        Resource::Sales,
        Resource::Finance,
        Resource::Dashboard,
        Resource::Settings,
        Resource::Reports,
        Resource::AuditLogs,
        Resource::SystemConfig,
    ];
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::Users => "users",
            Resource::Employees => "employees",
            Resource::Clients => "clients",
            Resource::Sales => "sales",
            Resource::Finance => "finance",
            Resource::Dashboard => "dashboard",
            Resource::Settings => "settings",
            Resource::Reports => "reports",
            Resource::AuditLogs => "audit_logs",
            Resource::SystemConfig => "system_config",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "users" => Ok(Resource::Users),
            "employees" => Ok(Resource::Employees),
            "clients" => Ok(Resource::Clients),
            "sales" => Ok(Resource::Sales),
            "finance" => Ok(Resource::Finance),
            "dashboard" => Ok(Resource::Dashboard),
            "settings" => Ok(Resource::Settings),
            "reports" => Ok(Resource::Reports),
            "audit_logs" => Ok(Resource::AuditLogs),
            "system_config" => Ok(Resource::SystemConfig),
            _ => Err(format!("Invalid resource: {}", s)),
        }
    }
}

/// Operation verbs applied to resources. Closed set, same rejection rule as
/// [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Create a record
    Create,
    /// Read records
    Read,
    /// Update a record
    Update,
    /// Delete a record
    Delete,
    /// Export data (CSV/PDF builders downstream)
    Export,
    /// Import data
    Import,
    /// Approve a pending record
    Approve,
    /// Reject a pending record
    Reject,
    /// Assign a record to a user
    Assign,
}

impl Action {
    /// All actions, in canonical order
    pub const ALL: [Action; 9] = [
        Action::Create,
        Action::Read,
        Action::Update,
        Action::Delete,
        Action::Export,
        Action::Import,
        Action::Approve,
        Action::Reject,
        Action::Assign,
    ];
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Export => "export",
            Action::Import => "import",
            Action::Approve => "approve",
            Action::Reject => "reject",
            Action::Assign => "assign",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Action::Create),
            "read" => Ok(Action::Read),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            "export" => Ok(Action::Export),
            "import" => Ok(Action::Import),
            "approve" => Ok(Action::Approve),
            "reject" => Ok(Action::Reject),
            "assign" => Ok(Action::Assign),
            _ => Err(format!("Invalid action: {}", s)),
        }
    }
}

/// Contextual restriction attached to a permission entry.
///
/// A constrained entry only grants access when the acting user's attribute
/// matches the target record's attribute. A missing attribute on either side
/// denies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// Target record must belong to the actor's department
    SameDepartment,
    /// Target record must belong to the actor's branch/filial
    SameFilial,
}

impl Constraint {
    /// Evaluate the constraint against the supplied context
    pub fn holds(&self, ctx: &AccessContext) -> bool {
        match self {
            Constraint::SameDepartment => match (&ctx.actor_department, &ctx.record_department) {
                (Some(actor), Some(record)) => actor == record,
                _ => false,
            },
            Constraint::SameFilial => match (&ctx.actor_filial, &ctx.record_filial) {
                (Some(actor), Some(record)) => actor == record,
                _ => false,
            },
        }
    }
}

/// Attributes a constrained permission check is evaluated against: the acting
/// user's department/filial paired with the target record's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessContext {
    /// Acting user's department
    pub actor_department: Option<String>,
    /// Acting user's branch/filial
    pub actor_filial: Option<String>,
    /// Target record's department
    pub record_department: Option<String>,
    /// Target record's branch/filial
    pub record_filial: Option<String>,
}

impl AccessContext {
    /// Build a context carrying the acting user's attributes, with no target
    /// record attached yet
    pub fn for_actor(user: &RbacUser) -> Self {
        Self {
            actor_department: user.department.clone(),
            actor_filial: user.filial_id.clone(),
            record_department: None,
            record_filial: None,
        }
    }

    /// Attach the target record's department
    pub fn with_record_department(mut self, department: impl Into<String>) -> Self {
        self.record_department = Some(department.into());
        self
    }

    /// Attach the target record's branch/filial
    pub fn with_record_filial(mut self, filial_id: impl Into<String>) -> Self {
        self.record_filial = Some(filial_id.into());
        self
    }
}

/// Permission definition: an allowed (resource, action) pair, optionally
/// restricted by a constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Resource this permission applies to
    pub resource: Resource,
    /// Action this permission allows
    pub action: Action,
    /// Optional contextual restriction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<Constraint>,
}

impl Permission {
    /// Unconstrained permission
    pub fn new(resource: Resource, action: Action) -> Self {
        Self {
            resource,
            action,
            constraint: None,
        }
    }

    /// Permission restricted by a constraint
    pub fn constrained(resource: Resource, action: Action, constraint: Constraint) -> Self {
        Self {
            resource,
            action,
            constraint: Some(constraint),
        }
    }

    /// Dotted `resource.action` name, the form audit entries and logs use
    pub fn name(&self) -> String {
        format!("{}.{}", self.resource, self.action)
    }
}

/// Permission check result with enough detail for user-facing messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionCheck {
    /// Whether access is granted
    pub granted: bool,
    /// Role the check was evaluated for
    pub role: Role,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}

impl PermissionCheck {
    pub(super) fn granted(role: Role) -> Self {
        Self {
            granted: true,
            role,
            denial_reason: None,
        }
    }

    pub(super) fn denied(role: Role, reason: impl Into<String>) -> Self {
        Self {
            granted: false,
            role,
            denial_reason: Some(reason.into()),
        }
    }
}

/// Route-level access rule. Matched by path prefix, first match wins; the
/// resolver orders rules longest-prefix-first so overlapping prefixes stay
/// unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRule {
    /// Path prefix this rule protects
    pub prefix: String,
    /// Roles allowed through
    pub required_roles: Vec<Role>,
    /// Additional permission the role must hold, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_permission: Option<(Resource, Action)>,
}

impl RouteRule {
    /// Rule gated on role membership only
    pub fn new(prefix: impl Into<String>, required_roles: Vec<Role>) -> Self {
        Self {
            prefix: prefix.into(),
            required_roles,
            required_permission: None,
        }
    }

    /// Rule gated on role membership plus a permission
    pub fn with_permission(
        prefix: impl Into<String>,
        required_roles: Vec<Role>,
        resource: Resource,
        action: Action,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            required_roles,
            required_permission: Some((resource, action)),
        }
    }
}

//! Core user types and enums

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// User role
///
/// Roles form a strict total order used for delegation checks:
/// `SuperAdmin > Admin > Manager > TeamLead > Employee > Intern > Viewer`.
/// Rank is only ever compared relatively; it is never a capability check by
/// itself. Permissions stay explicit per resource and action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Super administrator
    SuperAdmin,
    /// Administrator
    Admin,
    /// Department manager
    Manager,
    /// Team lead
    TeamLead,
    /// Regular employee
    Employee,
    /// Intern
    Intern,
    /// Read-only user
    Viewer,
}

impl Role {
    /// All roles, ordered from highest to lowest rank
    pub const ALL: [Role; 7] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::Manager,
        Role::TeamLead,
        Role::Employee,
        Role::Intern,
        Role::Viewer,
    ];

    /// Numeric rank, strictly monotonic with the declared order
    /// (`super_admin = 6` down to `viewer = 0`)
    pub fn rank(self) -> u8 {
        match self {
            Role::SuperAdmin => 6,
            Role::Admin => 5,
            Role::Manager => 4,
            Role::TeamLead => 3,
            Role::Employee => 2,
            Role::Intern => 1,
            Role::Viewer => 0,
        }
    }

    /// Total mapping from an arbitrary backend role string to a role.
    ///
    /// Unknown or garbage strings fall back to [`Role::Viewer`], the
    /// lowest-privilege role. The guard must never fail open because an
    /// upstream service introduced a role name it does not know.
    pub fn coerce(value: &str) -> Role {
        match value.parse() {
            Ok(role) => role,
            Err(_) => {
                warn!(role = value, "Unknown role string, coercing to viewer");
                Role::Viewer
            }
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::SuperAdmin => write!(f, "super_admin"),
            Role::Admin => write!(f, "admin"),
            Role::Manager => write!(f, "manager"),
            Role::TeamLead => write!(f, "team_lead"),
            Role::Employee => write!(f, "employee"),
            Role::Intern => write!(f, "intern"),
            Role::Viewer => write!(f, "viewer"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Role::SuperAdmin),
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "team_lead" => Ok(Role::TeamLead),
            "employee" => Ok(Role::Employee),
            "intern" => Ok(Role::Intern),
            "viewer" => Ok(Role::Viewer),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// User status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Active user
    Active,
    /// Inactive user
    Inactive,
    /// Suspended user
    Suspended,
}

/// Session-scoped projection of the authenticated user.
///
/// Built once per session from the identity the auth collaborator supplies,
/// and discarded on logout. Never persisted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacUser {
    /// User id
    pub id: Uuid,
    /// Resolved role
    pub role: Role,
    /// Department the user belongs to
    pub department: Option<String>,
    /// Branch/filial the user belongs to
    pub filial_id: Option<String>,
    /// Account status
    pub status: UserStatus,
}

impl RbacUser {
    /// Create a user projection with no department or filial attributes
    pub fn new(id: Uuid, role: Role) -> Self {
        Self {
            id,
            role,
            department: None,
            filial_id: None,
            status: UserStatus::Active,
        }
    }

    /// Whether the account is active
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_display_round_trips() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn rank_is_strictly_monotonic() {
        for pair in Role::ALL.windows(2) {
            assert!(pair[0].rank() > pair[1].rank());
        }
    }

    #[test]
    fn coerce_unknown_falls_back_to_viewer() {
        assert_eq!(Role::coerce("warehouse_wizard"), Role::Viewer);
        assert_eq!(Role::coerce(""), Role::Viewer);
        assert_eq!(Role::coerce("ADMIN"), Role::Viewer);
    }

    #[test]
    fn coerce_known_strings() {
        assert_eq!(Role::coerce("super_admin"), Role::SuperAdmin);
        assert_eq!(Role::coerce("team_lead"), Role::TeamLead);
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert!("warehouse_wizard".parse::<Role>().is_err());
    }

    #[test]
    fn suspended_user_is_not_active() {
        let mut user = RbacUser::new(Uuid::new_v4(), Role::Manager);
        assert!(user.is_active());
        user.status = UserStatus::Suspended;
        assert!(!user.is_active());
    }
}

//! Resolver configuration

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::auth::rbac::{Action, Resource, RouteRule};
use crate::core::models::Role;
use crate::utils::error::{RbacError, Result};

/// RBAC configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Enable RBAC
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Default role for newly provisioned users
    #[serde(default = "default_role")]
    pub default_role: String,
    /// Roles treated as administrators
    #[serde(default = "default_admin_roles")]
    pub admin_roles: Vec<String>,
    /// Most recent audit entries retained for local display
    #[serde(default = "default_audit_capacity")]
    pub audit_log_capacity: usize,
    /// Route rules overriding the built-in table; empty keeps the defaults
    #[serde(default)]
    pub routes: Vec<RouteRuleConfig>,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_role: default_role(),
            admin_roles: default_admin_roles(),
            audit_log_capacity: default_audit_capacity(),
            routes: Vec::new(),
        }
    }
}

impl RbacConfig {
    /// Load configuration from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Merge another configuration over this one. Fields keep their current
    /// value unless the other side deviates from the defaults.
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.default_role != default_role() {
            self.default_role = other.default_role;
        }
        if other.admin_roles != default_admin_roles() {
            self.admin_roles = other.admin_roles;
        }
        if other.audit_log_capacity != default_audit_capacity() {
            self.audit_log_capacity = other.audit_log_capacity;
        }
        if !other.routes.is_empty() {
            self.routes = other.routes;
        }
        self
    }

    /// Validate role, resource, and action names. Configuration errors fail
    /// loudly; only runtime claims get the silent viewer fallback.
    pub fn validate(&self) -> Result<()> {
        Role::from_str(&self.default_role)
            .map_err(|e| RbacError::validation(format!("default_role: {}", e)))?;
        for role in &self.admin_roles {
            Role::from_str(role).map_err(|e| RbacError::validation(format!("admin_roles: {}", e)))?;
        }
        if self.audit_log_capacity == 0 {
            return Err(RbacError::validation("audit_log_capacity must be at least 1"));
        }
        self.route_rules()?;
        Ok(())
    }

    /// Convert configured route rules into the resolver's typed form
    pub fn route_rules(&self) -> Result<Vec<RouteRule>> {
        self.routes.iter().map(RouteRuleConfig::to_rule).collect()
    }
}

/// One configured route rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRuleConfig {
    /// Path prefix to protect
    pub prefix: String,
    /// Role names allowed through
    pub required_roles: Vec<String>,
    /// Additional permission the role must hold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_permission: Option<RoutePermissionConfig>,
}

/// Permission attached to a route rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePermissionConfig {
    /// Resource name
    pub resource: String,
    /// Action name
    pub action: String,
}

impl RouteRuleConfig {
    fn to_rule(&self) -> Result<RouteRule> {
        if self.prefix.is_empty() {
            return Err(RbacError::validation("route rule prefix must not be empty"));
        }
        let required_roles = self
            .required_roles
            .iter()
            .map(|role| {
                Role::from_str(role)
                    .map_err(|e| RbacError::validation(format!("route {}: {}", self.prefix, e)))
            })
            .collect::<Result<Vec<_>>>()?;
        if required_roles.is_empty() {
            return Err(RbacError::validation(format!(
                "route {} lists no required roles",
                self.prefix
            )));
        }

        let required_permission = match &self.required_permission {
            Some(permission) => {
                let resource = Resource::from_str(&permission.resource)
                    .map_err(|e| RbacError::validation(format!("route {}: {}", self.prefix, e)))?;
                let action = Action::from_str(&permission.action)
                    .map_err(|e| RbacError::validation(format!("route {}: {}", self.prefix, e)))?;
                Some((resource, action))
            }
            None => None,
        };

        Ok(RouteRule {
            prefix: self.prefix.clone(),
            required_roles,
            required_permission,
        })
    }
}

fn default_true() -> bool {
    true
}

fn default_role() -> String {
    "viewer".to_string()
}

fn default_admin_roles() -> Vec<String> {
    vec!["super_admin".to_string(), "admin".to_string()]
}

fn default_audit_capacity() -> usize {
    200
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RbacConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.enabled);
        assert_eq!(config.default_role, "viewer");
        assert_eq!(config.audit_log_capacity, 200);
    }

    #[test]
    fn from_yaml_with_route_override() {
        let yaml = r#"
default_role: viewer
admin_roles: [super_admin, admin]
routes:
  - prefix: /warehouse
    required_roles: [manager, admin, super_admin]
    required_permission:
      resource: sales
      action: read
"#;
        let config = RbacConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.routes.len(), 1);
        let rules = config.route_rules().unwrap();
        assert_eq!(rules[0].prefix, "/warehouse");
        assert_eq!(rules[0].required_roles.len(), 3);
        assert_eq!(
            rules[0].required_permission,
            Some((Resource::Sales, Action::Read))
        );
    }

    #[test]
    fn yaml_with_unknown_role_fails_validation() {
        let yaml = "default_role: overlord\n";
        assert!(RbacConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn route_with_unknown_action_fails_validation() {
        let config = RbacConfig {
            routes: vec![RouteRuleConfig {
                prefix: "/x".to_string(),
                required_roles: vec!["admin".to_string()],
                required_permission: Some(RoutePermissionConfig {
                    resource: "sales".to_string(),
                    action: "transmogrify".to_string(),
                }),
            }],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_audit_capacity_is_rejected() {
        let config = RbacConfig {
            audit_log_capacity: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn merge_keeps_defaults_unless_overridden() {
        let base = RbacConfig::default();
        let other = RbacConfig {
            default_role: "employee".to_string(),
            ..Default::default()
        };
        let merged = base.merge(other);
        assert_eq!(merged.default_role, "employee");
        assert_eq!(merged.admin_roles, default_admin_roles());
    }
}

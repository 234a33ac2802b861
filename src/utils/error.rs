//! Error handling for the resolver
//!
//! Decision functions never return errors: they are total and answer with
//! booleans or empty defaults. `RbacError` exists for the configuration
//! layer, where a malformed role name or route rule should fail loudly at
//! startup instead of silently weakening the guard.

use thiserror::Error;

/// Result type alias for the resolver
pub type Result<T> = std::result::Result<T, RbacError>;

/// Main error type for the resolver
#[derive(Error, Debug)]
pub enum RbacError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RbacError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

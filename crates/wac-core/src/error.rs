//! Error types for WAC core primitives.

use thiserror::Error;

/// Core errors that can occur while building permissions and rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A token that is not one of the four access modes.
    #[error("invalid permission: {token}; expected one of {valid:?}")]
    InvalidPermission {
        token: String,
        valid: Vec<&'static str>,
    },

    /// An operation needed a resolved accessTo and none was configured.
    #[error("missing scope: {0}")]
    MissingScope(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

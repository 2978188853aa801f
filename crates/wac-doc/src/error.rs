//! Error types for the document module.

use thiserror::Error;

/// Errors that can occur during document operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocError {
    /// In a strict document, a rule's scope disagrees with the document's.
    #[error("invalid scope: rule {field} is {actual}, document governs {expected}")]
    InvalidScope {
        field: &'static str,
        expected: String,
        actual: String,
    },

    /// Core error.
    #[error("core error: {0}")]
    Core(#[from] wac_core::CoreError),
}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocError>;

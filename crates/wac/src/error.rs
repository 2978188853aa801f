//! Error types for the facade.

use thiserror::Error;
use wac_codec::CodecError;
use wac_core::CoreError;
use wac_doc::DocError;

/// Errors that can occur while loading, editing or saving ACL documents.
#[derive(Debug, Error)]
pub enum WacError {
    /// Rule algebra or vocabulary error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Document error.
    #[error("document error: {0}")]
    Doc(#[from] DocError),

    /// Turtle or statement error.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// No ACL resource at this IRI.
    #[error("acl resource not found: {0}")]
    NotFound(String),

    /// The ACL source failed.
    #[error("acl source error: {0}")]
    Source(String),
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, WacError>;

//! Error types for the codec module.

use thiserror::Error;

/// Errors that can occur while decoding or encoding ACL resources.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// `acl:agentClass` named something other than the public or
    /// authenticated class.
    #[error("unrecognized agent class: {0}")]
    UnrecognizedAgentClass(String),

    /// An unknown ACL predicate on an authorization, in strict mode.
    #[error("unrecognized predicate: {0}")]
    UnrecognizedPredicate(String),

    /// The Turtle text could not be read.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// An IRI could not be parsed, or cannot be written as Turtle.
    #[error("invalid IRI: {0}")]
    InvalidIri(String),

    /// A blank node label, language tag or prefix that Turtle cannot express.
    #[error("invalid term: {0}")]
    InvalidTerm(String),

    /// The serializer failed.
    #[error("serialization failed: {0}")]
    Serialize(String),

    /// Core error.
    #[error("core error: {0}")]
    Core(#[from] wac_core::CoreError),

    /// Document error.
    #[error("document error: {0}")]
    Doc(#[from] wac_doc::DocError),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

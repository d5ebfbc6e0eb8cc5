//! Extraction error types

use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Extraction-related errors
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Artifact type not handled by any extractor
    #[error("Unsupported artifact type: .{0}")]
    UnsupportedArtifact(String),

    /// Artifact could not be read as its expected container format
    #[error("Invalid artifact: {0}")]
    InvalidArtifact(String),

    /// A required identifying field is absent from the artifact
    #[error("The artifact is missing critical information: {0}")]
    MissingField(&'static str),

    /// Required external tool not found
    #[error("Required tool not found: {0}")]
    ToolNotFound(String),

    /// External tool invocation failed
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Publishing pipeline error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for publishing operations
pub type Result<T> = std::result::Result<T, PublishError>;

/// Errors raised by the submission pipeline
#[derive(Debug, Error)]
pub enum PublishError {
    /// Extraction failure (missing metadata, unreadable artifact format)
    #[error(transparent)]
    Extract(#[from] hangar_extract::ExtractError),

    /// Catalog or site configuration failure
    #[error(transparent)]
    Site(#[from] hangar_site::SiteError),

    /// Server/runtime state failure (no active tunnel)
    #[error(transparent)]
    State(#[from] hangar_core::StateError),

    /// The artifact to submit does not exist or is unreadable
    #[error("Couldn't find or access the artifact at {0}")]
    ArtifactNotFound(PathBuf),

    /// The pre-provisioned manifest template is missing
    #[error("Manifest template not found at {0}; run setup first")]
    TemplateMissing(PathBuf),

    /// The manifest template does not have the expected shape
    #[error("Manifest template is malformed: {0}")]
    ManifestMalformed(String),

    /// Remote storage was requested with an incomplete configuration
    #[error("Remote storage configuration is incomplete: missing {0}")]
    RemoteSettingsIncomplete(String),

    /// Remote upload failed
    #[error("Remote upload failed: {0}")]
    UploadFailed(String),

    /// Plist read/write error
    #[error("Manifest plist error: {0}")]
    Plist(#[from] plist::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

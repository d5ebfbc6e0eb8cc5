//! Site bridge error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for site bridge operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Catalog and site configuration errors
#[derive(Debug, Error)]
pub enum SiteError {
    /// The site configuration document was never provisioned
    #[error("Site configuration not found at {0}; run setup first")]
    SiteConfigMissing(PathBuf),

    /// The site configuration document is not a JSON object
    #[error("Site configuration at {0} is not a JSON object")]
    SiteConfigMalformed(PathBuf),

    /// A catalog entry with this folder id already exists
    #[error("A build with folder id {0} is already recorded")]
    DuplicateBuild(u64),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Exit codes for the CLI

use hangar_core::{ConfigError, StateError};
use hangar_extract::ExtractError;
use hangar_publish::PublishError;
use hangar_site::SiteError;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error (not set up, invalid config)
pub const CONFIG_ERROR: i32 = 2;

/// Server not running / runtime state error
pub const STATE_ERROR: i32 = 3;

/// Metadata extraction error
pub const EXTRACTION_ERROR: i32 = 4;

/// Manifest, placement or upload error
pub const PUBLISH_ERROR: i32 = 5;

/// Catalog or site configuration error
pub const CATALOG_ERROR: i32 = 6;

/// Map an error chain to a process exit code.
pub fn for_error(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ConfigError>().is_some() {
        return CONFIG_ERROR;
    }
    if err.downcast_ref::<StateError>().is_some() {
        return STATE_ERROR;
    }
    if err.downcast_ref::<ExtractError>().is_some() {
        return EXTRACTION_ERROR;
    }
    if err.downcast_ref::<SiteError>().is_some() {
        return CATALOG_ERROR;
    }
    match err.downcast_ref::<PublishError>() {
        Some(PublishError::Extract(_)) => EXTRACTION_ERROR,
        Some(PublishError::Site(_)) => CATALOG_ERROR,
        Some(PublishError::State(_)) => STATE_ERROR,
        Some(_) => PUBLISH_ERROR,
        None => ERROR,
    }
}

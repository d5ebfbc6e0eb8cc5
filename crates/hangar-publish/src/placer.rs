//! Artifact placement
//!
//! Copies raw artifact bytes into the planned destination, creating parent
//! directories as needed. Manifest documents are written separately by the
//! generator's atomic writer.

use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;

/// Copy the artifact bytes to their planned destination.
pub fn copy_artifact(source: &Path, dest: &Path) -> Result<u64> {
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let bytes = std::fs::copy(source, dest)?;
    info!(source = %source.display(), dest = %dest.display(), bytes, "artifact placed");
    Ok(bytes)
}

/// Delete the submitted source artifact after a successful submission.
///
/// Best-effort: a failure is logged and never blocks completion.
pub fn remove_source_best_effort(source: &Path) {
    if let Err(e) = std::fs::remove_file(source) {
        warn!(source = %source.display(), error = %e, "failed to delete source artifact");
    } else {
        info!(source = %source.display(), "source artifact deleted");
    }
}

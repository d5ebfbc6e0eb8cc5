//! Hangar Extract - Build artifact metadata extraction
//!
//! Given a path to a mobile build artifact (`.ipa` or `.apk`/`.aab`), this
//! crate produces a tagged [`ExtractedBuild`] carrying the identifying
//! metadata the publishing pipeline needs. Every identifying field is
//! mandatory; a missing field is a fatal extraction failure, never a
//! silent default.

mod apk;
mod error;
mod ipa;
mod types;

pub use error::{ExtractError, Result};
pub use types::{AndroidBuild, ExtractedBuild, IosBuild};

use std::path::Path;

use tracing::info;

/// Boundary trait for metadata extraction.
///
/// The pipeline depends on this trait rather than a concrete extractor so
/// tests can substitute canned metadata.
pub trait MetadataExtractor {
    /// Extract identifying metadata from the artifact at `path`.
    fn extract(&self, path: &Path) -> Result<ExtractedBuild>;
}

/// Default extractor dispatching on the artifact's file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactExtractor;

impl MetadataExtractor for ArtifactExtractor {
    fn extract(&self, path: &Path) -> Result<ExtractedBuild> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        info!(path = %path.display(), ext, "extracting artifact metadata");

        match ext.as_str() {
            "ipa" => ipa::extract_ipa(path).map(ExtractedBuild::Ios),
            "apk" | "aab" => apk::extract_apk(path).map(ExtractedBuild::Android),
            _ => Err(ExtractError::UnsupportedArtifact(ext)),
        }
    }
}

//! Extracted build metadata types

use hangar_core::Platform;

/// Identifying metadata of an iOS build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IosBuild {
    pub bundle_id: String,
    pub display_name: String,
    pub version: String,
    pub build_number: String,
}

/// Identifying metadata of an Android build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndroidBuild {
    pub bundle_id: String,
    /// Original artifact filename; Android builds are served verbatim
    /// under this name.
    pub file_name: String,
    pub version: String,
    pub build_number: String,
}

/// A build whose metadata has been extracted, tagged by platform.
///
/// The platform branch happens exactly once, here; no downstream code
/// inspects device-family strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedBuild {
    Ios(IosBuild),
    Android(AndroidBuild),
}

impl ExtractedBuild {
    pub fn platform(&self) -> Platform {
        match self {
            ExtractedBuild::Ios(_) => Platform::Ios,
            ExtractedBuild::Android(_) => Platform::Android,
        }
    }

    pub fn bundle_id(&self) -> &str {
        match self {
            ExtractedBuild::Ios(b) => &b.bundle_id,
            ExtractedBuild::Android(b) => &b.bundle_id,
        }
    }

    pub fn version(&self) -> &str {
        match self {
            ExtractedBuild::Ios(b) => &b.version,
            ExtractedBuild::Android(b) => &b.version,
        }
    }

    pub fn build_number(&self) -> &str {
        match self {
            ExtractedBuild::Ios(b) => &b.build_number,
            ExtractedBuild::Android(b) => &b.build_number,
        }
    }

    /// Filename the artifact is stored and served under.
    pub fn artifact_file_name(&self) -> String {
        match self {
            ExtractedBuild::Ios(b) => format!("{}.ipa", b.display_name),
            ExtractedBuild::Android(b) => b.file_name.clone(),
        }
    }
}

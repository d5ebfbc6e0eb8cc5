//! Shared types

use serde::{Deserialize, Serialize};

/// Target platform family of a submitted artifact.
///
/// Produced exactly once by the extraction boundary; downstream code
/// branches on this tag instead of re-inspecting metadata strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Ios => write!(f, "ios"),
            Platform::Android => write!(f, "android"),
        }
    }
}

/// Whether a build's download link is exposed through the public tunnel
/// address or only on the local network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Local,
}

impl Visibility {
    /// True when the build should be reachable through the public tunnel.
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

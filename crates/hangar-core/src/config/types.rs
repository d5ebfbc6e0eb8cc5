//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for Hangar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory holding the generated site and stored builds
    pub working_directory: PathBuf,

    /// Base URL the site is reachable at on the local network
    /// (e.g. `http://192.168.1.7:5000`)
    pub local_base_url: String,

    /// Port the main site server listens on
    #[serde(default = "default_web_port")]
    pub web_port: u16,

    /// Port the dedicated assets server listens on (when enabled)
    #[serde(default = "default_assets_port")]
    pub assets_port: u16,

    /// Serve large binary assets from a dedicated second web root
    #[serde(default)]
    pub assets_web: bool,

    /// Expose only the assets server through the public tunnel
    #[serde(default)]
    pub private_web: bool,

    /// Remote object storage settings (may be completed per-invocation
    /// by CLI flags)
    #[serde(default)]
    pub remote_storage: Option<RemoteStorageConfig>,
}

/// S3-compatible remote storage settings.
///
/// Every field is optional here; completeness is checked as a submission
/// precondition once CLI overrides have been applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteStorageConfig {
    pub region: Option<String>,
    pub bucket: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

fn default_web_port() -> u16 {
    5000
}

fn default_assets_port() -> u16 {
    5001
}

impl Config {
    /// Root of the main site tree
    pub fn web_root(&self) -> PathBuf {
        self.working_directory.join("web")
    }

    /// Root of the dedicated assets server tree
    pub fn asset_server_root(&self) -> PathBuf {
        self.working_directory.join("asset_server")
    }

    /// Root that locally-installable assets are served from.
    ///
    /// When a dedicated assets host is configured, local installs go
    /// through it instead of the main site tree.
    pub fn local_assets_root(&self) -> PathBuf {
        if self.assets_web {
            self.asset_server_root()
        } else {
            self.web_root()
        }
    }

    /// Location of the pre-provisioned iOS manifest template
    pub fn manifest_template_path(&self) -> PathBuf {
        self.web_root().join("templates").join("manifest.plist")
    }

    /// Location of the shared site configuration document
    pub fn site_config_path(&self) -> PathBuf {
        self.web_root().join("_data").join("config.json")
    }

    /// Directory holding one catalog document per submitted build
    pub fn builds_dir(&self) -> PathBuf {
        self.web_root().join("_builds")
    }

    /// Location of the runtime state document written by the server process
    pub fn state_path(&self) -> PathBuf {
        self.working_directory.join(".hangar-state.json")
    }
}

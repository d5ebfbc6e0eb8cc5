//! Runtime state shared with the server process
//!
//! The server collaborator writes the active public tunnel URL here when it
//! comes up and clears it on shutdown. The submission pipeline only reads
//! it, and refuses to run while no tunnel is active.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StateError;

/// State document written by the server process
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeState {
    /// Active public tunnel address, if the server is running
    #[serde(default)]
    pub current_url: Option<String>,
}

impl RuntimeState {
    /// Load the state document; a missing file means the server never ran.
    pub fn load(path: &Path) -> Result<Self, StateError> {
        if !path.exists() {
            debug!(path = %path.display(), "no runtime state file");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Persist the state document.
    pub fn save(&self, path: &Path) -> Result<(), StateError> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Return the active tunnel URL, or fail if the server is not running.
    pub fn require_current_url(&self) -> Result<&str, StateError> {
        self.current_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(StateError::ServerNotRunning)
    }
}

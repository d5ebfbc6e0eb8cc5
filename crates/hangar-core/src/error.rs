//! Error types for Hangar core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Hangar has not been set up yet (no configuration at {0})")]
    NotFound(PathBuf),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Runtime state errors
#[derive(Debug, Error)]
pub enum StateError {
    /// The server has not published a tunnel URL yet
    #[error("No active tunnel URL; start the Hangar server before submitting a build")]
    ServerNotRunning,

    /// Failed to parse the state document
    #[error("Failed to parse runtime state: {0}")]
    Parse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error reading runtime state: {0}")]
    Io(#[from] std::io::Error),
}

//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::types::Config;
use super::validation::validate_config;

const CONFIG_FILE_NAME: &str = "hangar.toml";

/// Default location of the configuration file (`~/.hangar/hangar.toml`).
pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".hangar")
        .join(CONFIG_FILE_NAME)
}

/// Load configuration from the default location.
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path())
}

/// Load and validate configuration from an explicit path.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    info!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");

    if config.working_directory.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "working_directory".to_string(),
            message: "cannot be empty".to_string(),
        });
    }

    if !config.working_directory.is_absolute() {
        return Err(ConfigError::InvalidValue {
            field: "working_directory".to_string(),
            message: "must be an absolute path".to_string(),
        });
    }

    if config.local_base_url.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "local_base_url".to_string(),
            message: "cannot be empty".to_string(),
        });
    }

    if !config.local_base_url.starts_with("http") {
        return Err(ConfigError::InvalidValue {
            field: "local_base_url".to_string(),
            message: "must be an http(s) URL".to_string(),
        });
    }

    debug!("configuration validation passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn valid() -> Config {
        Config {
            working_directory: PathBuf::from("/srv/hangar"),
            local_base_url: "http://10.0.0.2:5000".to_string(),
            web_port: 5000,
            assets_port: 5001,
            assets_web: false,
            private_web: false,
            remote_storage: None,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid()).is_ok());
    }

    #[test]
    fn test_relative_working_directory_rejected() {
        let mut config = valid();
        config.working_directory = PathBuf::from("hangar");
        assert!(matches!(
            validate_config(&config).unwrap_err(),
            ConfigError::InvalidValue { field, .. } if field == "working_directory"
        ));
    }

    #[test]
    fn test_bare_host_base_url_rejected() {
        let mut config = valid();
        config.local_base_url = "10.0.0.2:5000".to_string();
        assert!(validate_config(&config).is_err());
    }
}

//! Configuration loading and types
//!
//! Hangar is configured by a `hangar.toml` written by the setup collaborator
//! into `~/.hangar/`. The file names the working directory that holds the
//! generated site, the base URLs the site is served from, and (optionally)
//! remote object storage settings.

mod loader;
mod types;
mod validation;

pub use loader::{config_path, load_config, load_config_from};
pub use types::{Config, RemoteStorageConfig};
pub use validation::validate_config;

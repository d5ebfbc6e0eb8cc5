//! Hangar Core - Shared foundation for the Hangar build-distribution tool
//!
//! This crate provides the configuration model, runtime state, shared types
//! and error handling used by the submission pipeline crates.

pub mod config;
pub mod error;
pub mod state;
pub mod types;

pub use config::{Config, RemoteStorageConfig};
pub use error::{ConfigError, Result, StateError};
pub use state::RuntimeState;
pub use types::{Platform, Visibility};

//! CLI definition and command handling

pub mod commands;

use clap::{Parser, Subcommand};

use commands::{StatusCommand, SubmitCommand};

/// Hangar - a local distribution server for your iOS & Android builds
#[derive(Debug, Parser)]
#[command(name = "hangar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Path to the configuration file (default: ~/.hangar/hangar.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Submit a build for distribution
    #[command(alias = "a")]
    Submit(SubmitCommand),

    /// List submitted builds
    #[command(alias = "st")]
    Status(StatusCommand),
}

impl Cli {
    /// Load configuration from the explicit or default location.
    pub fn load_config(&self) -> hangar_core::Result<hangar_core::Config> {
        match &self.config {
            Some(path) => hangar_core::config::load_config_from(path),
            None => hangar_core::config::load_config(),
        }
    }

    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Submit(ref cmd) => cmd.execute(&self),
            Commands::Status(ref cmd) => cmd.execute(&self),
        }
    }
}

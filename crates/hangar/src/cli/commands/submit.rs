//! Submit command
//!
//! Drives the submission pipeline in `hangar-publish` for one artifact.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use hangar_core::RuntimeState;
use hangar_extract::ArtifactExtractor;
use hangar_publish::{submit, RemoteOverrides, SubmitOptions};

use crate::cli::Cli;

/// Submit a build for distribution
#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Path to the build artifact (.ipa, .apk or .aab)
    #[arg(required = true)]
    pub artifact: PathBuf,

    /// The branch the build is from
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Release notes for the build
    #[arg(short, long)]
    pub notes: Option<String>,

    /// Allow the build to be downloaded via the public tunnel
    #[arg(short, long)]
    pub public: bool,

    /// Delete the source artifact after a successful submission
    #[arg(long, alias = "delete_apk")]
    pub delete_artifact: bool,

    /// S3 region for remote storage mode
    #[arg(long, env = "HANGAR_S3_REGION")]
    pub region: Option<String>,

    /// S3 bucket for remote storage mode
    #[arg(long, env = "HANGAR_S3_BUCKET")]
    pub bucket: Option<String>,

    /// S3 access key for remote storage mode
    #[arg(long = "key", env = "HANGAR_S3_ACCESS_KEY")]
    pub access_key: Option<String>,

    /// S3 secret key for remote storage mode
    #[arg(long = "secret", env = "HANGAR_S3_SECRET_KEY")]
    pub secret_key: Option<String>,
}

impl SubmitCommand {
    /// Execute the submit command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(artifact = %self.artifact.display(), "executing submit command");

        let config = cli.load_config()?;
        let state = RuntimeState::load(&config.state_path())?;

        let options = SubmitOptions {
            artifact: self.artifact.clone(),
            branch: self.branch.clone(),
            notes: self.notes.clone(),
            public: self.public,
            delete_artifact: self.delete_artifact,
            remote: RemoteOverrides {
                region: self.region.clone(),
                bucket: self.bucket.clone(),
                access_key: self.access_key.clone(),
                secret_key: self.secret_key.clone(),
            },
        };

        let outcome = submit(&config, &state, &ArtifactExtractor, &options)?;

        if !cli.quiet {
            println!("{}", style("Build added successfully!").green().bold());
            println!();
            println!(
                "  {} {} ({})",
                style(&outcome.record.bundle).bold(),
                outcome.record.version,
                outcome.record.build_number
            );
            println!("  Folder:   {}", outcome.record.folder_path);
            match &outcome.record.remote_url {
                Some(url) => println!("  Stored:   {}", style(url).cyan()),
                None => println!(
                    "  Stored:   {}",
                    outcome.layout.artifact_path.display()
                ),
            }
            if outcome.record.public {
                println!("  Exposure: {}", style("public").yellow());
            } else {
                println!("  Exposure: local network only");
            }
        }

        Ok(())
    }
}

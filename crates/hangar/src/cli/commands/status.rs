//! Status command

use clap::Args;
use console::style;
use tracing::info;

use hangar_core::RuntimeState;
use hangar_site::CatalogStore;

use crate::cli::{Cli, OutputFormat};

/// List submitted builds
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Show at most this many builds
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

impl StatusCommand {
    /// Execute the status command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!("executing status command");

        let config = cli.load_config()?;
        let state = RuntimeState::load(&config.state_path())?;
        let records = CatalogStore::new(config.builds_dir()).list()?;

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "server_url": state.current_url,
                    "builds": records.iter().take(self.limit).collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                println!("{}", style("Hangar Builds").bold());
                match &state.current_url {
                    Some(url) => println!("  Server up at {}", style(url).cyan()),
                    None => println!("  Server {}", style("not running").yellow()),
                }
                println!();

                if records.is_empty() {
                    println!("  No builds submitted yet.");
                    return Ok(());
                }

                for record in records.iter().take(self.limit) {
                    let exposure = if record.public {
                        style("public").yellow()
                    } else {
                        style("local").dim()
                    };
                    println!(
                        "  {}  {} {} ({})  [{}] {}",
                        record.date.format("%Y-%m-%d %H:%M"),
                        style(&record.bundle).bold(),
                        record.version,
                        record.build_number,
                        record.platform,
                        exposure
                    );
                }
            }
        }

        Ok(())
    }
}

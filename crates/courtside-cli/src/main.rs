mod render;
mod shell;

use std::io;

use anyhow::Context;
use clap::Parser;
use courtside_scraper::PageClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "courtside")]
#[command(about = "Look up an ATP or WTA player's profile, season form, and recent matches")]
struct Cli {
    /// Player name to search for; prompted for when omitted
    #[arg(long)]
    name: Option<String>,

    /// Tour to search (ATP or WTA, any case); prompted for when omitted
    #[arg(long)]
    tour: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = courtside_core::load_app_config().context("invalid configuration")?;
    init_tracing(&config.log_level);
    tracing::debug!(?config, "loaded configuration");

    let client = PageClient::from_config(&config).context("failed to build HTTP client")?;
    let preset = shell::Preset {
        name: cli.name,
        tour: cli.tour,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = shell::run(
        &preset,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &client,
        &config,
    )
    .await?;

    match outcome {
        shell::Outcome::Report(report) => {
            tracing::info!(profile_url = %report.profile_url, "printed player report");
        }
        shell::Outcome::InvalidTour | shell::Outcome::NotFound => {}
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only prompts and the report.
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use std::{io, path::Path};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fpl_opponents::{
    config::FplConfig,
    fetcher::{FplClient, WebJsonFetcher},
    pipeline::{emit_report, fetch_report},
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Who do the selected FPL teams play in the target gameweeks?", long_about = None)]
struct Cli {
    /// Team short codes, one report row each (default: BHA,AVL,CHE,NEW)
    #[arg(short, long, value_delimiter = ',')]
    teams: Option<Vec<String>>,
    /// Gameweeks, one report column each (default: 12,13,14)
    #[arg(short, long, value_delimiter = ',')]
    rounds: Option<Vec<u32>>,
    /// Spreadsheet path, overwritten if it exists
    #[arg(short, long)]
    output: Option<String>,
    /// Also write the report as CSV
    #[arg(long)]
    csv: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut FplConfig) {
        if let Some(teams) = self.teams {
            config.report.teams = teams;
        }
        if let Some(rounds) = self.rounds {
            config.report.rounds = rounds;
        }
        if let Some(output) = self.output {
            config.report.output_path = output;
        }
        if let Some(csv) = self.csv {
            config.report.csv_path = Some(csv);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();

    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let mut config = FplConfig::from_env();
    Cli::parse().apply(&mut config);
    info!("Using FPL API at {}", config.api.base_url);

    let fetcher = WebJsonFetcher::new(&config.scraping).context("Failed to create HTTP client")?;
    let client = FplClient::new(fetcher, config.api.clone());

    let report = fetch_report(&client, &config.report)
        .await
        .context("Failed to build opponents report")?;

    let xlsx_path = Path::new(&config.report.output_path);
    let csv_path = config.report.csv_path.as_deref().map(Path::new);
    emit_report(&report, &mut io::stdout().lock(), xlsx_path, csv_path)
        .context("Failed to emit opponents report")?;

    info!("Report written to {:?}", xlsx_path);
    Ok(())
}

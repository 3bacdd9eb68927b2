use std::path::absolute;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use extract_serac::client::CampToCampClient;
use extract_serac::config::{self, Cli, Settings};
use extract_serac::error::XReportError;
use extract_serac::export;
use extract_serac::sink::Format;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Credentials may come from a .env file, so load it before parsing flags
    config::load_dotenv();
    let cli = Cli::parse();
    let settings = Settings::from(&cli);

    let output = absolute(&settings.output)
        .with_context(|| format!("Cannot resolve output path: {}", settings.output.display()))?;

    let client = match CampToCampClient::login(&settings.api_url, &cli.user, &cli.password) {
        Ok(client) => client,
        Err(e @ XReportError::Authentication) => {
            error!("{e}");
            process::exit(1);
        }
        Err(e) => return Err(e).context("Cannot reach the authentication service"),
    };

    let written = match settings.format {
        Format::Csv => export::export_csv(&client, &settings.flattener, &output),
        Format::Jsonl => export::export_documents(&client, &settings.preference, &output),
    }
    .with_context(|| format!("Export to {} failed", output.display()))?;

    info!(rows = written, "Done - output saved to {}", output.display());
    Ok(())
}

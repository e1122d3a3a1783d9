//! Rating Aggregator CLI
//!
//! Reads a per-title ratings dataset (JSON) and prints the combined rating,
//! overall or per season.

use anyhow::Context;
use clap::Parser;
use rating_aggregator::cli::{
    args::{Cli, Commands},
    commands::{normalize, overall, season},
};
use rating_aggregator::models::config::{self, Config};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config_path = cli.config;

    // Run the appropriate command
    match cli.command {
        Commands::Overall {
            dataset,
            platforms,
            format,
        } => {
            let config = load_config(config_path.as_deref())?;
            overall::execute_overall(&dataset, platforms.as_deref(), format, &config)?;
        }

        Commands::Season {
            dataset,
            season,
            format,
        } => {
            let config = load_config(config_path.as_deref())?;
            season::execute_season(&dataset, season, format, &config)?;
        }

        Commands::Seasons { dataset, format } => {
            let config = load_config(config_path.as_deref())?;
            season::execute_seasons(&dataset, format, &config)?;
        }

        Commands::Normalize {
            value,
            platform,
            kind,
        } => {
            normalize::execute_normalize(&value, &platform, &kind)?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("rating_aggregator=debug")
    } else {
        EnvFilter::new("rating_aggregator=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Resolve the aggregation config for dataset commands.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = config::resolve_config(path).context("Failed to load configuration")?;
    tracing::debug!("Using config: {:?}", config);
    Ok(config)
}

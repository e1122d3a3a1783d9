//! Command line argument definitions.

use super::commands::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rating Aggregator - Combine movie and TV ratings across platforms
#[derive(Parser, Debug)]
#[command(name = "rating-aggregator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config.toml (overrides RATING_AGGREGATOR_CONFIG)
    #[arg(long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the overall rating of a title
    Overall {
        /// Path to the ratings dataset (JSON)
        #[arg(value_name = "DATASET")]
        dataset: PathBuf,

        /// Only use these platforms (comma separated, e.g. douban,imdb)
        #[arg(short, long, value_delimiter = ',')]
        platforms: Option<Vec<String>>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Compute the rating of one season
    Season {
        /// Path to the ratings dataset (JSON)
        #[arg(value_name = "DATASET")]
        dataset: PathBuf,

        /// Season number
        #[arg(short, long)]
        season: u16,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Compute the rating of every season in the dataset
    Seasons {
        /// Path to the ratings dataset (JSON)
        #[arg(value_name = "DATASET")]
        dataset: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Normalize a single raw score
    Normalize {
        /// Raw score as reported by the platform (e.g. "85%", "8.1/10", tbd)
        #[arg(value_name = "VALUE")]
        value: String,

        /// Platform the score came from
        #[arg(short, long)]
        platform: String,

        /// Score kind: rating, percentage, critic_avg, audience_avg, metascore, userscore
        #[arg(short, long, default_value = "rating")]
        kind: String,
    },
}

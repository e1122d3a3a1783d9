//! Season rating commands.

use super::output::{print_reports, OutputFormat, Report};
use crate::core::aggregator::{AggregateMode, Aggregator};
use crate::models::config::Config;
use crate::models::dataset::RatingDataset;
use anyhow::{Context, Result};
use std::path::Path;

/// Build the report for one season.
pub fn season_report(aggregator: &Aggregator, dataset: &RatingDataset, season: u16) -> Report {
    Report {
        label: format!("Season {}", season),
        result: aggregator.aggregate_season(dataset, season),
        contributions: aggregator.contributions(dataset, AggregateMode::Season(season)),
    }
}

fn load(dataset_path: &Path) -> Result<RatingDataset> {
    RatingDataset::load(dataset_path)
        .with_context(|| format!("Failed to load dataset {}", dataset_path.display()))
}

/// Execute the season command.
pub fn execute_season(
    dataset_path: &Path,
    season: u16,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let dataset = load(dataset_path)?;
    if !dataset.season_numbers().contains(&season) {
        return Err(crate::Error::SeasonNotFound(season).into());
    }

    let aggregator = Aggregator::new(config.clone());
    let report = season_report(&aggregator, &dataset, season);
    print_reports(&[report], format)
}

/// Execute the seasons command.
pub fn execute_seasons(dataset_path: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    let dataset = load(dataset_path)?;
    let seasons = dataset.season_numbers();
    if seasons.is_empty() {
        println!("No season data in {}", dataset_path.display());
        return Ok(());
    }

    let aggregator = Aggregator::new(config.clone());
    let reports: Vec<Report> = seasons
        .into_iter()
        .map(|season| season_report(&aggregator, &dataset, season))
        .collect();
    print_reports(&reports, format)
}

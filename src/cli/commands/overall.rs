//! Overall rating command.

use super::output::{print_reports, OutputFormat, Report};
use crate::core::aggregator::{AggregateMode, Aggregator};
use crate::models::config::Config;
use crate::models::dataset::RatingDataset;
use crate::models::platform::Platform;
use anyhow::{Context, Result};
use std::path::Path;

/// Build the overall report for a dataset.
pub fn overall_report(aggregator: &Aggregator, dataset: &RatingDataset) -> Report {
    Report {
        label: "Overall".to_string(),
        result: aggregator.aggregate_overall(dataset),
        contributions: aggregator.contributions(dataset, AggregateMode::Overall),
    }
}

/// Execute the overall command.
pub fn execute_overall(
    dataset_path: &Path,
    platforms: Option<&[String]>,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let dataset = RatingDataset::load(dataset_path)
        .with_context(|| format!("Failed to load dataset {}", dataset_path.display()))?;

    let mut aggregator = Aggregator::new(config.clone());
    if let Some(names) = platforms {
        let filter = names
            .iter()
            .map(|name| name.parse::<Platform>())
            .collect::<crate::Result<Vec<_>>>()?;
        aggregator = aggregator.with_platforms(filter);
    }

    let report = overall_report(&aggregator, &dataset);
    print_reports(&[report], format)
}

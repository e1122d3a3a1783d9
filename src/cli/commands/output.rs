//! Shared result printing.

use crate::models::platform::Platform;
use crate::models::result::{AggregateResult, Contribution};
use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Simple,
    Json,
}

/// One aggregation with its breakdown, ready for printing.
#[derive(Debug, Serialize)]
pub struct Report {
    pub label: String,
    #[serde(flatten)]
    pub result: AggregateResult,
    pub contributions: Vec<Contribution>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    generated_at: chrono::DateTime<chrono::Utc>,
    reports: &'a [Report],
}

/// Print reports in the requested format.
pub fn print_reports(reports: &[Report], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(reports)?,
        OutputFormat::Simple => print_simple(reports),
        OutputFormat::Table => print_table(reports),
    }
    Ok(())
}

fn print_json(reports: &[Report]) -> Result<()> {
    let output = JsonOutput {
        generated_at: chrono::Utc::now(),
        reports,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_simple(reports: &[Report]) {
    for report in reports {
        println!(
            "{}\t{}\t{}",
            report.label,
            report.result.display_rating().unwrap_or_else(|| "-".to_string()),
            platform_keys(&report.result.platforms)
        );
    }
}

fn print_table(reports: &[Report]) {
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }

        let rating = match report.result.display_rating() {
            Some(r) => r.green().bold(),
            None => "no rating".red(),
        };
        println!(
            "{} {} ({} platform(s))",
            format!("{}:", report.label).bold(),
            rating,
            report.result.valid_ratings
        );

        if report.contributions.is_empty() {
            continue;
        }

        println!(
            "  {:<16} {:>7} {:>12}",
            "Platform".dimmed(),
            "Score".dimmed(),
            "Weight".dimmed()
        );
        for c in &report.contributions {
            println!(
                "  {:<16} {:>7.2} {:>12.2}",
                c.platform.label(),
                c.score,
                c.weight
            );
        }
    }
}

fn platform_keys(platforms: &[Platform]) -> String {
    platforms
        .iter()
        .map(|p| p.key())
        .collect::<Vec<_>>()
        .join(",")
}

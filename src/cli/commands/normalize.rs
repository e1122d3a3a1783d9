//! Normalize command: inspect how one raw score is read.

use crate::core::adjust::{adjust_score, ScoreBand};
use crate::core::normalizer::normalize;
use crate::models::platform::{Platform, ScoreKind};
use crate::models::rating::RawValue;
use anyhow::Result;
use colored::Colorize;

/// Execute the normalize command.
pub fn execute_normalize(value: &str, platform: &str, kind: &str) -> Result<()> {
    let platform: Platform = platform.parse()?;
    let kind: ScoreKind = kind.parse()?;
    let raw = RawValue::from(value);

    match normalize(Some(&raw), platform, kind) {
        Some(normalized) => {
            let band = ScoreBand::of(normalized);
            println!("{} {} ({})", "Platform:".bold(), platform.label(), kind);
            println!("{} {:.2}", "Normalized:".bold(), normalized);
            println!(
                "{} {:.2} [{}]",
                "Adjusted:".bold(),
                adjust_score(normalized),
                band
            );
        }
        None => {
            println!(
                "{} '{}' is not a usable {} score",
                "[NONE]".yellow(),
                value,
                platform.label()
            );
        }
    }

    Ok(())
}

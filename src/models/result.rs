//! Aggregation output.

use super::platform::Platform;
use serde::{Deserialize, Serialize};

/// One platform's effective score and weight in an aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub platform: Platform,
    /// Adjusted score on the 0-10 scale (averaged over valid sub-scores).
    pub score: f64,
    /// Weight applied to `score` in the weighted mean.
    pub weight: f64,
}

/// Combined rating handed to the presentation layer.
///
/// `rating` is `None` exactly when `valid_ratings` is zero, and `platforms`
/// always has `valid_ratings` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub rating: Option<f64>,
    pub valid_ratings: usize,
    pub platforms: Vec<Platform>,
}

impl AggregateResult {
    /// Result with no usable score.
    pub fn empty() -> Self {
        Self {
            rating: None,
            valid_ratings: 0,
            platforms: Vec::new(),
        }
    }

    /// Fold contributions into a weighted mean.
    pub fn from_contributions(contributions: &[Contribution]) -> Self {
        let total_weight: f64 = contributions.iter().map(|c| c.weight).sum();
        if total_weight <= 0.0 {
            return Self::empty();
        }

        let weighted_sum: f64 = contributions.iter().map(|c| c.score * c.weight).sum();
        let platforms: Vec<Platform> = contributions.iter().map(|c| c.platform).collect();

        Self {
            rating: Some(weighted_sum / total_weight),
            valid_ratings: platforms.len(),
            platforms,
        }
    }

    /// Rating rounded to one decimal place for display.
    pub fn display_rating(&self) -> Option<String> {
        self.rating.map(|r| format!("{:.1}", r))
    }

    /// Whether at least one platform contributed.
    pub fn has_rating(&self) -> bool {
        self.rating.is_some()
    }
}

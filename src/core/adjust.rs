//! Score-band adjustment.
//!
//! A fixed calibration curve applied after normalization, identical for every
//! platform: acclaimed scores get a slight boost, mediocre and poor ones are
//! damped.

use serde::{Deserialize, Serialize};

/// Quality band of a normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 8.5 and above.
    Acclaimed,
    /// 6.5 up to 8.5.
    Good,
    /// 5.0 up to 6.5.
    Mixed,
    /// Below 5.0.
    Poor,
}

impl ScoreBand {
    /// Band a normalized score falls into.
    pub fn of(score: f64) -> Self {
        if score >= 8.5 {
            ScoreBand::Acclaimed
        } else if score >= 6.5 {
            ScoreBand::Good
        } else if score >= 5.0 {
            ScoreBand::Mixed
        } else {
            ScoreBand::Poor
        }
    }

    /// Multiplier applied to scores in this band.
    pub fn factor(&self) -> f64 {
        match self {
            ScoreBand::Acclaimed => 1.02,
            ScoreBand::Good => 1.0,
            ScoreBand::Mixed => 0.98,
            ScoreBand::Poor => 0.93,
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBand::Acclaimed => write!(f, "acclaimed"),
            ScoreBand::Good => write!(f, "good"),
            ScoreBand::Mixed => write!(f, "mixed"),
            ScoreBand::Poor => write!(f, "poor"),
        }
    }
}

/// Apply the band calibration curve to a 0-10 score.
pub fn adjust_score(score: f64) -> f64 {
    score * ScoreBand::of(score).factor()
}

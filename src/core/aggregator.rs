//! Cross-platform rating aggregation.
//!
//! One aggregator serves both granularities:
//!
//! 1. **Overall**: each platform's adjusted score is weighted by
//!    `trust * (1 + confidence(votes))`.
//! 2. **Season**: each sub-score is weighted by its own vote/review count, so the
//!    result is a vote-weighted mean. Platforms without a per-season breakdown
//!    (IMDb, Letterboxd, Trakt) are skipped, and missing counts are replaced by
//!    the dataset's median vote count.
//!
//! Both modes are pure functions of the dataset snapshot and the config.

use crate::core::adjust::adjust_score;
use crate::core::normalizer::normalize;
use crate::core::votes::{confidence, median_vote_count, parse_vote_count};
use crate::models::config::Config;
use crate::models::dataset::RatingDataset;
use crate::models::platform::Platform;
use crate::models::rating::{PlatformRating, ScoreField};
use crate::models::result::{AggregateResult, Contribution};
use std::collections::{BTreeMap, BTreeSet};

/// Which aggregation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateMode {
    /// Whole-title, trust-weighted.
    Overall,
    /// One season, vote-count-weighted.
    Season(u16),
}

impl std::fmt::Display for AggregateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregateMode::Overall => write!(f, "overall"),
            AggregateMode::Season(n) => write!(f, "season {}", n),
        }
    }
}

/// A valid sub-score after normalization and band adjustment.
#[derive(Debug, Clone, Copy)]
struct ScoredField {
    adjusted: f64,
    count: Option<f64>,
}

fn score_fields(platform: Platform, fields: &[ScoreField<'_>]) -> Vec<ScoredField> {
    fields
        .iter()
        .filter_map(|field| {
            let normalized = normalize(field.score, platform, field.kind)?;
            Some(ScoredField {
                adjusted: adjust_score(normalized),
                count: field.count.and_then(parse_vote_count).filter(|c| *c > 0.0),
            })
        })
        .collect()
}

/// Rating aggregator with its weighting configuration.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    config: Config,
    filter: Option<BTreeSet<Platform>>,
}

impl Aggregator {
    /// Create an aggregator using the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            filter: None,
        }
    }

    /// Restrict aggregation to the given platforms.
    pub fn with_platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.filter = Some(platforms.into_iter().collect());
        self
    }

    fn includes(&self, platform: Platform) -> bool {
        self.filter
            .as_ref()
            .map_or(true, |filter| filter.contains(&platform))
    }

    /// Per-platform breakdown, in canonical platform order.
    pub fn contributions(&self, dataset: &RatingDataset, mode: AggregateMode) -> Vec<Contribution> {
        let ratings = dataset.iter().filter(|r| self.includes(r.platform()));

        match mode {
            AggregateMode::Overall => ratings
                .filter_map(|r| self.overall_contribution(r))
                .collect(),
            AggregateMode::Season(season_number) => {
                let median = median_vote_count(
                    dataset,
                    season_number,
                    self.config.fallback_vote_count,
                );
                ratings
                    .filter_map(|r| self.season_contribution(r, season_number, median))
                    .collect()
            }
        }
    }

    /// Aggregate the dataset in the given mode.
    pub fn aggregate(&self, dataset: &RatingDataset, mode: AggregateMode) -> AggregateResult {
        let contributions = self.contributions(dataset, mode);
        let result = AggregateResult::from_contributions(&contributions);
        tracing::debug!(
            "Aggregated {}: {:?} from {} platform(s)",
            mode,
            result.rating,
            result.valid_ratings
        );
        result
    }

    /// Whole-title aggregate.
    pub fn aggregate_overall(&self, dataset: &RatingDataset) -> AggregateResult {
        self.aggregate(dataset, AggregateMode::Overall)
    }

    /// Single-season aggregate.
    pub fn aggregate_season(&self, dataset: &RatingDataset, season_number: u16) -> AggregateResult {
        self.aggregate(dataset, AggregateMode::Season(season_number))
    }

    /// Aggregate for every season number present in the dataset.
    pub fn aggregate_all_seasons(&self, dataset: &RatingDataset) -> BTreeMap<u16, AggregateResult> {
        dataset
            .season_numbers()
            .into_iter()
            .map(|n| (n, self.aggregate_season(dataset, n)))
            .collect()
    }

    fn overall_contribution(&self, rating: &PlatformRating) -> Option<Contribution> {
        let platform = rating.platform();
        let scored = score_fields(platform, &rating.title_fields());
        if scored.is_empty() {
            tracing::debug!("{}: no valid score", platform);
            return None;
        }

        let score = scored.iter().map(|s| s.adjusted).sum::<f64>() / scored.len() as f64;
        // The largest count behind any valid sub-score stands in for the platform.
        let votes = scored.iter().filter_map(|s| s.count).reduce(f64::max);
        let vote_bonus = votes
            .map(|v| confidence(v, self.config.full_confidence_votes))
            .unwrap_or(0.0);
        let weight = self.config.trust.get(platform) * (1.0 + vote_bonus);

        if weight <= 0.0 {
            tracing::debug!("{}: zero trust weight, skipped", platform);
            return None;
        }

        tracing::trace!(
            "{}: score {:.3}, votes {:?}, weight {:.3}",
            platform,
            score,
            votes,
            weight
        );
        Some(Contribution {
            platform,
            score,
            weight,
        })
    }

    fn season_contribution(
        &self,
        rating: &PlatformRating,
        season_number: u16,
        median: f64,
    ) -> Option<Contribution> {
        let platform = rating.platform();
        if !platform.is_seasonal() {
            return None;
        }
        let fields = rating.season_fields(season_number)?;
        let scored = score_fields(platform, &fields);
        if scored.is_empty() {
            tracing::debug!("{}: no valid score for season {}", platform, season_number);
            return None;
        }

        let mut weighted_sum = 0.0;
        let mut weight = 0.0;
        for field in &scored {
            let count = field.count.unwrap_or(median);
            weighted_sum += field.adjusted * count;
            weight += count;
        }

        if weight <= 0.0 {
            return None;
        }

        tracing::trace!(
            "{} season {}: score {:.3}, votes {:.0}",
            platform,
            season_number,
            weighted_sum / weight,
            weight
        );
        Some(Contribution {
            platform,
            score: weighted_sum / weight,
            weight,
        })
    }
}

/// Whole-title aggregate with the given configuration.
pub fn aggregate_overall(dataset: &RatingDataset, config: &Config) -> AggregateResult {
    Aggregator::new(config.clone()).aggregate_overall(dataset)
}

/// Single-season aggregate with the given configuration.
pub fn aggregate_season(
    dataset: &RatingDataset,
    season_number: u16,
    config: &Config,
) -> AggregateResult {
    Aggregator::new(config.clone()).aggregate_season(dataset, season_number)
}

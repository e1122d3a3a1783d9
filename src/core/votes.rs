//! Vote counts: parsing, confidence weighting and the median estimator.

use crate::core::normalizer::parse_leading_number;
use crate::models::dataset::RatingDataset;
use crate::models::rating::RawValue;

/// Vote count at which the confidence multiplier saturates.
pub const DEFAULT_FULL_CONFIDENCE_VOTES: f64 = 200_000.0;

/// Median estimate used when no season count is known at all.
pub const DEFAULT_FALLBACK_VOTE_COUNT: f64 = 1000.0;

/// Parse a vote or review count.
///
/// Strings may carry a `K` (thousands) or `M` (millions) suffix, thousands
/// separators and a trailing `+` ("12.5K+", "1,234"). Without a suffix every
/// non-digit is dropped. Returns `None` when nothing numeric remains.
pub fn parse_vote_count(raw: &RawValue) -> Option<f64> {
    let count = match raw {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => {
            let s = s.trim();
            let multiplier = if s.contains('M') {
                Some(1_000_000.0)
            } else if s.contains('K') {
                Some(1_000.0)
            } else {
                None
            };

            match multiplier {
                Some(multiplier) => {
                    let cleaned: String = s.chars().filter(|c| *c != ',').collect();
                    parse_leading_number(&cleaned)? * multiplier
                }
                None => {
                    let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
                    if digits.is_empty() {
                        return None;
                    }
                    digits.parse::<f64>().ok()?
                }
            }
        }
        RawValue::Other(_) => return None,
    };

    if !count.is_finite() || count < 0.0 {
        return None;
    }
    Some(count)
}

/// Confidence multiplier in [0, 1] for a parsed count.
///
/// Grows with log10 of the count and reaches 1.0 at `full_confidence_votes`.
pub fn confidence(count: f64, full_confidence_votes: f64) -> f64 {
    if !count.is_finite() || count <= 0.0 {
        return 0.0;
    }
    ((count + 1.0).log10() / full_confidence_votes.log10()).clamp(0.0, 1.0)
}

/// Confidence multiplier for a raw count, with the default saturation point.
pub fn vote_weight(raw: Option<&RawValue>) -> f64 {
    vote_weight_with(raw, DEFAULT_FULL_CONFIDENCE_VOTES)
}

/// Confidence multiplier for a raw count. Unparsable or missing counts give 0.
pub fn vote_weight_with(raw: Option<&RawValue>, full_confidence_votes: f64) -> f64 {
    raw.and_then(parse_vote_count)
        .map(|count| confidence(count, full_confidence_votes))
        .unwrap_or(0.0)
}

/// Standard median; `None` for an empty input.
pub fn median(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

fn positive_count(raw: &RawValue) -> Option<f64> {
    parse_vote_count(raw).filter(|count| *count > 0.0)
}

/// Estimate a vote count for season contributors that report none.
///
/// Uses the median of the positive counts known for `season_number`; if there
/// are none, the median over every season of every platform; failing that,
/// `fallback`.
pub fn median_vote_count(dataset: &RatingDataset, season_number: u16, fallback: f64) -> f64 {
    let season_counts: Vec<f64> = dataset
        .iter()
        .flat_map(|r| r.season_counts(season_number))
        .filter_map(positive_count)
        .collect();
    if let Some(m) = median(season_counts) {
        return m;
    }

    let all_counts: Vec<f64> = dataset
        .iter()
        .flat_map(|r| r.all_season_counts())
        .filter_map(positive_count)
        .collect();
    if let Some(m) = median(all_counts) {
        tracing::debug!(
            "No vote counts for season {}, using median {} across all seasons",
            season_number,
            m
        );
        return m;
    }

    tracing::debug!(
        "No vote counts in dataset, using fallback {} for season {}",
        fallback,
        season_number
    );
    fallback
}

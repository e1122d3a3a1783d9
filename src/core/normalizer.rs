//! Score normalization.
//!
//! Converts a platform's raw score into the canonical 0-10 scale. Anything that
//! cannot be read as a positive score yields `None`; nothing here errors.
//!
//! Scale rules:
//! - Douban, IMDb, TMDB, Trakt: 0-10, unchanged
//! - Letterboxd: 0-5, doubled
//! - Rotten Tomatoes: percentages divided by 10, audience average doubled,
//!   critic average unchanged (already 0-10)
//! - Metacritic: metascore divided by 10, user score unchanged

use crate::models::platform::{Platform, ScoreKind};
use crate::models::rating::RawValue;

/// Highest value a normalized score may take.
pub const MAX_NORMALIZED_SCORE: f64 = 10.0;

/// Text placeholders meaning "no score yet".
const SENTINELS: &[&str] = &["暂无评分", "tbd", "n/a", "0", ""];

/// Whether a raw value is one of the "no score" placeholders.
pub fn is_sentinel(raw: &RawValue) -> bool {
    match raw {
        RawValue::Number(n) => *n == 0.0,
        RawValue::Text(s) => {
            let s = s.trim().to_lowercase();
            SENTINELS.contains(&s.as_str())
        }
        RawValue::Other(_) => false,
    }
}

/// Parse the numeric prefix of a string, the way "8.5 stars" reads as 8.5.
pub(crate) fn parse_leading_number(s: &str) -> Option<f64> {
    let re = regex::Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)").ok()?;
    let m = re.find(s.trim_start())?;
    m.as_str().parse::<f64>().ok()
}

/// Read a raw score as a number on its native scale.
///
/// Strips a trailing `%` and anything after `/` ("8.5/10" reads as 8.5).
pub fn parse_raw_score(raw: &RawValue) -> Option<f64> {
    if is_sentinel(raw) {
        return None;
    }

    let value = match raw {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => {
            let s = s.trim();
            let s = s.strip_suffix('%').unwrap_or(s);
            let head = s.split('/').next().unwrap_or(s);
            parse_leading_number(head)?
        }
        RawValue::Other(_) => return None,
    };

    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    Some(value)
}

/// Conversion from a platform's native scale to 0-10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scale {
    /// Already 0-10.
    Native,
    /// 0-5, doubled.
    FivePoint,
    /// 0-100, divided by ten.
    Hundred,
}

impl Scale {
    fn of(platform: Platform, kind: ScoreKind) -> Self {
        match platform {
            Platform::Douban | Platform::Imdb | Platform::Tmdb | Platform::Trakt => Scale::Native,
            Platform::Letterboxd => Scale::FivePoint,
            Platform::RottenTomatoes => match kind {
                ScoreKind::Percentage => Scale::Hundred,
                ScoreKind::AudienceAverage => Scale::FivePoint,
                _ => Scale::Native,
            },
            Platform::Metacritic => match kind {
                ScoreKind::Userscore => Scale::Native,
                _ => Scale::Hundred,
            },
        }
    }

    fn apply(&self, value: f64) -> f64 {
        match self {
            Scale::Native => value,
            Scale::FivePoint => value * 2.0,
            Scale::Hundred => value / 10.0,
        }
    }
}

/// Normalize a raw score to the 0-10 scale.
///
/// Returns `None` for absent values, sentinels, unparsable text, zero, and
/// anything that lands outside (0, 10] after scaling.
pub fn normalize(raw: Option<&RawValue>, platform: Platform, kind: ScoreKind) -> Option<f64> {
    let raw = raw?;
    let Some(value) = parse_raw_score(raw) else {
        tracing::debug!("No usable {} {} score in {:?}", platform, kind, raw);
        return None;
    };

    let normalized = Scale::of(platform, kind).apply(value);
    if normalized > MAX_NORMALIZED_SCORE {
        tracing::debug!(
            "Discarding {} {} score {} (normalized {:.2} exceeds {})",
            platform,
            kind,
            raw,
            normalized,
            MAX_NORMALIZED_SCORE
        );
        return None;
    }

    Some(normalized)
}

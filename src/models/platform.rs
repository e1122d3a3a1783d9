//! Rating platforms and score kinds.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// External rating source.
///
/// Declaration order is the canonical display order; `AggregateResult::platforms`
/// follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Douban,
    Imdb,
    Letterboxd,
    RottenTomatoes,
    Metacritic,
    Tmdb,
    Trakt,
}

impl Platform {
    /// All supported platforms, in canonical order.
    pub const ALL: [Platform; 7] = [
        Platform::Douban,
        Platform::Imdb,
        Platform::Letterboxd,
        Platform::RottenTomatoes,
        Platform::Metacritic,
        Platform::Tmdb,
        Platform::Trakt,
    ];

    /// Platforms that publish a usable per-season breakdown.
    ///
    /// IMDb, Letterboxd and Trakt are excluded at season granularity.
    pub const SEASONAL: [Platform; 4] = [
        Platform::Douban,
        Platform::RottenTomatoes,
        Platform::Metacritic,
        Platform::Tmdb,
    ];

    /// Stable lowercase key used in JSON payloads and config files.
    pub fn key(&self) -> &'static str {
        match self {
            Platform::Douban => "douban",
            Platform::Imdb => "imdb",
            Platform::Letterboxd => "letterboxd",
            Platform::RottenTomatoes => "rottentomatoes",
            Platform::Metacritic => "metacritic",
            Platform::Tmdb => "tmdb",
            Platform::Trakt => "trakt",
        }
    }

    /// Human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Douban => "Douban",
            Platform::Imdb => "IMDb",
            Platform::Letterboxd => "Letterboxd",
            Platform::RottenTomatoes => "Rotten Tomatoes",
            Platform::Metacritic => "Metacritic",
            Platform::Tmdb => "TMDB",
            Platform::Trakt => "Trakt",
        }
    }

    /// Whether this platform takes part in season-level aggregation.
    pub fn is_seasonal(&self) -> bool {
        Self::SEASONAL.contains(self)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Platform {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect();

        match normalized.as_str() {
            "douban" => Ok(Platform::Douban),
            "imdb" => Ok(Platform::Imdb),
            "letterboxd" | "lb" => Ok(Platform::Letterboxd),
            "rottentomatoes" | "rt" => Ok(Platform::RottenTomatoes),
            "metacritic" | "mc" => Ok(Platform::Metacritic),
            "tmdb" => Ok(Platform::Tmdb),
            "trakt" => Ok(Platform::Trakt),
            _ => Err(crate::Error::UnknownPlatform(s.to_string())),
        }
    }
}

/// Which scale a raw score is expressed in, for platforms with several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    /// The platform's primary rating on its native scale.
    #[default]
    Rating,
    /// 0-100 percentage (Rotten Tomatoes tomatometer / audience score).
    Percentage,
    /// Rotten Tomatoes critic average, native 0-10.
    CriticAverage,
    /// Rotten Tomatoes audience average, native 0-5.
    AudienceAverage,
    /// Metacritic critic score, 0-100.
    Metascore,
    /// Metacritic user score, 0-10.
    Userscore,
}

impl std::fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreKind::Rating => write!(f, "rating"),
            ScoreKind::Percentage => write!(f, "percentage"),
            ScoreKind::CriticAverage => write!(f, "critic_avg"),
            ScoreKind::AudienceAverage => write!(f, "audience_avg"),
            ScoreKind::Metascore => write!(f, "metascore"),
            ScoreKind::Userscore => write!(f, "userscore"),
        }
    }
}

impl FromStr for ScoreKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rating" => Ok(ScoreKind::Rating),
            "percentage" | "percent" => Ok(ScoreKind::Percentage),
            "critic_avg" | "critics_avg" | "critic_average" => Ok(ScoreKind::CriticAverage),
            "audience_avg" | "audience_average" => Ok(ScoreKind::AudienceAverage),
            "metascore" => Ok(ScoreKind::Metascore),
            "userscore" | "user_score" => Ok(ScoreKind::Userscore),
            _ => Err(crate::Error::UnknownScoreKind(s.to_string())),
        }
    }
}

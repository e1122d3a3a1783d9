//! Raw per-platform rating records.
//!
//! Each platform reports scores on its own scale, counts in its own format and
//! "no data" in its own way. These types keep the payload as-is; interpretation
//! happens in `core::normalizer` and `core::votes`.

use super::platform::{Platform, ScoreKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// A raw score or count exactly as the platform delivered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    /// Any other JSON shape (booleans, arrays, objects). Never a usable value.
    Other(serde_json::Value),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => f.write_str(s),
            RawValue::Other(v) => write!(f, "{}", v),
        }
    }
}

// ========== LENIENT DESERIALIZATION ==========

/// Treat `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a season list, dropping entries that do not fit the record shape
/// (for example a missing `season_number`). `null` or a non-list gives no seasons.
fn lenient_seasons<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let entries = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(entries) => entries,
        serde_json::Value::Null => return Ok(Vec::new()),
        other => {
            tracing::debug!("Ignoring malformed season list: {}", other);
            return Ok(Vec::new());
        }
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(season) => Some(season),
            Err(e) => {
                tracing::debug!("Skipping malformed season record: {}", e);
                None
            }
        })
        .collect())
}

/// Deserialize one platform record, degrading to "absent" when it does not parse.
pub(crate) fn lenient_record<'de, D, T>(
    deserializer: D,
) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(record) => Ok(Some(record)),
        Err(e) => {
            tracing::debug!("Ignoring malformed platform record: {}", e);
            Ok(None)
        }
    }
}

/// One score together with the count that backs it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreField<'a> {
    pub kind: ScoreKind,
    pub score: Option<&'a RawValue>,
    pub count: Option<&'a RawValue>,
}

impl<'a> ScoreField<'a> {
    fn new(kind: ScoreKind, score: &'a Option<RawValue>, count: &'a Option<RawValue>) -> Self {
        Self {
            kind,
            score: score.as_ref(),
            count: count.as_ref(),
        }
    }
}

// ========== DOUBAN ==========

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoubanRating {
    #[serde(default)]
    pub rating: Option<RawValue>,
    #[serde(default)]
    pub rating_people: Option<RawValue>,
    #[serde(default, deserialize_with = "lenient_seasons")]
    pub seasons: Vec<DoubanSeason>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoubanSeason {
    pub season_number: u16,
    #[serde(default)]
    pub rating: Option<RawValue>,
    #[serde(default)]
    pub rating_people: Option<RawValue>,
}

// ========== IMDB ==========

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImdbRating {
    #[serde(default)]
    pub rating: Option<RawValue>,
    #[serde(default)]
    pub rating_people: Option<RawValue>,
}

// ========== LETTERBOXD ==========

/// Letterboxd rating on its native 0-5 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LetterboxdRating {
    #[serde(default)]
    pub rating: Option<RawValue>,
    #[serde(default)]
    pub rating_count: Option<RawValue>,
}

// ========== ROTTEN TOMATOES ==========

/// The four Rotten Tomatoes sub-scores and their review counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RottenTomatoesScores {
    /// Critic percentage, 0-100.
    #[serde(default)]
    pub tomatometer: Option<RawValue>,
    /// Audience percentage, 0-100.
    #[serde(default)]
    pub audience_score: Option<RawValue>,
    /// Critic average, 0-10.
    #[serde(default)]
    pub critics_avg: Option<RawValue>,
    /// Audience average, 0-5.
    #[serde(default)]
    pub audience_avg: Option<RawValue>,
    #[serde(default)]
    pub critics_count: Option<RawValue>,
    #[serde(default)]
    pub audience_count: Option<RawValue>,
}

impl RottenTomatoesScores {
    fn fields(&self) -> Vec<ScoreField<'_>> {
        vec![
            ScoreField::new(ScoreKind::Percentage, &self.tomatometer, &self.critics_count),
            ScoreField::new(ScoreKind::Percentage, &self.audience_score, &self.audience_count),
            ScoreField::new(ScoreKind::CriticAverage, &self.critics_avg, &self.critics_count),
            ScoreField::new(ScoreKind::AudienceAverage, &self.audience_avg, &self.audience_count),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RottenTomatoesRating {
    #[serde(default, deserialize_with = "null_as_default")]
    pub series: RottenTomatoesScores,
    #[serde(default, deserialize_with = "lenient_seasons")]
    pub seasons: Vec<RottenTomatoesSeason>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RottenTomatoesSeason {
    pub season_number: u16,
    #[serde(flatten)]
    pub scores: RottenTomatoesScores,
}

// ========== METACRITIC ==========

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetacriticScores {
    /// Critic score, 0-100.
    #[serde(default)]
    pub metascore: Option<RawValue>,
    #[serde(default)]
    pub critics_count: Option<RawValue>,
    /// User score, 0-10.
    #[serde(default)]
    pub userscore: Option<RawValue>,
    #[serde(default)]
    pub users_count: Option<RawValue>,
}

impl MetacriticScores {
    fn fields(&self) -> Vec<ScoreField<'_>> {
        vec![
            ScoreField::new(ScoreKind::Metascore, &self.metascore, &self.critics_count),
            ScoreField::new(ScoreKind::Userscore, &self.userscore, &self.users_count),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetacriticRating {
    #[serde(default, deserialize_with = "null_as_default")]
    pub overall: MetacriticScores,
    #[serde(default, deserialize_with = "lenient_seasons")]
    pub seasons: Vec<MetacriticSeason>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetacriticSeason {
    pub season_number: u16,
    #[serde(flatten)]
    pub scores: MetacriticScores,
}

// ========== TMDB ==========

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TmdbRating {
    #[serde(default)]
    pub rating: Option<RawValue>,
    #[serde(default, alias = "voteCount")]
    pub vote_count: Option<RawValue>,
    #[serde(default, deserialize_with = "lenient_seasons")]
    pub seasons: Vec<TmdbSeason>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TmdbSeason {
    pub season_number: u16,
    #[serde(default)]
    pub rating: Option<RawValue>,
    #[serde(default, alias = "voteCount")]
    pub vote_count: Option<RawValue>,
}

// ========== TRAKT ==========

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraktRating {
    #[serde(default)]
    pub rating: Option<RawValue>,
    #[serde(default)]
    pub votes: Option<RawValue>,
    /// Carried through but not used for season aggregation.
    #[serde(default, deserialize_with = "lenient_seasons")]
    pub seasons: Vec<TraktSeason>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraktSeason {
    pub season_number: u16,
    #[serde(default)]
    pub rating: Option<RawValue>,
    #[serde(default)]
    pub votes: Option<RawValue>,
}

// ========== TAGGED UNION ==========

/// A rating record from one platform.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformRating {
    Douban(DoubanRating),
    Imdb(ImdbRating),
    Letterboxd(LetterboxdRating),
    RottenTomatoes(RottenTomatoesRating),
    Metacritic(MetacriticRating),
    Tmdb(TmdbRating),
    Trakt(TraktRating),
}

impl PlatformRating {
    /// The platform this record came from.
    pub fn platform(&self) -> Platform {
        match self {
            PlatformRating::Douban(_) => Platform::Douban,
            PlatformRating::Imdb(_) => Platform::Imdb,
            PlatformRating::Letterboxd(_) => Platform::Letterboxd,
            PlatformRating::RottenTomatoes(_) => Platform::RottenTomatoes,
            PlatformRating::Metacritic(_) => Platform::Metacritic,
            PlatformRating::Tmdb(_) => Platform::Tmdb,
            PlatformRating::Trakt(_) => Platform::Trakt,
        }
    }

    /// Whole-title score fields.
    pub fn title_fields(&self) -> Vec<ScoreField<'_>> {
        match self {
            PlatformRating::Douban(r) => {
                vec![ScoreField::new(ScoreKind::Rating, &r.rating, &r.rating_people)]
            }
            PlatformRating::Imdb(r) => {
                vec![ScoreField::new(ScoreKind::Rating, &r.rating, &r.rating_people)]
            }
            PlatformRating::Letterboxd(r) => {
                vec![ScoreField::new(ScoreKind::Rating, &r.rating, &r.rating_count)]
            }
            PlatformRating::RottenTomatoes(r) => r.series.fields(),
            PlatformRating::Metacritic(r) => r.overall.fields(),
            PlatformRating::Tmdb(r) => {
                vec![ScoreField::new(ScoreKind::Rating, &r.rating, &r.vote_count)]
            }
            PlatformRating::Trakt(r) => {
                vec![ScoreField::new(ScoreKind::Rating, &r.rating, &r.votes)]
            }
        }
    }

    /// Score fields for one season, or `None` if the platform has no record for it.
    ///
    /// Platforms without a per-season breakdown always return `None`.
    pub fn season_fields(&self, season_number: u16) -> Option<Vec<ScoreField<'_>>> {
        match self {
            PlatformRating::Douban(r) => r
                .seasons
                .iter()
                .find(|s| s.season_number == season_number)
                .map(|s| vec![ScoreField::new(ScoreKind::Rating, &s.rating, &s.rating_people)]),
            PlatformRating::RottenTomatoes(r) => r
                .seasons
                .iter()
                .find(|s| s.season_number == season_number)
                .map(|s| s.scores.fields()),
            PlatformRating::Metacritic(r) => r
                .seasons
                .iter()
                .find(|s| s.season_number == season_number)
                .map(|s| s.scores.fields()),
            PlatformRating::Tmdb(r) => r
                .seasons
                .iter()
                .find(|s| s.season_number == season_number)
                .map(|s| vec![ScoreField::new(ScoreKind::Rating, &s.rating, &s.vote_count)]),
            PlatformRating::Imdb(_) | PlatformRating::Letterboxd(_) | PlatformRating::Trakt(_) => {
                None
            }
        }
    }

    /// Season numbers present in this record, including ones not used for aggregation.
    pub fn season_numbers(&self) -> Vec<u16> {
        match self {
            PlatformRating::Douban(r) => r.seasons.iter().map(|s| s.season_number).collect(),
            PlatformRating::RottenTomatoes(r) => {
                r.seasons.iter().map(|s| s.season_number).collect()
            }
            PlatformRating::Metacritic(r) => r.seasons.iter().map(|s| s.season_number).collect(),
            PlatformRating::Tmdb(r) => r.seasons.iter().map(|s| s.season_number).collect(),
            PlatformRating::Trakt(r) => r.seasons.iter().map(|s| s.season_number).collect(),
            PlatformRating::Imdb(_) | PlatformRating::Letterboxd(_) => Vec::new(),
        }
    }

    /// Count fields of one season's record (each field once).
    pub fn season_counts(&self, season_number: u16) -> Vec<&RawValue> {
        self.season_counts_where(|n| n == season_number)
    }

    /// Every count field from every season record, whatever the season.
    pub fn all_season_counts(&self) -> Vec<&RawValue> {
        self.season_counts_where(|_| true)
    }

    fn season_counts_where(&self, wanted: impl Fn(u16) -> bool) -> Vec<&RawValue> {
        let mut counts = Vec::new();
        match self {
            PlatformRating::Douban(r) => {
                for season in r.seasons.iter().filter(|s| wanted(s.season_number)) {
                    counts.extend(season.rating_people.as_ref());
                }
            }
            PlatformRating::RottenTomatoes(r) => {
                for season in r.seasons.iter().filter(|s| wanted(s.season_number)) {
                    counts.extend(season.scores.critics_count.as_ref());
                    counts.extend(season.scores.audience_count.as_ref());
                }
            }
            PlatformRating::Metacritic(r) => {
                for season in r.seasons.iter().filter(|s| wanted(s.season_number)) {
                    counts.extend(season.scores.critics_count.as_ref());
                    counts.extend(season.scores.users_count.as_ref());
                }
            }
            PlatformRating::Tmdb(r) => {
                for season in r.seasons.iter().filter(|s| wanted(s.season_number)) {
                    counts.extend(season.vote_count.as_ref());
                }
            }
            PlatformRating::Trakt(r) => {
                for season in r.seasons.iter().filter(|s| wanted(s.season_number)) {
                    counts.extend(season.votes.as_ref());
                }
            }
            PlatformRating::Imdb(_) | PlatformRating::Letterboxd(_) => {}
        }
        counts
    }
}

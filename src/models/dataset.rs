//! Per-title rating dataset.
//!
//! A `RatingDataset` is an immutable snapshot of whatever platform records have
//! arrived so far. Updates never mutate a snapshot in place: `with_rating` and
//! `merge` return a fresh one.

use super::platform::Platform;
use super::rating::{
    lenient_record, DoubanRating, ImdbRating, LetterboxdRating, MetacriticRating, PlatformRating,
    RottenTomatoesRating, TmdbRating, TraktRating,
};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// JSON shape of a dataset: one optional record per platform key.
///
/// Unknown keys are ignored. A record that does not fit its platform's shape is
/// dropped on its own, so the other platforms still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetPayload {
    #[serde(
        default,
        deserialize_with = "lenient_record",
        skip_serializing_if = "Option::is_none"
    )]
    douban: Option<DoubanRating>,
    #[serde(
        default,
        deserialize_with = "lenient_record",
        skip_serializing_if = "Option::is_none"
    )]
    imdb: Option<ImdbRating>,
    #[serde(
        default,
        deserialize_with = "lenient_record",
        skip_serializing_if = "Option::is_none"
    )]
    letterboxd: Option<LetterboxdRating>,
    #[serde(
        default,
        deserialize_with = "lenient_record",
        skip_serializing_if = "Option::is_none"
    )]
    rottentomatoes: Option<RottenTomatoesRating>,
    #[serde(
        default,
        deserialize_with = "lenient_record",
        skip_serializing_if = "Option::is_none"
    )]
    metacritic: Option<MetacriticRating>,
    #[serde(
        default,
        deserialize_with = "lenient_record",
        skip_serializing_if = "Option::is_none"
    )]
    tmdb: Option<TmdbRating>,
    #[serde(
        default,
        deserialize_with = "lenient_record",
        skip_serializing_if = "Option::is_none"
    )]
    trakt: Option<TraktRating>,
}

impl From<DatasetPayload> for RatingDataset {
    fn from(payload: DatasetPayload) -> Self {
        let records = [
            payload.douban.map(PlatformRating::Douban),
            payload.imdb.map(PlatformRating::Imdb),
            payload.letterboxd.map(PlatformRating::Letterboxd),
            payload.rottentomatoes.map(PlatformRating::RottenTomatoes),
            payload.metacritic.map(PlatformRating::Metacritic),
            payload.tmdb.map(PlatformRating::Tmdb),
            payload.trakt.map(PlatformRating::Trakt),
        ];
        records.into_iter().flatten().collect()
    }
}

impl From<RatingDataset> for DatasetPayload {
    fn from(dataset: RatingDataset) -> Self {
        let mut payload = DatasetPayload::default();
        for rating in dataset.ratings.into_values() {
            match rating {
                PlatformRating::Douban(r) => payload.douban = Some(r),
                PlatformRating::Imdb(r) => payload.imdb = Some(r),
                PlatformRating::Letterboxd(r) => payload.letterboxd = Some(r),
                PlatformRating::RottenTomatoes(r) => payload.rottentomatoes = Some(r),
                PlatformRating::Metacritic(r) => payload.metacritic = Some(r),
                PlatformRating::Tmdb(r) => payload.tmdb = Some(r),
                PlatformRating::Trakt(r) => payload.trakt = Some(r),
            }
        }
        payload
    }
}

/// All rating records known for one title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "DatasetPayload", into = "DatasetPayload")]
pub struct RatingDataset {
    ratings: BTreeMap<Platform, PlatformRating>,
}

impl RatingDataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dataset from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(crate::Error::PathNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&content)?;
        tracing::debug!(
            "Loaded dataset from {} with {} platform(s)",
            path.display(),
            dataset.len()
        );
        Ok(dataset)
    }

    /// Return a new snapshot with `rating` replacing any record from the same platform.
    pub fn with_rating(&self, rating: PlatformRating) -> Self {
        let mut ratings = self.ratings.clone();
        ratings.insert(rating.platform(), rating);
        Self { ratings }
    }

    /// Return a new snapshot combining both; records in `other` win.
    pub fn merge(&self, other: &RatingDataset) -> Self {
        let mut ratings = self.ratings.clone();
        for (platform, rating) in &other.ratings {
            ratings.insert(*platform, rating.clone());
        }
        Self { ratings }
    }

    /// Record for one platform, if present.
    pub fn get(&self, platform: Platform) -> Option<&PlatformRating> {
        self.ratings.get(&platform)
    }

    /// Records in canonical platform order.
    pub fn iter(&self) -> impl Iterator<Item = &PlatformRating> {
        self.ratings.values()
    }

    /// Platforms that have a record, valid or not.
    pub fn platforms(&self) -> Vec<Platform> {
        self.ratings.keys().copied().collect()
    }

    /// Sorted union of season numbers across all platforms.
    pub fn season_numbers(&self) -> Vec<u16> {
        self.ratings
            .values()
            .flat_map(|r| r.season_numbers())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of platforms with a record.
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Whether no platform has reported anything yet.
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

impl FromIterator<PlatformRating> for RatingDataset {
    fn from_iter<I: IntoIterator<Item = PlatformRating>>(iter: I) -> Self {
        Self {
            ratings: iter.into_iter().map(|r| (r.platform(), r)).collect(),
        }
    }
}

//! Configuration model.

use super::platform::Platform;
use crate::core::votes::{DEFAULT_FALLBACK_VOTE_COUNT, DEFAULT_FULL_CONFIDENCE_VOTES};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV_VAR: &str = "RATING_AGGREGATOR_CONFIG";

/// Per-platform trust coefficients.
///
/// Platforms missing from the map use the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct TrustWeights(BTreeMap<Platform, f64>);

impl TryFrom<BTreeMap<String, f64>> for TrustWeights {
    type Error = crate::Error;

    fn try_from(raw: BTreeMap<String, f64>) -> Result<Self> {
        let mut weights = BTreeMap::new();
        for (key, weight) in raw {
            let platform = key.parse::<Platform>()?;
            if weights.insert(platform, weight).is_some() {
                return Err(crate::Error::InvalidConfig(format!(
                    "trust weight for {} is set more than once (last key: {})",
                    platform, key
                )));
            }
        }
        Ok(TrustWeights(weights))
    }
}

impl From<TrustWeights> for BTreeMap<String, f64> {
    fn from(weights: TrustWeights) -> Self {
        weights
            .0
            .into_iter()
            .map(|(platform, weight)| (platform.key().to_string(), weight))
            .collect()
    }
}

impl TrustWeights {
    /// Built-in trust coefficient for a platform.
    pub fn default_for(platform: Platform) -> f64 {
        match platform {
            Platform::Douban => 1.8,
            Platform::Imdb => 1.7,
            Platform::Letterboxd => 1.3,
            Platform::RottenTomatoes => 1.4,
            Platform::Metacritic => 1.5,
            Platform::Tmdb => 0.7,
            Platform::Trakt => 0.6,
        }
    }

    /// Trust coefficient for a platform, falling back to the built-in table.
    pub fn get(&self, platform: Platform) -> f64 {
        self.0
            .get(&platform)
            .copied()
            .unwrap_or_else(|| Self::default_for(platform))
    }

    /// Override the coefficient for one platform.
    pub fn with(mut self, platform: Platform, weight: f64) -> Self {
        self.0.insert(platform, weight);
        self
    }

    /// Effective table for every platform.
    pub fn effective(&self) -> Vec<(Platform, f64)> {
        Platform::ALL.iter().map(|p| (*p, self.get(*p))).collect()
    }
}

/// Aggregation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Trust coefficient overrides.
    pub trust: TrustWeights,
    /// Vote count at which the confidence multiplier reaches 1.0.
    pub full_confidence_votes: f64,
    /// Vote count assumed when no season count is known anywhere.
    pub fallback_vote_count: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trust: TrustWeights::default(),
            full_confidence_votes: DEFAULT_FULL_CONFIDENCE_VOTES,
            fallback_vote_count: DEFAULT_FALLBACK_VOTE_COUNT,
        }
    }
}

impl Config {
    /// Check that all values are usable by the aggregator.
    pub fn validate(&self) -> Result<()> {
        for (platform, weight) in self.trust.effective() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(crate::Error::InvalidConfig(format!(
                    "trust weight for {} must be a non-negative number, got {}",
                    platform, weight
                )));
            }
        }
        if !self.full_confidence_votes.is_finite() || self.full_confidence_votes <= 1.0 {
            return Err(crate::Error::InvalidConfig(format!(
                "full_confidence_votes must be greater than 1, got {}",
                self.full_confidence_votes
            )));
        }
        if !self.fallback_vote_count.is_finite() || self.fallback_vote_count <= 0.0 {
            return Err(crate::Error::InvalidConfig(format!(
                "fallback_vote_count must be positive, got {}",
                self.fallback_vote_count
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rating_aggregator")
}

/// Default config file location.
pub fn default_config_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Load configuration from an explicit file.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(crate::Error::ConfigNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Config::from_toml_str(&content)
}

/// Load configuration from the default location, falling back to defaults.
pub fn load_config() -> Config {
    let config_path = default_config_path();

    if config_path.exists() {
        match load_config_from(&config_path) {
            Ok(config) => return config,
            Err(e) => {
                tracing::warn!(
                    "Ignoring invalid config {}: {}",
                    config_path.display(),
                    e
                );
            }
        }
    }

    Config::default()
}

/// Resolve configuration: explicit path, then env var, then default location.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return load_config_from(Path::new(&path));
        }
    }
    Ok(load_config())
}

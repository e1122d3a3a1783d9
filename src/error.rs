//! Error types for the rating aggregator.
//!
//! The scoring engine itself never fails; these errors only come from loading
//! datasets and configuration and from parsing user-supplied names.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the rating aggregator.
#[derive(Error, Debug)]
pub enum Error {
    // Input errors
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Unknown score kind: {0}")]
    UnknownScoreKind(String),

    #[error("Season {0} not found in dataset")]
    SeasonNotFound(u16),

    // Config errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // TOML errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

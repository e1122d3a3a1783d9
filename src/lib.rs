//! Rating Aggregator Library
//!
//! Normalizes heterogeneous movie/TV ratings from Douban, IMDb, Rotten Tomatoes,
//! Metacritic, Letterboxd, TMDB and Trakt onto a common 0-10 scale and combines
//! them into one overall score, per title or per season.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;

pub use error::{Error, Result};

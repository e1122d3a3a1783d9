//! Data models.

pub mod config;
pub mod dataset;
pub mod platform;
pub mod rating;
pub mod result;

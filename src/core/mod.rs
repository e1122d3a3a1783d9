//! Core rating engine.

pub mod adjust;
pub mod aggregator;
pub mod normalizer;
pub mod votes;

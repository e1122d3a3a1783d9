//! CLI command implementations.

pub mod normalize;
pub mod output;
pub mod overall;
pub mod season;

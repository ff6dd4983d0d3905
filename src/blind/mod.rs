//! Blind (pure random) search.
//!
//! Samples the domain uniformly and independently every iteration, keeping
//! the best point seen. The baseline every other strategy should beat.

mod config;
mod runner;

pub use config::BlindConfig;
pub use runner::{BlindResult, BlindRunner};

//! Self-Organizing Migrating Algorithm, All-to-One strategy.
//!
//! Every migration, each non-leader individual walks in discrete steps along
//! the line toward the current leader, with a random binary perturbation
//! mask deciding which coordinates move. It then jumps to the best point it
//! visited along the whole path. The leader stays put for that migration.
//!
//! # References
//!
//! - Zelinka (2004), "SOMA: Self-Organizing Migrating Algorithm"

mod config;
mod runner;

pub use config::{SomaConfig, MAX_STEPS_PER_PATH};
pub use runner::{SomaResult, SomaRunner};

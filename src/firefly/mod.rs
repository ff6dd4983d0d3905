//! Firefly Algorithm.
//!
//! Each firefly scans the previous generation in index order and moves
//! toward the first strictly brighter (lower-fitness) one it meets, with
//! attractiveness `beta0 / (1 + r)`, plus a Gaussian random step. A firefly
//! with no brighter neighbor only takes the random step.
//!
//! The "first brighter wins" rule is order dependent and differs from the
//! textbook all-pairs attraction; scan order is population index order.
//!
//! # References
//!
//! - Yang (2009), "Firefly Algorithms for Multimodal Optimization"

mod config;
mod runner;

pub use config::FireflyConfig;
pub use runner::{FireflyResult, FireflyRunner};

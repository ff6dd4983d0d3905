//! Differential Evolution (DE/rand/1/bin).
//!
//! Each target vector competes with a trial built from the scaled
//! difference of two random donors added to a third, followed by binomial
//! crossover. The trial replaces the target when it is at least as good.
//!
//! # References
//!
//! - Storn & Price (1997), "Differential Evolution – A Simple and Efficient
//!   Heuristic for Global Optimization over Continuous Spaces"

mod config;
mod runner;

pub use config::DeConfig;
pub use runner::{DeResult, DeRunner};

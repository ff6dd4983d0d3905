//! Genetic Algorithm for the travelling-salesman problem.
//!
//! Each tour is a permutation of the city indices. Every generation, each
//! individual mates with one other random individual; the ordered-crossover
//! offspring, possibly swap-mutated, replaces its first parent only if it is
//! strictly shorter. The population's best tour therefore never gets worse.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, generations, mutation rate
//! - [`GaRunner`]: executes the generational loop
//! - [`GaResult`]: best tour and per-generation history
//!
//! # Submodules
//!
//! - [`operators`]: ordered crossover and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};

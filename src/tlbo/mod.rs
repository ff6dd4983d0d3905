//! Teaching-Learning-Based Optimization (TLBO).
//!
//! Each generation runs two phases over the whole class. In the teacher
//! phase every learner moves toward the best individual and away from the
//! class mean scaled by a random teaching factor. In the learner phase
//! every learner interacts with one random classmate. Both phases accept a
//! move only on strict improvement.
//!
//! # References
//!
//! - Rao, Savsani & Vakharia (2011), "Teaching–learning-based optimization:
//!   A novel method for constrained mechanical design optimization problems"

mod config;
mod runner;

pub use config::TlboConfig;
pub use runner::{TlboResult, TlboRunner};

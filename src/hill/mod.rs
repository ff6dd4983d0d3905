//! Hill climbing with Gaussian neighborhoods.
//!
//! Each iteration samples `neighbors` points around the current one and
//! moves to the best of them only when it strictly improves. Converges
//! fast on unimodal landscapes and stalls in the first local optimum on
//! multimodal ones.

mod config;
mod runner;

pub use config::HillConfig;
pub use runner::{HillResult, HillRunner};

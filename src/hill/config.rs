//! Hill climbing configuration.

use crate::error::{check_nonzero, check_positive, Result};

/// Configuration for hill climbing.
///
/// ```
/// use metaheur_bench::hill::HillConfig;
///
/// let config = HillConfig::default()
///     .with_neighbors(16)
///     .with_step_size(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillConfig {
    /// Number of iterations after the initial sample.
    pub iterations: usize,

    /// Neighbors generated per iteration.
    pub neighbors: usize,

    /// Standard deviation of the Gaussian neighborhood.
    pub step_size: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for HillConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            neighbors: 8,
            step_size: 0.1,
            seed: None,
        }
    }
}

impl HillConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_neighbors(mut self, n: usize) -> Self {
        self.neighbors = n;
        self
    }

    pub fn with_step_size(mut self, sigma: f64) -> Self {
        self.step_size = sigma;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        check_nonzero("iterations", self.iterations)?;
        check_nonzero("neighbors", self.neighbors)?;
        check_positive("step_size", self.step_size)
    }
}

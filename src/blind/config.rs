//! Blind search configuration.

use crate::error::{check_nonzero, Result};

/// Configuration for blind search.
///
/// ```
/// use metaheur_bench::blind::BlindConfig;
///
/// let config = BlindConfig::default().with_iterations(1000).with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlindConfig {
    /// Number of samples drawn after the initial one.
    pub iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for BlindConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            seed: None,
        }
    }
}

impl BlindConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        check_nonzero("iterations", self.iterations)
    }
}

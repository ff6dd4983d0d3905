//! TLBO configuration.

use crate::error::{check_nonzero, check_population, Result};
use crate::objective::HistoryMode;

/// Configuration for TLBO. The algorithm has no tuning constants beyond
/// class size and generation count.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TlboConfig {
    /// Number of learners. At least 2 (learner phase needs a partner).
    pub population_size: usize,

    /// History entries to produce, counting the initial class.
    pub max_generations: usize,

    /// What each history snapshot records.
    pub history: HistoryMode,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for TlboConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            max_generations: 50,
            history: HistoryMode::Full,
            seed: None,
        }
    }
}

impl TlboConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_history(mut self, mode: HistoryMode) -> Self {
        self.history = mode;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        check_population(2, self.population_size)?;
        check_nonzero("max_generations", self.max_generations)
    }
}

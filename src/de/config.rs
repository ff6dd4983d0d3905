//! DE configuration.

use crate::error::{check_nonzero, check_population, check_positive, check_probability, Result};
use crate::objective::HistoryMode;

/// Minimum population: a target plus three distinct donors.
pub const MIN_POPULATION: usize = 4;

/// Configuration for Differential Evolution.
///
/// ```
/// use metaheur_bench::de::DeConfig;
///
/// let config = DeConfig::default()
///     .with_population_size(30)
///     .with_mutation_factor(0.5)
///     .with_crossover_rate(0.9)
///     .with_max_generations(100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeConfig {
    /// Number of individuals (NP). At least 4.
    pub population_size: usize,

    /// Differential weight F.
    pub mutation_factor: f64,

    /// Crossover probability CR in [0, 1].
    pub crossover_rate: f64,

    /// History entries to produce, counting the initial population.
    pub max_generations: usize,

    /// What each history snapshot records.
    pub history: HistoryMode,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for DeConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            mutation_factor: 0.8,
            crossover_rate: 0.9,
            max_generations: 200,
            history: HistoryMode::Full,
            seed: None,
        }
    }
}

impl DeConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_mutation_factor(mut self, f: f64) -> Self {
        self.mutation_factor = f;
        self
    }

    pub fn with_crossover_rate(mut self, cr: f64) -> Self {
        self.crossover_rate = cr;
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
        check_population(MIN_POPULATION, self.population_size)?;
        check_positive("mutation_factor", self.mutation_factor)?;
        check_probability("crossover_rate", self.crossover_rate)?;
        check_nonzero("max_generations", self.max_generations)
    }
}

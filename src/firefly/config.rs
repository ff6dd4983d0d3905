//! Firefly configuration.

use crate::error::{check_finite, check_nonzero, check_population, Error, Result};
use crate::objective::HistoryMode;

/// Configuration for the Firefly Algorithm.
///
/// ```
/// use metaheur_bench::firefly::FireflyConfig;
///
/// let config = FireflyConfig::default().with_alpha(0.2).with_beta0(1.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FireflyConfig {
    /// Number of fireflies.
    pub population_size: usize,

    /// Scale of the Gaussian random step.
    pub alpha: f64,

    /// Attractiveness at distance zero.
    pub beta0: f64,

    /// History entries to produce, counting the initial population.
    pub max_generations: usize,

    /// What each history snapshot records.
    pub history: HistoryMode,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for FireflyConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            alpha: 0.3,
            beta0: 1.0,
            max_generations: 50,
            history: HistoryMode::Full,
            seed: None,
        }
    }
}

impl FireflyConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta0(mut self, beta0: f64) -> Self {
        self.beta0 = beta0;
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
        check_population(1, self.population_size)?;
        check_finite("alpha", self.alpha)?;
        check_finite("beta0", self.beta0)?;
        if self.alpha < 0.0 {
            return Err(Error::invalid("alpha", "must be non-negative"));
        }
        check_nonzero("max_generations", self.max_generations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FireflyConfig::default();
        assert_eq!(config.population_size, 20);
        assert!((config.alpha - 0.3).abs() < 1e-15);
        assert!((config.beta0 - 1.0).abs() < 1e-15);
        assert_eq!(config.max_generations, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects() {
        assert!(FireflyConfig::default().with_alpha(-0.1).validate().is_err());
        assert!(FireflyConfig::default().with_beta0(f64::INFINITY).validate().is_err());
        assert!(FireflyConfig::default().with_population_size(0).validate().is_err());
    }
}

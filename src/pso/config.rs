//! PSO configuration.

use crate::error::{check_finite, check_nonzero, check_population, check_positive, Result};
use crate::objective::HistoryMode;

/// Configuration for Particle Swarm Optimization.
///
/// ```
/// use metaheur_bench::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_population_size(30)
///     .with_coefficients(2.0, 2.0)
///     .with_inertia(0.7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Number of particles.
    pub population_size: usize,

    /// Cognitive acceleration (pull toward the personal best).
    pub c1: f64,

    /// Social acceleration (pull toward the global best).
    pub c2: f64,

    /// Inertia weight applied to the previous velocity.
    pub inertia: f64,

    /// Velocity limit as a fraction of the domain span.
    pub velocity_limit: f64,

    /// History entries to produce, counting the initial swarm.
    pub max_generations: usize,

    /// What each history snapshot records.
    pub history: HistoryMode,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            population_size: 15,
            c1: 2.0,
            c2: 2.0,
            inertia: 0.7,
            velocity_limit: 0.2,
            max_generations: 50,
            history: HistoryMode::Full,
            seed: None,
        }
    }
}

impl PsoConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets both acceleration coefficients.
    pub fn with_coefficients(mut self, c1: f64, c2: f64) -> Self {
        self.c1 = c1;
        self.c2 = c2;
        self
    }

    pub fn with_inertia(mut self, w: f64) -> Self {
        self.inertia = w;
        self
    }

    pub fn with_velocity_limit(mut self, fraction: f64) -> Self {
        self.velocity_limit = fraction;
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
        check_finite("c1", self.c1)?;
        check_finite("c2", self.c2)?;
        check_finite("inertia", self.inertia)?;
        check_positive("velocity_limit", self.velocity_limit)?;
        check_nonzero("max_generations", self.max_generations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PsoConfig::default();
        assert_eq!(config.population_size, 15);
        assert!((config.c1 - 2.0).abs() < 1e-15);
        assert!((config.c2 - 2.0).abs() < 1e-15);
        assert!((config.inertia - 0.7).abs() < 1e-15);
        assert!((config.velocity_limit - 0.2).abs() < 1e-15);
        assert_eq!(config.max_generations, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects() {
        assert!(PsoConfig::default().with_population_size(0).validate().is_err());
        assert!(PsoConfig::default().with_inertia(f64::NAN).validate().is_err());
        assert!(PsoConfig::default().with_velocity_limit(0.0).validate().is_err());
    }
}

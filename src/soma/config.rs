//! SOMA configuration.

use crate::error::{
    check_nonzero, check_population, check_positive, check_probability, Error, Result,
};
use crate::objective::HistoryMode;

/// Upper limit on evaluated steps per migrant path.
pub const MAX_STEPS_PER_PATH: usize = 1_000_000;

/// Configuration for SOMA All-to-One.
///
/// ```
/// use metaheur_bench::soma::SomaConfig;
///
/// let config = SomaConfig::default()
///     .with_path_length(3.0)
///     .with_step(0.11)
///     .with_prt(0.4);
/// assert_eq!(config.steps_per_path(), 28);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SomaConfig {
    /// Number of individuals. At least 2 (a leader and a migrant).
    pub population_size: usize,

    /// Perturbation probability: chance that a coordinate moves.
    pub prt: f64,

    /// How far past the leader a migrant may travel, in leader distances.
    pub path_length: f64,

    /// Step along the path, in leader distances.
    pub step: f64,

    /// History entries to produce, counting the initial population.
    pub migrations: usize,

    /// What each history snapshot records.
    pub history: HistoryMode,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SomaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            prt: 0.4,
            path_length: 3.0,
            step: 0.11,
            migrations: 100,
            history: HistoryMode::Full,
            seed: None,
        }
    }
}

impl SomaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_prt(mut self, prt: f64) -> Self {
        self.prt = prt;
        self
    }

    pub fn with_path_length(mut self, length: f64) -> Self {
        self.path_length = length;
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_migrations(mut self, n: usize) -> Self {
        self.migrations = n;
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

    /// Number of evaluated steps per path: `t = step, 2·step, …`.
    ///
    /// `ceil(path_length / step)`, with a small tolerance so that exact
    /// multiples such as `3.0 / 0.1` do not gain a step from rounding.
    pub fn steps_per_path(&self) -> usize {
        ((self.path_length / self.step) - 1e-9).ceil().max(1.0) as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        check_population(2, self.population_size)?;
        check_probability("prt", self.prt)?;
        check_positive("path_length", self.path_length)?;
        check_positive("step", self.step)?;
        let ratio = self.path_length / self.step;
        if !ratio.is_finite() || ratio > MAX_STEPS_PER_PATH as f64 {
            return Err(Error::invalid(
                "step",
                format!(
                    "path_length / step must be at most {MAX_STEPS_PER_PATH}, got {ratio}"
                ),
            ));
        }
        check_nonzero("migrations", self.migrations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SomaConfig::default();
        assert_eq!(config.population_size, 20);
        assert!((config.prt - 0.4).abs() < 1e-15);
        assert!((config.path_length - 3.0).abs() < 1e-15);
        assert!((config.step - 0.11).abs() < 1e-15);
        assert_eq!(config.migrations, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_steps_per_path() {
        assert_eq!(SomaConfig::default().steps_per_path(), 28);
        let exact = SomaConfig::default().with_path_length(3.0).with_step(0.1);
        assert_eq!(exact.steps_per_path(), 30);
        let half = SomaConfig::default().with_path_length(3.0).with_step(0.5);
        assert_eq!(half.steps_per_path(), 6);
        let long_step = SomaConfig::default().with_path_length(1.0).with_step(5.0);
        assert_eq!(long_step.steps_per_path(), 1);
    }

    #[test]
    fn test_validate_rejects() {
        assert!(SomaConfig::default().with_prt(1.5).validate().is_err());
        assert!(SomaConfig::default().with_step(0.0).validate().is_err());
        assert!(SomaConfig::default().with_population_size(1).validate().is_err());
        assert!(SomaConfig::default().with_migrations(0).validate().is_err());
    }

    #[test]
    fn test_validate_caps_steps_per_path() {
        let tiny = SomaConfig::default().with_step(1e-30);
        assert!(matches!(
            tiny.validate(),
            Err(Error::InvalidParameter { name: "step", .. })
        ));

        let fine = SomaConfig::default().with_path_length(1.0).with_step(1e-5);
        assert!(fine.validate().is_ok());
        assert!(fine.steps_per_path() <= MAX_STEPS_PER_PATH);

        let over_cap = SomaConfig::default()
            .with_path_length(2.0)
            .with_step(1.0 / MAX_STEPS_PER_PATH as f64);
        assert!(over_cap.validate().is_err());
    }
}

//! SA configuration and cooling schedules.

use crate::error::{check_nonzero, check_positive, Error, Result};

/// Cooling schedule for temperature reduction, applied once per iteration.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - Linear: fixed-duration cooling
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    ///
    /// Most widely used. Typical `alpha`: 0.95–0.99.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Linear cooling: `T_k = T_0 - k * (T_0 - T_min) / iterations`.
    ///
    /// Reaches the floor exactly when the iteration budget runs out.
    Linear,

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// Cools fast at high T, slow at low T.
    LundyMees {
        /// Cooling parameter. Typically `(T_0 - T_min) / (iterations * T_0 * T_min)`.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.95 }
    }
}

/// Configuration for Simulated Annealing.
///
/// # Examples
///
/// ```
/// use metaheur_bench::sa::{SaConfig, CoolingSchedule};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.001)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.98 })
///     .with_iterations(1000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Temperature floor. The run stops once `T <= min_temperature`.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Maximum number of iterations (hard budget).
    pub iterations: usize,

    /// Standard deviation of the Gaussian neighbor step.
    pub step_size: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 0.5,
            cooling: CoolingSchedule::default(),
            iterations: 500,
            step_size: 1.0,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
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
        check_positive("initial_temperature", self.initial_temperature)?;
        check_positive("min_temperature", self.min_temperature)?;
        if self.min_temperature >= self.initial_temperature {
            return Err(Error::invalid(
                "min_temperature",
                "must be less than initial_temperature",
            ));
        }
        check_nonzero("iterations", self.iterations)?;
        check_positive("step_size", self.step_size)?;
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(Error::invalid(
                        "alpha",
                        format!("geometric alpha must be in (0, 1), got {alpha}"),
                    ));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                check_positive("beta", beta)?;
            }
            CoolingSchedule::Linear => {}
        }
        Ok(())
    }
}

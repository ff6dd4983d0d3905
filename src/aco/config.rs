//! ACO configuration.

use crate::error::{check_finite, check_nonzero, check_positive, check_probability, Result};

/// Configuration for Ant System.
///
/// ```
/// use metaheur_bench::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ants(30)
///     .with_iterations(100)
///     .with_alpha(1.0)
///     .with_beta(3.0)
///     .with_rho(0.3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Ants per iteration. Ant `k` starts at city `k mod n`.
    pub ants: usize,

    /// Number of construction iterations.
    pub iterations: usize,

    /// Pheromone exponent α.
    pub alpha: f64,

    /// Visibility exponent β.
    pub beta: f64,

    /// Evaporation rate ρ in [0, 1].
    pub rho: f64,

    /// Deposit constant Q.
    pub q: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ants: 20,
            iterations: 200,
            alpha: 1.0,
            beta: 2.0,
            rho: 0.5,
            q: 1.0,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_ants(mut self, n: usize) -> Self {
        self.ants = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        check_nonzero("ants", self.ants)?;
        check_nonzero("iterations", self.iterations)?;
        check_finite("alpha", self.alpha)?;
        check_finite("beta", self.beta)?;
        check_probability("rho", self.rho)?;
        check_positive("q", self.q)
    }
}

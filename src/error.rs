//! Error type shared by every runner.
//!
//! All failures are configuration or input problems detected before the
//! first iteration. Nothing inside a search loop can fail.

use thiserror::Error;

/// Errors surfaced by configuration validation and input checks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A hyperparameter is non-finite or outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending field.
        name: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// The population cannot support the algorithm's operators.
    ///
    /// Differential evolution needs a target plus three distinct donors;
    /// partner-based operators need at least two individuals.
    #[error("population of {actual} is too small: at least {required} individuals are required")]
    PopulationTooSmall {
        /// Minimum population size for the algorithm.
        required: usize,
        /// Configured population size.
        actual: usize,
    },

    /// The objective reports zero dimensions.
    #[error("objective dimension must be at least 1")]
    ZeroDimension,

    /// The objective bounds are non-finite or empty.
    #[error("invalid bounds [{lower}, {upper}]: both must be finite and lower < upper")]
    InvalidBounds {
        /// Reported lower bound.
        lower: f64,
        /// Reported upper bound.
        upper: f64,
    },

    /// A TSP instance has too few cities for the operators.
    #[error("at least {required} cities are required, got {actual}")]
    TooFewCities {
        /// Minimum city count.
        required: usize,
        /// Supplied city count.
        actual: usize,
    },

    /// A city coordinate is NaN or infinite.
    #[error("city {index} has a non-finite coordinate")]
    NonFiniteCity {
        /// Index of the offending city.
        index: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Checks that a rate lies in `[0, 1]`.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::invalid(name, format!("must be in [0, 1], got {value}")));
    }
    Ok(())
}

/// Checks that a value is finite and strictly positive.
pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid(name, format!("must be positive and finite, got {value}")));
    }
    Ok(())
}

/// Checks that a value is finite.
pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid(name, format!("must be finite, got {value}")));
    }
    Ok(())
}

/// Checks that a population holds at least `required` individuals.
pub(crate) fn check_population(required: usize, actual: usize) -> Result<()> {
    if actual < required {
        return Err(Error::PopulationTooSmall { required, actual });
    }
    Ok(())
}

/// Checks that a count is non-zero.
pub(crate) fn check_nonzero(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(Error::invalid(name, "must be at least 1"));
    }
    Ok(())
}

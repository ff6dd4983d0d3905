//! Objective contract shared by every continuous strategy.
//!
//! A strategy sees an objective only through [`Objective`]: a dimension,
//! one scalar bound pair broadcast to every coordinate, and a pure
//! evaluation. [`Domain`] validates that descriptor once per run and owns the
//! sampling and clipping every strategy needs.
//!
//! # Key Types
//!
//! - [`Objective`]: the evaluation contract
//! - [`Domain`]: validated bounds with `sample` / `clip`
//! - [`Point`]: an evaluated position, the unit of every history
//! - [`FnObjective`]: closure adapter
//! - [`Function`]: the nine built-in benchmark functions

mod functions;
mod types;

pub use functions::{Benchmark, Function};
pub use types::{HistoryMode, Point, Snapshot};
pub(crate) use types::best_index;

use crate::error::{Error, Result};
use rand::Rng;

/// A scalar objective to minimize over a box domain.
///
/// Implementations must be deterministic and side-effect free. They only
/// need to be defined on `[lower_bound, upper_bound]^dimension`; strategies
/// clip every generated point before evaluating it.
pub trait Objective {
    /// Display name, used in logs and experiment summaries.
    fn name(&self) -> &str {
        "objective"
    }

    /// Number of decision variables.
    fn dimension(&self) -> usize;

    /// Lower bound applied to every coordinate.
    fn lower_bound(&self) -> f64;

    /// Upper bound applied to every coordinate.
    fn upper_bound(&self) -> f64;

    /// Evaluates a point of length [`dimension`](Objective::dimension).
    /// Lower is better.
    fn evaluate(&self, x: &[f64]) -> f64;
}

impl<O: Objective + ?Sized> Objective for &O {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn lower_bound(&self) -> f64 {
        (**self).lower_bound()
    }

    fn upper_bound(&self) -> f64 {
        (**self).upper_bound()
    }

    fn evaluate(&self, x: &[f64]) -> f64 {
        (**self).evaluate(x)
    }
}

/// Validated search box of an objective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Number of coordinates.
    pub dimension: usize,
    /// Lower bound of every coordinate.
    pub lower: f64,
    /// Upper bound of every coordinate.
    pub upper: f64,
}

impl Domain {
    /// Reads and validates the descriptor of `objective`.
    ///
    /// Fails if the dimension is zero or the bounds are non-finite or empty.
    pub fn of<O: Objective + ?Sized>(objective: &O) -> Result<Self> {
        Self::new(
            objective.dimension(),
            objective.lower_bound(),
            objective.upper_bound(),
        )
    }

    /// Builds a domain from raw values.
    pub fn new(dimension: usize, lower: f64, upper: f64) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::ZeroDimension);
        }
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(Error::InvalidBounds { lower, upper });
        }
        Ok(Self {
            dimension,
            lower,
            upper,
        })
    }

    /// Width of the box along one coordinate.
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    /// Draws a point uniformly from the box.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        (0..self.dimension)
            .map(|_| rng.random_range(self.lower..self.upper))
            .collect()
    }

    /// Clamps every coordinate into the box, in place.
    pub fn clip(&self, x: &mut [f64]) {
        for v in x.iter_mut() {
            *v = v.clamp(self.lower, self.upper);
        }
    }

    /// Returns true if every coordinate lies inside the box.
    pub fn contains(&self, x: &[f64]) -> bool {
        x.len() == self.dimension && x.iter().all(|v| (self.lower..=self.upper).contains(v))
    }

    /// Draws a uniform point and evaluates it.
    pub fn random_point<O, R>(&self, objective: &O, rng: &mut R) -> Point
    where
        O: Objective + ?Sized,
        R: Rng + ?Sized,
    {
        Point::evaluated(self.sample(rng), objective)
    }
}

/// An objective defined by a closure.
///
/// ```
/// use metaheur_bench::objective::{FnObjective, Objective};
///
/// let sphere = FnObjective::new("sphere", 3, -5.0, 5.0, |x: &[f64]| {
///     x.iter().map(|v| v * v).sum()
/// });
/// assert_eq!(sphere.evaluate(&[1.0, 2.0, 0.0]), 5.0);
/// ```
pub struct FnObjective<F> {
    name: String,
    dimension: usize,
    lower: f64,
    upper: f64,
    func: F,
}

impl<F> FnObjective<F>
where
    F: Fn(&[f64]) -> f64,
{
    pub fn new(name: impl Into<String>, dimension: usize, lower: f64, upper: f64, func: F) -> Self {
        Self {
            name: name.into(),
            dimension,
            lower,
            upper,
            func,
        }
    }
}

impl<F> Objective for FnObjective<F>
where
    F: Fn(&[f64]) -> f64,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn lower_bound(&self) -> f64 {
        self.lower
    }

    fn upper_bound(&self) -> f64 {
        self.upper
    }

    fn evaluate(&self, x: &[f64]) -> f64 {
        (self.func)(x)
    }
}

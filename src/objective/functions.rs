//! Built-in benchmark functions.
//!
//! Standard synthetic test functions for continuous minimization. Each
//! kind carries the default search box used by the benchmark driver; all
//! have a global minimum of 0 except Michalewicz, whose minimum depends on
//! the dimension.
//!
//! # References
//!
//! - Surjanovic & Bingham, *Virtual Library of Simulation Experiments:
//!   Test Functions and Datasets* (optimization test problems)
//! - Jamil & Yang (2013), "A Literature Survey of Benchmark Functions for
//!   Global Optimization Problems"

use super::Objective;
use std::f64::consts::{E, PI};

/// The benchmark function kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Benchmark {
    /// `sum x_i^2`. Unimodal, separable.
    Sphere,
    /// Ackley with `a = 20`, `b = 0.2`, `c = 2π`. Nearly flat outer region.
    Ackley,
    /// `10d + sum(x_i^2 - 10 cos(2π x_i))`. Regular lattice of local minima.
    Rastrigin,
    /// Banana valley, minimum at `(1, …, 1)`.
    Rosenbrock,
    /// `418.9829 d - sum x_i sin(sqrt|x_i|)`. Deceptive, minimum near the corner.
    Schwefel,
    /// `sum x_i^2 / 4000 - prod cos(x_i / sqrt(i)) + 1`.
    Griewank,
    /// Levy, minimum at `(1, …, 1)`.
    Levy,
    /// Michalewicz with steepness `m = 10`. `d!` local minima.
    Michalewicz,
    /// Zakharov, unimodal with a plate-shaped bowl.
    Zakharov,
}

impl Benchmark {
    /// All kinds, in the order the benchmark tables list them.
    pub const ALL: [Benchmark; 9] = [
        Benchmark::Sphere,
        Benchmark::Ackley,
        Benchmark::Schwefel,
        Benchmark::Rosenbrock,
        Benchmark::Rastrigin,
        Benchmark::Griewank,
        Benchmark::Levy,
        Benchmark::Michalewicz,
        Benchmark::Zakharov,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Benchmark::Sphere => "Sphere",
            Benchmark::Ackley => "Ackley",
            Benchmark::Rastrigin => "Rastrigin",
            Benchmark::Rosenbrock => "Rosenbrock",
            Benchmark::Schwefel => "Schwefel",
            Benchmark::Griewank => "Griewank",
            Benchmark::Levy => "Levy",
            Benchmark::Michalewicz => "Michalewicz",
            Benchmark::Zakharov => "Zakharov",
        }
    }

    /// Default `(lower, upper)` search bounds.
    pub fn default_bounds(self) -> (f64, f64) {
        match self {
            Benchmark::Sphere => (-5.0, 5.0),
            Benchmark::Ackley => (-32.768, 32.768),
            Benchmark::Rastrigin => (-5.12, 5.12),
            Benchmark::Rosenbrock => (-5.0, 10.0),
            Benchmark::Schwefel => (-500.0, 500.0),
            Benchmark::Griewank => (-600.0, 600.0),
            Benchmark::Levy => (-10.0, 10.0),
            Benchmark::Michalewicz => (0.0, PI),
            Benchmark::Zakharov => (-5.0, 10.0),
        }
    }

    /// Evaluates the function at `x`.
    pub fn evaluate(self, x: &[f64]) -> f64 {
        match self {
            Benchmark::Sphere => x.iter().map(|v| v * v).sum(),
            Benchmark::Ackley => ackley(x),
            Benchmark::Rastrigin => {
                10.0 * x.len() as f64
                    + x.iter()
                        .map(|v| v * v - 10.0 * (2.0 * PI * v).cos())
                        .sum::<f64>()
            }
            Benchmark::Rosenbrock => x
                .windows(2)
                .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (w[0] - 1.0).powi(2))
                .sum(),
            Benchmark::Schwefel => {
                418.9829 * x.len() as f64 - x.iter().map(|v| v * v.abs().sqrt().sin()).sum::<f64>()
            }
            Benchmark::Griewank => {
                let sum: f64 = x.iter().map(|v| v * v).sum::<f64>() / 4000.0;
                let prod: f64 = x
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (v / ((i + 1) as f64).sqrt()).cos())
                    .product();
                sum - prod + 1.0
            }
            Benchmark::Levy => levy(x),
            Benchmark::Michalewicz => -x
                .iter()
                .enumerate()
                .map(|(i, v)| v.sin() * ((i + 1) as f64 * v * v / PI).sin().powi(20))
                .sum::<f64>(),
            Benchmark::Zakharov => {
                let sum1: f64 = x.iter().map(|v| v * v).sum();
                let sum2: f64 = x
                    .iter()
                    .enumerate()
                    .map(|(i, v)| 0.5 * (i + 1) as f64 * v)
                    .sum();
                sum1 + sum2.powi(2) + sum2.powi(4)
            }
        }
    }
}

fn ackley(x: &[f64]) -> f64 {
    let (a, b, c) = (20.0, 0.2, 2.0 * PI);
    let d = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|v| v * v).sum();
    let sum_cos: f64 = x.iter().map(|v| (c * v).cos()).sum();
    -a * (-b * (sum_sq / d).sqrt()).exp() - (sum_cos / d).exp() + a + E
}

fn levy(x: &[f64]) -> f64 {
    let w: Vec<f64> = x.iter().map(|v| 1.0 + (v - 1.0) / 4.0).collect();
    let (first, last) = match (w.first(), w.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return 0.0,
    };
    let head = (PI * first).sin().powi(2);
    let tail = (last - 1.0).powi(2) * (1.0 + (2.0 * PI * last).sin().powi(2));
    let body: f64 = w[..w.len() - 1]
        .iter()
        .map(|wi| (wi - 1.0).powi(2) * (1.0 + 10.0 * (PI * wi + 1.0).sin().powi(2)))
        .sum();
    head + body + tail
}

/// A benchmark function instantiated at a dimension and search box.
///
/// ```
/// use metaheur_bench::objective::{Benchmark, Function, Objective};
///
/// let f = Function::new(Benchmark::Rastrigin, 10);
/// assert_eq!(f.upper_bound(), 5.12);
/// assert!(f.evaluate(&[0.0; 10]).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Function {
    pub kind: Benchmark,
    pub dimension: usize,
    pub lower: f64,
    pub upper: f64,
}

impl Function {
    /// Creates a function with its default bounds.
    pub fn new(kind: Benchmark, dimension: usize) -> Self {
        let (lower, upper) = kind.default_bounds();
        Self {
            kind,
            dimension,
            lower,
            upper,
        }
    }

    /// Overrides the search bounds.
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }
}

impl Objective for Function {
    fn name(&self) -> &str {
        self.kind.name()
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
        self.kind.evaluate(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_known_minima() {
        let d = 5;
        assert!(close(Benchmark::Sphere.evaluate(&vec![0.0; d]), 0.0, 1e-12));
        assert!(close(Benchmark::Ackley.evaluate(&vec![0.0; d]), 0.0, 1e-12));
        assert!(close(Benchmark::Rastrigin.evaluate(&vec![0.0; d]), 0.0, 1e-12));
        assert!(close(Benchmark::Rosenbrock.evaluate(&vec![1.0; d]), 0.0, 1e-12));
        assert!(close(Benchmark::Griewank.evaluate(&vec![0.0; d]), 0.0, 1e-12));
        assert!(close(Benchmark::Levy.evaluate(&vec![1.0; d]), 0.0, 1e-12));
        assert!(close(Benchmark::Zakharov.evaluate(&vec![0.0; d]), 0.0, 1e-12));
        assert!(close(
            Benchmark::Schwefel.evaluate(&vec![420.9687; d]),
            0.0,
            1e-3
        ));
    }

    #[test]
    fn test_michalewicz_2d_minimum() {
        // Known 2-D optimum: f(2.20, 1.57) ≈ -1.8013
        let f = Benchmark::Michalewicz.evaluate(&[2.20, 1.57]);
        assert!(close(f, -1.8013, 1e-3), "got {f}");
    }

    #[test]
    fn test_values_away_from_minimum() {
        assert!(close(Benchmark::Sphere.evaluate(&[1.0, 2.0]), 5.0, 1e-12));
        assert!(close(Benchmark::Rosenbrock.evaluate(&[0.0, 0.0]), 1.0, 1e-12));
        // 0.5*1*1 + 0.5*2*1 = 1.5 -> 2 + 1.5^2 + 1.5^4
        assert!(close(
            Benchmark::Zakharov.evaluate(&[1.0, 1.0]),
            2.0 + 2.25 + 5.0625,
            1e-12
        ));
    }

    #[test]
    fn test_function_defaults_and_override() {
        let f = Function::new(Benchmark::Michalewicz, 3);
        assert_eq!(f.lower_bound(), 0.0);
        assert!(close(f.upper_bound(), PI, 1e-15));
        assert_eq!(f.name(), "Michalewicz");

        let g = Function::new(Benchmark::Sphere, 2).with_bounds(-1.0, 1.0);
        assert_eq!((g.lower_bound(), g.upper_bound()), (-1.0, 1.0));
        assert_eq!(g.dimension(), 2);
    }

    #[test]
    fn test_all_kinds_listed_once() {
        let mut names: Vec<&str> = Benchmark::ALL.iter().map(|b| b.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 9);
    }
}

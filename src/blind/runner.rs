//! Blind search loop.

use super::config::BlindConfig;
use crate::error::Result;
use crate::objective::{Domain, Objective, Point};
use crate::random::rng_from_seed;
use rand::Rng;
use tracing::debug;

/// Result of a blind search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlindResult {
    /// Best position sampled.
    pub best: Vec<f64>,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Every sampled point, starting with the initial sample.
    pub history: Vec<Point>,

    /// Best fitness after each history entry.
    pub fitness_history: Vec<f64>,

    /// Number of objective evaluations.
    pub evaluations: usize,
}

/// Executes blind search.
pub struct BlindRunner;

impl BlindRunner {
    /// Runs blind search seeded from `config.seed`.
    pub fn run<O: Objective + ?Sized>(objective: &O, config: &BlindConfig) -> Result<BlindResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(objective, config, &mut rng)
    }

    /// Runs blind search drawing from the supplied generator.
    pub fn run_with_rng<O, R>(objective: &O, config: &BlindConfig, rng: &mut R) -> Result<BlindResult>
    where
        O: Objective + ?Sized,
        R: Rng + ?Sized,
    {
        config.validate()?;
        let domain = Domain::of(objective)?;

        let first = domain.random_point(objective, rng);
        let mut best = first.clone();
        let mut history = Vec::with_capacity(config.iterations + 1);
        let mut fitness_history = Vec::with_capacity(config.iterations + 1);
        history.push(first);
        fitness_history.push(best.fitness);

        for _ in 0..config.iterations {
            let sample = domain.random_point(objective, rng);
            if sample.improves_on(&best) {
                best = sample.clone();
            }
            history.push(sample);
            fitness_history.push(best.fitness);
        }

        debug!(
            objective = objective.name(),
            iterations = config.iterations,
            best_fitness = best.fitness,
            "blind search finished"
        );

        Ok(BlindResult {
            best: best.position,
            best_fitness: best.fitness,
            history,
            fitness_history,
            evaluations: config.iterations + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::objective::{Benchmark, Function};

    #[test]
    fn test_history_length_and_bounds() {
        let f = Function::new(Benchmark::Ackley, 3);
        let config = BlindConfig::default().with_iterations(200).with_seed(42);
        let result = BlindRunner::run(&f, &config).unwrap();

        assert_eq!(result.history.len(), 201);
        assert_eq!(result.evaluations, 201);
        let domain = Domain::of(&f).unwrap();
        for p in &result.history {
            assert!(domain.contains(&p.position));
        }
    }

    #[test]
    fn test_best_is_minimum_of_history() {
        let f = Function::new(Benchmark::Sphere, 2);
        let config = BlindConfig::default().with_iterations(300).with_seed(1);
        let result = BlindRunner::run(&f, &config).unwrap();

        let min = result
            .history
            .iter()
            .map(|p| p.fitness)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.best_fitness, min);
        assert_eq!(f.evaluate(&result.best), result.best_fitness);
        assert_eq!(result.fitness_history.last().copied(), Some(min));
        for w in result.fitness_history.windows(2) {
            assert!(w[1] <= w[0]);
        }
    }

    #[test]
    fn test_seed_reproducible() {
        let f = Function::new(Benchmark::Rastrigin, 4);
        let config = BlindConfig::default().with_iterations(50).with_seed(9);
        let a = BlindRunner::run(&f, &config).unwrap();
        let b = BlindRunner::run(&f, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_invalid_domain_is_reported() {
        let f = Function::new(Benchmark::Sphere, 0);
        let err = BlindRunner::run(&f, &BlindConfig::default()).unwrap_err();
        assert_eq!(err, Error::ZeroDimension);
    }
}

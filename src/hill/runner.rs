//! Hill climbing loop.

use super::config::HillConfig;
use crate::error::Result;
use crate::objective::{Domain, Objective, Point};
use crate::random::{rng_from_seed, standard_normal};
use rand::Rng;
use tracing::debug;

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillResult {
    /// Best position found.
    pub best: Vec<f64>,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Current point after each iteration, starting with the initial sample.
    pub history: Vec<Point>,

    /// Best fitness after each history entry.
    pub fitness_history: Vec<f64>,

    /// Number of iterations in which the current point moved.
    pub improving_moves: usize,

    /// Number of objective evaluations.
    pub evaluations: usize,
}

/// Executes hill climbing.
pub struct HillRunner;

impl HillRunner {
    /// Runs hill climbing seeded from `config.seed`.
    pub fn run<O: Objective + ?Sized>(objective: &O, config: &HillConfig) -> Result<HillResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(objective, config, &mut rng)
    }

    /// Runs hill climbing drawing from the supplied generator.
    pub fn run_with_rng<O, R>(objective: &O, config: &HillConfig, rng: &mut R) -> Result<HillResult>
    where
        O: Objective + ?Sized,
        R: Rng + ?Sized,
    {
        config.validate()?;
        let domain = Domain::of(objective)?;

        let mut current = domain.random_point(objective, rng);
        let mut best = current.clone();
        let mut evaluations = 1usize;
        let mut improving_moves = 0usize;

        let mut history = Vec::with_capacity(config.iterations + 1);
        let mut fitness_history = Vec::with_capacity(config.iterations + 1);
        history.push(current.clone());
        fitness_history.push(best.fitness);

        for _ in 0..config.iterations {
            let mut best_neighbor: Option<Point> = None;
            for _ in 0..config.neighbors {
                let candidate = neighbor(&current.position, config.step_size, &domain, objective, rng);
                evaluations += 1;
                // First minimum wins on ties.
                if best_neighbor
                    .as_ref()
                    .is_none_or(|b| candidate.improves_on(b))
                {
                    best_neighbor = Some(candidate);
                }
            }

            if let Some(candidate) = best_neighbor {
                if candidate.improves_on(&current) {
                    current = candidate;
                    improving_moves += 1;
                    if current.improves_on(&best) {
                        best = current.clone();
                    }
                }
            }

            history.push(current.clone());
            fitness_history.push(best.fitness);
        }

        debug!(
            objective = objective.name(),
            iterations = config.iterations,
            improving_moves,
            best_fitness = best.fitness,
            "hill climbing finished"
        );

        Ok(HillResult {
            best: best.position,
            best_fitness: best.fitness,
            history,
            fitness_history,
            improving_moves,
            evaluations,
        })
    }
}

/// Samples one Gaussian neighbor of `center`, clipped into the domain.
fn neighbor<O, R>(center: &[f64], sigma: f64, domain: &Domain, objective: &O, rng: &mut R) -> Point
where
    O: Objective + ?Sized,
    R: Rng + ?Sized,
{
    let mut x: Vec<f64> = center
        .iter()
        .map(|&c| c + sigma * standard_normal(rng))
        .collect();
    domain.clip(&mut x);
    Point::evaluated(x, objective)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{Benchmark, Function};

    #[test]
    fn test_sphere_2d_converges() {
        let f = Function::new(Benchmark::Sphere, 2);
        let config = HillConfig::default().with_iterations(500).with_seed(42);
        let result = HillRunner::run(&f, &config).unwrap();

        assert!(
            result.best_fitness < 1e-3,
            "expected fitness < 1e-3, got {}",
            result.best_fitness
        );
    }

    #[test]
    fn test_history_length_and_counts() {
        let f = Function::new(Benchmark::Rastrigin, 3);
        let config = HillConfig::default()
            .with_iterations(100)
            .with_neighbors(5)
            .with_seed(7);
        let result = HillRunner::run(&f, &config).unwrap();

        assert_eq!(result.history.len(), 101);
        assert_eq!(result.fitness_history.len(), 101);
        assert_eq!(result.evaluations, 1 + 100 * 5);
    }

    #[test]
    fn test_current_never_worsens() {
        let f = Function::new(Benchmark::Ackley, 2);
        let config = HillConfig::default().with_iterations(300).with_seed(3);
        let result = HillRunner::run(&f, &config).unwrap();

        for w in result.history.windows(2) {
            assert!(w[1].fitness <= w[0].fitness);
        }
        let domain = Domain::of(&f).unwrap();
        assert!(result.history.iter().all(|p| domain.contains(&p.position)));
    }

    #[test]
    fn test_narrow_bounds_are_respected() {
        // Large steps against a tiny box force clipping on every neighbor.
        let f = Function::new(Benchmark::Sphere, 2).with_bounds(2.0, 2.5);
        let config = HillConfig::default()
            .with_iterations(50)
            .with_step_size(10.0)
            .with_seed(11);
        let result = HillRunner::run(&f, &config).unwrap();

        assert!(result.best.iter().all(|&x| (2.0..=2.5).contains(&x)));
        assert!((result.best_fitness - 8.0).abs() < 1e-12, "corner (2, 2) expected");
    }
}

//! Firefly generation loop.

use super::config::FireflyConfig;
use crate::error::Result;
use crate::objective::{best_index, Domain, Objective, Point, Snapshot};
use crate::random::{rng_from_seed, standard_normal};
use rand::Rng;
use tracing::{debug, trace};

/// Result of a Firefly run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FireflyResult {
    /// Best position seen over the whole run.
    pub best: Vec<f64>,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// One snapshot per generation; entry 0 is the initial population.
    pub history: Vec<Snapshot>,

    /// Best-so-far fitness after each generation.
    pub fitness_history: Vec<f64>,

    /// Number of objective evaluations.
    pub evaluations: usize,
}

/// Executes the Firefly Algorithm.
pub struct FireflyRunner;

impl FireflyRunner {
    /// Runs the Firefly Algorithm seeded from `config.seed`.
    pub fn run<O: Objective + ?Sized>(objective: &O, config: &FireflyConfig) -> Result<FireflyResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(objective, config, &mut rng)
    }

    /// Runs the Firefly Algorithm drawing from the supplied generator.
    pub fn run_with_rng<O, R>(
        objective: &O,
        config: &FireflyConfig,
        rng: &mut R,
    ) -> Result<FireflyResult>
    where
        O: Objective + ?Sized,
        R: Rng + ?Sized,
    {
        config.validate()?;
        let domain = Domain::of(objective)?;
        let n = config.population_size;

        let mut population: Vec<Point> = (0..n)
            .map(|_| domain.random_point(objective, rng))
            .collect();
        let mut evaluations = n;
        let mut best = population[best_index(&population)].clone();

        let mut history = Vec::with_capacity(config.max_generations);
        let mut fitness_history = Vec::with_capacity(config.max_generations);
        history.push(config.history.snapshot(&population));
        fitness_history.push(best.fitness);

        for generation in 1..config.max_generations {
            let next: Vec<Point> = population
                .iter()
                .map(|firefly| {
                    let brighter = population.iter().find(|other| other.improves_on(firefly));
                    let mut position = firefly.position.clone();
                    if let Some(target) = brighter {
                        let beta = config.beta0 / (1.0 + distance(&firefly.position, &target.position));
                        for (x, t) in position.iter_mut().zip(&target.position) {
                            *x += beta * (t - *x);
                        }
                    }
                    for x in position.iter_mut() {
                        *x += config.alpha * standard_normal(rng);
                    }
                    domain.clip(&mut position);
                    Point::evaluated(position, objective)
                })
                .collect();
            evaluations += n;
            population = next;

            let generation_best = &population[best_index(&population)];
            if generation_best.improves_on(&best) {
                best = generation_best.clone();
            }

            history.push(config.history.snapshot(&population));
            fitness_history.push(best.fitness);
            trace!(generation, best_fitness = best.fitness, "firefly generation");
        }

        debug!(
            objective = objective.name(),
            fireflies = n,
            generations = config.max_generations,
            best_fitness = best.fitness,
            "firefly algorithm finished"
        );

        Ok(FireflyResult {
            best: best.position,
            best_fitness: best.fitness,
            history,
            fitness_history,
            evaluations,
        })
    }
}

fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{Benchmark, FnObjective, Function};

    #[test]
    fn test_sphere_improves() {
        let f = Function::new(Benchmark::Sphere, 2);
        let config = FireflyConfig::default()
            .with_alpha(0.05)
            .with_max_generations(100)
            .with_seed(42);
        let result = FireflyRunner::run(&f, &config).unwrap();

        assert!(
            result.best_fitness < 0.05,
            "expected fitness < 0.05, got {}",
            result.best_fitness
        );
    }

    #[test]
    fn test_history_shape_and_bounds() {
        let f = Function::new(Benchmark::Levy, 3);
        let config = FireflyConfig::default().with_max_generations(20).with_seed(4);
        let result = FireflyRunner::run(&f, &config).unwrap();

        assert_eq!(result.history.len(), 20);
        assert!(result.history.iter().all(|s| s.len() == 20));
        assert_eq!(result.evaluations, 20 * 20);

        let domain = Domain::of(&f).unwrap();
        assert!(result
            .history
            .iter()
            .flatten()
            .all(|p| domain.contains(&p.position)));
        for w in result.fitness_history.windows(2) {
            assert!(w[1] <= w[0]);
        }
    }

    #[test]
    fn test_without_noise_moves_toward_first_brighter() {
        // With alpha = 0 and beta0 = 1, a firefly at distance r from the
        // first brighter one moves by (x_j - x_i) / (1 + r).
        let f = FnObjective::new("abs", 1, -10.0, 10.0, |x: &[f64]| x[0].abs());
        let config = FireflyConfig::default()
            .with_population_size(4)
            .with_alpha(0.0)
            .with_max_generations(2)
            .with_seed(12);
        let result = FireflyRunner::run(&f, &config).unwrap();

        let before = &result.history[0];
        let after = &result.history[1];
        for (i, old) in before.iter().enumerate() {
            let expected = match before.iter().find(|o| o.fitness < old.fitness) {
                Some(t) => {
                    let r = (t.position[0] - old.position[0]).abs();
                    old.position[0] + (t.position[0] - old.position[0]) / (1.0 + r)
                }
                None => old.position[0],
            };
            assert!(
                (after[i].position[0] - expected).abs() < 1e-12,
                "firefly {i}: expected {expected}, got {}",
                after[i].position[0]
            );
        }
    }
}

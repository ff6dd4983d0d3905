//! DE generation loop.

use super::config::DeConfig;
use crate::error::Result;
use crate::objective::{best_index, Domain, Objective, Point, Snapshot};
use crate::random::{distinct_indices_excluding, rng_from_seed};
use rand::Rng;
use tracing::{debug, trace};

/// Result of a Differential Evolution run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeResult {
    /// Best position in the final population.
    pub best: Vec<f64>,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// One snapshot per generation; entry 0 is the initial population.
    pub history: Vec<Snapshot>,

    /// Best fitness of each generation.
    pub fitness_history: Vec<f64>,

    /// Number of trials that replaced their target.
    pub replacements: usize,

    /// Number of objective evaluations.
    pub evaluations: usize,
}

/// Executes Differential Evolution.
pub struct DeRunner;

impl DeRunner {
    /// Runs DE seeded from `config.seed`.
    pub fn run<O: Objective + ?Sized>(objective: &O, config: &DeConfig) -> Result<DeResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(objective, config, &mut rng)
    }

    /// Runs DE drawing from the supplied generator.
    pub fn run_with_rng<O, R>(objective: &O, config: &DeConfig, rng: &mut R) -> Result<DeResult>
    where
        O: Objective + ?Sized,
        R: Rng + ?Sized,
    {
        config.validate()?;
        let domain = Domain::of(objective)?;
        let np = config.population_size;

        let mut population: Vec<Point> = (0..np)
            .map(|_| domain.random_point(objective, rng))
            .collect();
        let mut evaluations = np;
        let mut replacements = 0usize;

        let mut history = Vec::with_capacity(config.max_generations);
        let mut fitness_history = Vec::with_capacity(config.max_generations);
        history.push(config.history.snapshot(&population));
        fitness_history.push(best_fitness(&population));

        for generation in 1..config.max_generations {
            // Trials read the previous generation only.
            let mut next = population.clone();

            for (i, target) in population.iter().enumerate() {
                let donors = distinct_indices_excluding(np, 3, i, rng);
                let (r1, r2, r3) = (donors[0], donors[1], donors[2]);

                let mut mutant: Vec<f64> = (0..domain.dimension)
                    .map(|j| {
                        population[r3].position[j]
                            + config.mutation_factor
                                * (population[r1].position[j] - population[r2].position[j])
                    })
                    .collect();
                domain.clip(&mut mutant);

                let j_rand = rng.random_range(0..domain.dimension);
                let trial: Vec<f64> = (0..domain.dimension)
                    .map(|j| {
                        if rng.random::<f64>() < config.crossover_rate || j == j_rand {
                            mutant[j]
                        } else {
                            target.position[j]
                        }
                    })
                    .collect();

                let trial = Point::evaluated(trial, objective);
                evaluations += 1;

                // Ties favor the trial.
                if trial.fitness <= target.fitness {
                    next[i] = trial;
                    replacements += 1;
                }
            }

            population = next;
            history.push(config.history.snapshot(&population));
            fitness_history.push(best_fitness(&population));

            trace!(
                generation,
                best_fitness = fitness_history[generation],
                "de generation"
            );
        }

        let best = population.swap_remove(best_index(&population));

        debug!(
            objective = objective.name(),
            population = np,
            generations = config.max_generations,
            best_fitness = best.fitness,
            "differential evolution finished"
        );

        Ok(DeResult {
            best: best.position,
            best_fitness: best.fitness,
            history,
            fitness_history,
            replacements,
            evaluations,
        })
    }
}

fn best_fitness(population: &[Point]) -> f64 {
    population[best_index(population)].fitness
}

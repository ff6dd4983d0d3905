//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the process:
//! initialization → mating → crossover → mutation → greedy replacement → repeat.

use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use crate::error::Result;
use crate::random::{other_index, rng_from_seed};
use crate::tsp::{Cities, TourSnapshot};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Shortest tour in the final population.
    pub best: Vec<usize>,

    /// Length of `best`.
    pub best_length: f64,

    /// Best tour of the initial population, then of each generation.
    pub history: Vec<TourSnapshot>,

    /// Best length of each history entry.
    pub fitness_history: Vec<f64>,
}

/// A tour with its cached length.
#[derive(Debug, Clone, PartialEq)]
struct Tour {
    route: Vec<usize>,
    length: f64,
}

impl Tour {
    fn new(route: Vec<usize>, cities: &Cities) -> Self {
        let length = cities.tour_length(&route);
        Self { route, length }
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use metaheur_bench::ga::{GaConfig, GaRunner};
/// use metaheur_bench::tsp::Cities;
///
/// let cities = Cities::new(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]).unwrap();
/// let config = GaConfig::default().with_max_generations(50).with_seed(42);
/// let result = GaRunner::run(&cities, &config).unwrap();
/// assert_eq!(result.history.len(), 51);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA seeded from `config.seed`.
    pub fn run(cities: &Cities, config: &GaConfig) -> Result<GaResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(cities, config, &mut rng)
    }

    /// Runs the GA drawing from the supplied generator.
    pub fn run_with_rng<R: Rng + ?Sized>(
        cities: &Cities,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate()?;
        let n = cities.len();
        let np = config.population_size;

        // 1. Initialize population with random permutations
        let mut population: Vec<Tour> = (0..np)
            .map(|_| {
                let mut route: Vec<usize> = (0..n).collect();
                route.shuffle(rng);
                Tour::new(route, cities)
            })
            .collect();

        let mut history = Vec::with_capacity(config.max_generations + 1);
        history.push(snapshot(&population));

        // 2. Generational loop
        for generation in 0..config.max_generations {
            population = next_generation(&population, cities, config, rng);
            history.push(snapshot(&population));
            trace!(
                generation,
                best_length = history[generation + 1].length,
                "ga generation"
            );
        }

        let fitness_history: Vec<f64> = history.iter().map(|s| s.length).collect();
        let last = snapshot(&population);

        debug!(
            cities = n,
            population = np,
            generations = config.max_generations,
            best_length = last.length,
            "genetic algorithm finished"
        );

        Ok(GaResult {
            best: last.route,
            best_length: last.length,
            history,
            fitness_history,
        })
    }
}

/// Builds the next generation from `population`.
///
/// Each individual `j` mates with one other random individual; the offspring
/// takes slot `j` only if it is strictly shorter than individual `j`.
fn next_generation<R: Rng + ?Sized>(
    population: &[Tour],
    cities: &Cities,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Tour> {
    let np = population.len();
    let mut next = population.to_vec();

    for (j, slot) in next.iter_mut().enumerate() {
        let parent_a = &population[j];
        let parent_b = &population[other_index(np, j, rng)];

        let mut child = order_crossover(&parent_a.route, &parent_b.route, rng);
        if rng.random::<f64>() < config.mutation_rate {
            swap_mutation(&mut child, rng);
        }

        let offspring = Tour::new(child, cities);
        if offspring.length < parent_a.length {
            *slot = offspring;
        }
    }

    next
}

/// Best tour of a population, the first one on ties.
fn snapshot(population: &[Tour]) -> TourSnapshot {
    let best = population
        .iter()
        .skip(1)
        .fold(&population[0], |best, t| if t.length < best.length { t } else { best });
    TourSnapshot {
        route: best.route.clone(),
        length: best.length,
    }
}

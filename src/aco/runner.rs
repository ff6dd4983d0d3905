//! Ant System construction and pheromone update loop.

use super::config::AcoConfig;
use crate::error::Result;
use crate::random::rng_from_seed;
use crate::tsp::{Cities, TourSnapshot};
use rand::Rng;
use tracing::{debug, trace};

/// Added to distances before inverting, so coincident cities stay finite.
const VISIBILITY_EPSILON: f64 = 1e-10;

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Shortest tour built by any ant.
    pub best: Vec<usize>,

    /// Length of `best`.
    pub best_length: f64,

    /// Best-so-far tour after each iteration.
    pub history: Vec<TourSnapshot>,

    /// Best-so-far length after each iteration.
    pub fitness_history: Vec<f64>,
}

/// Executes Ant System.
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO seeded from `config.seed`.
    pub fn run(cities: &Cities, config: &AcoConfig) -> Result<AcoResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(cities, config, &mut rng)
    }

    /// Runs ACO drawing from the supplied generator.
    pub fn run_with_rng<R: Rng + ?Sized>(
        cities: &Cities,
        config: &AcoConfig,
        rng: &mut R,
    ) -> Result<AcoResult> {
        config.validate()?;
        let n = cities.len();

        // Visibility η = 1/d, zero on the diagonal.
        let visibility: Vec<f64> = (0..n * n)
            .map(|k| {
                let (i, j) = (k / n, k % n);
                if i == j {
                    0.0
                } else {
                    1.0 / (cities.distance(i, j) + VISIBILITY_EPSILON)
                }
            })
            .collect();
        let mut pheromone = vec![1.0; n * n];

        let mut best: Option<TourSnapshot> = None;
        let mut history = Vec::with_capacity(config.iterations);
        let mut weights = Vec::with_capacity(n);

        for iteration in 0..config.iterations {
            let mut tours = Vec::with_capacity(config.ants);

            for ant in 0..config.ants {
                let route =
                    construct_tour(ant % n, n, &pheromone, &visibility, config, &mut weights, rng);
                let length = cities.tour_length(&route);
                if best.as_ref().is_none_or(|b| length < b.length) {
                    best = Some(TourSnapshot {
                        route: route.clone(),
                        length,
                    });
                }
                tours.push((route, length));
            }

            if let Some(b) = &best {
                history.push(b.clone());
                trace!(iteration, best_length = b.length, "aco iteration");
            }

            // Evaporation, then deposit on both directions of each edge.
            for tau in pheromone.iter_mut() {
                *tau *= 1.0 - config.rho;
            }
            for (route, length) in &tours {
                let delta = config.q / length;
                for i in 0..n {
                    let (a, b) = (route[i], route[(i + 1) % n]);
                    pheromone[a * n + b] += delta;
                    pheromone[b * n + a] += delta;
                }
            }
        }

        // At least one ant per iteration is validated, so a best exists.
        let best = best.unwrap_or_else(|| TourSnapshot {
            route: (0..n).collect(),
            length: cities.tour_length(&(0..n).collect::<Vec<_>>()),
        });
        let fitness_history = history.iter().map(|s| s.length).collect();

        debug!(
            cities = n,
            ants = config.ants,
            iterations = config.iterations,
            best_length = best.length,
            "ant colony finished"
        );

        Ok(AcoResult {
            best: best.route,
            best_length: best.length,
            history,
            fitness_history,
        })
    }
}

/// Builds one ant's tour starting from `start`.
///
/// `weights` is scratch space reused across ants.
fn construct_tour<R: Rng + ?Sized>(
    start: usize,
    n: usize,
    pheromone: &[f64],
    visibility: &[f64],
    config: &AcoConfig,
    weights: &mut Vec<f64>,
    rng: &mut R,
) -> Vec<usize> {
    let mut route = Vec::with_capacity(n);
    let mut unvisited: Vec<usize> = (0..n).filter(|&c| c != start).collect();
    route.push(start);
    let mut current = start;

    while !unvisited.is_empty() {
        weights.clear();
        weights.extend(unvisited.iter().map(|&next| {
            let k = current * n + next;
            pheromone[k].powf(config.alpha) * visibility[k].powf(config.beta)
        }));
        let pick = roulette(weights.as_slice(), rng);
        current = unvisited.remove(pick);
        route.push(current);
    }

    route
}

/// Draws an index with probability proportional to `weights`.
///
/// Falls back to a uniform draw when the total is zero or not finite.
fn roulette<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> usize {
    let total: f64 = weights.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return rng.random_range(0..weights.len());
    }

    let mut r = rng.random::<f64>() * total;
    for (i, &w) in weights.iter().enumerate() {
        if r < w {
            return i;
        }
        r -= w;
    }
    // Rounding left a remainder; take the last positive weight.
    weights.iter().rposition(|&w| w > 0.0).unwrap_or(weights.len() - 1)
}

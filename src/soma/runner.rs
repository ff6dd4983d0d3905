//! SOMA migration loop.

use super::config::SomaConfig;
use crate::error::Result;
use crate::objective::{best_index, Domain, Objective, Point, Snapshot};
use crate::random::rng_from_seed;
use rand::Rng;
use tracing::{debug, trace};

/// Result of a SOMA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SomaResult {
    /// Leader of the final population.
    pub best: Vec<f64>,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// One snapshot per migration; entry 0 is the initial population.
    pub history: Vec<Snapshot>,

    /// Leader fitness after each migration.
    pub fitness_history: Vec<f64>,

    /// Number of objective evaluations.
    pub evaluations: usize,
}

/// Executes SOMA All-to-One.
pub struct SomaRunner;

impl SomaRunner {
    /// Runs SOMA seeded from `config.seed`.
    pub fn run<O: Objective + ?Sized>(objective: &O, config: &SomaConfig) -> Result<SomaResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(objective, config, &mut rng)
    }

    /// Runs SOMA drawing from the supplied generator.
    pub fn run_with_rng<O, R>(objective: &O, config: &SomaConfig, rng: &mut R) -> Result<SomaResult>
    where
        O: Objective + ?Sized,
        R: Rng + ?Sized,
    {
        config.validate()?;
        let domain = Domain::of(objective)?;
        let steps = config.steps_per_path();

        let mut population: Vec<Point> = (0..config.population_size)
            .map(|_| domain.random_point(objective, rng))
            .collect();
        let mut evaluations = config.population_size;

        let mut history = Vec::with_capacity(config.migrations);
        let mut fitness_history = Vec::with_capacity(config.migrations);
        history.push(config.history.snapshot(&population));
        fitness_history.push(population[best_index(&population)].fitness);

        for migration in 1..config.migrations {
            let leader_idx = best_index(&population);
            let leader = population[leader_idx].position.clone();

            for (i, individual) in population.iter_mut().enumerate() {
                if i == leader_idx {
                    continue;
                }
                let (best_on_path, used) =
                    migrate(individual, &leader, steps, config, &domain, objective, rng);
                evaluations += used;
                if let Some(point) = best_on_path {
                    *individual = point;
                }
            }

            history.push(config.history.snapshot(&population));
            fitness_history.push(population[best_index(&population)].fitness);
            trace!(
                migration,
                best_fitness = fitness_history[migration],
                "soma migration"
            );
        }

        let best = population.swap_remove(best_index(&population));

        debug!(
            objective = objective.name(),
            population = config.population_size,
            migrations = config.migrations,
            best_fitness = best.fitness,
            "soma finished"
        );

        Ok(SomaResult {
            best: best.position,
            best_fitness: best.fitness,
            history,
            fitness_history,
            evaluations,
        })
    }
}

/// Walks one individual toward the leader.
///
/// Returns the best point strictly better than the start (if any) and the
/// number of evaluations spent. The walk stops early once a visited point
/// touches the upper bound in magnitude.
fn migrate<O, R>(
    individual: &Point,
    leader: &[f64],
    steps: usize,
    config: &SomaConfig,
    domain: &Domain,
    objective: &O,
    rng: &mut R,
) -> (Option<Point>, usize)
where
    O: Objective + ?Sized,
    R: Rng + ?Sized,
{
    let mask: Vec<bool> = (0..domain.dimension)
        .map(|_| rng.random::<f64>() < config.prt)
        .collect();

    let mut best: Option<Point> = None;
    let mut evaluations = 0usize;

    for k in 1..=steps {
        let t = k as f64 * config.step;
        let mut x: Vec<f64> = individual
            .position
            .iter()
            .zip(leader)
            .zip(&mask)
            .map(|((&xi, &li), &moves)| if moves { xi + (li - xi) * t } else { xi })
            .collect();
        domain.clip(&mut x);
        let at_edge = x.iter().any(|v| v.abs() >= domain.upper);

        let point = Point::evaluated(x, objective);
        evaluations += 1;
        let reference = best.as_ref().unwrap_or(individual);
        if point.improves_on(reference) {
            best = Some(point);
        }

        if at_edge {
            break;
        }
    }

    (best, evaluations)
}

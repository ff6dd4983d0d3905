//! PSO iteration loop.

use super::config::PsoConfig;
use crate::error::Result;
use crate::objective::{best_index, Domain, Objective, Point, Snapshot};
use crate::random::rng_from_seed;
use rand::Rng;
use tracing::{debug, trace};

/// A particle: its current point, velocity, and personal best.
#[derive(Debug, Clone)]
struct Particle {
    current: Point,
    velocity: Vec<f64>,
    personal_best: Point,
}

/// Result of a PSO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoResult {
    /// Global best position.
    pub best: Vec<f64>,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Current particle positions per iteration; entry 0 is the initial swarm.
    pub history: Vec<Snapshot>,

    /// Global best fitness after each iteration.
    pub fitness_history: Vec<f64>,

    /// Number of objective evaluations.
    pub evaluations: usize,
}

/// Executes Particle Swarm Optimization.
pub struct PsoRunner;

impl PsoRunner {
    /// Runs PSO seeded from `config.seed`.
    pub fn run<O: Objective + ?Sized>(objective: &O, config: &PsoConfig) -> Result<PsoResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(objective, config, &mut rng)
    }

    /// Runs PSO drawing from the supplied generator.
    pub fn run_with_rng<O, R>(objective: &O, config: &PsoConfig, rng: &mut R) -> Result<PsoResult>
    where
        O: Objective + ?Sized,
        R: Rng + ?Sized,
    {
        config.validate()?;
        let domain = Domain::of(objective)?;
        let span = domain.span();
        let v_max = config.velocity_limit * span;

        let mut swarm: Vec<Particle> = (0..config.population_size)
            .map(|_| {
                let current = domain.random_point(objective, rng);
                let velocity = (0..domain.dimension)
                    .map(|_| 0.1 * rng.random_range(-span..span))
                    .collect();
                Particle {
                    personal_best: current.clone(),
                    current,
                    velocity,
                }
            })
            .collect();
        let mut evaluations = config.population_size;

        let mut global_best = {
            let points: Vec<Point> = swarm.iter().map(|p| p.current.clone()).collect();
            points[best_index(&points)].clone()
        };

        let mut history = Vec::with_capacity(config.max_generations);
        let mut fitness_history = Vec::with_capacity(config.max_generations);
        history.push(snapshot(config, &swarm));
        fitness_history.push(global_best.fitness);

        for generation in 1..config.max_generations {
            for particle in swarm.iter_mut() {
                let mut position = Vec::with_capacity(domain.dimension);
                for j in 0..domain.dimension {
                    let x = particle.current.position[j];
                    let r1: f64 = rng.random();
                    let r2: f64 = rng.random();
                    let v = config.inertia * particle.velocity[j]
                        + config.c1 * r1 * (particle.personal_best.position[j] - x)
                        + config.c2 * r2 * (global_best.position[j] - x);
                    let v = v.clamp(-v_max, v_max);
                    particle.velocity[j] = v;
                    position.push(x + v);
                }
                domain.clip(&mut position);
                particle.current = Point::evaluated(position, objective);
                evaluations += 1;

                if particle.current.improves_on(&particle.personal_best) {
                    particle.personal_best = particle.current.clone();
                    if particle.current.improves_on(&global_best) {
                        global_best = particle.current.clone();
                    }
                }
            }

            history.push(snapshot(config, &swarm));
            fitness_history.push(global_best.fitness);
            trace!(generation, best_fitness = global_best.fitness, "pso iteration");
        }

        debug!(
            objective = objective.name(),
            particles = config.population_size,
            generations = config.max_generations,
            best_fitness = global_best.fitness,
            "particle swarm finished"
        );

        Ok(PsoResult {
            best: global_best.position,
            best_fitness: global_best.fitness,
            history,
            fitness_history,
            evaluations,
        })
    }
}

fn snapshot(config: &PsoConfig, swarm: &[Particle]) -> Snapshot {
    let points: Vec<Point> = swarm.iter().map(|p| p.current.clone()).collect();
    config.history.snapshot(&points)
}

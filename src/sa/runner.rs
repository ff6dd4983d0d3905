//! SA execution loop.

use super::config::{CoolingSchedule, SaConfig};
use crate::error::Result;
use crate::objective::{Domain, Objective, Point};
use crate::random::{rng_from_seed, standard_normal};
use rand::Rng;
use tracing::{debug, trace};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The best position found.
    pub best: Vec<f64>,

    /// Fitness of the best position.
    pub best_fitness: f64,

    /// The initial sample followed by every proposed neighbor.
    pub history: Vec<Point>,

    /// Best fitness after each history entry.
    pub fitness_history: Vec<f64>,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Number of objective evaluations.
    pub evaluations: usize,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA seeded from `config.seed`.
    pub fn run<O: Objective + ?Sized>(objective: &O, config: &SaConfig) -> Result<SaResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(objective, config, &mut rng)
    }

    /// Runs SA drawing from the supplied generator.
    pub fn run_with_rng<O, R>(objective: &O, config: &SaConfig, rng: &mut R) -> Result<SaResult>
    where
        O: Objective + ?Sized,
        R: Rng + ?Sized,
    {
        config.validate()?;
        let domain = Domain::of(objective)?;

        // Initialize
        let mut current = domain.random_point(objective, rng);
        let mut best = current.clone();

        let mut history = vec![current.clone()];
        let mut fitness_history = vec![best.fitness];

        let mut temperature = config.initial_temperature;
        let mut iteration = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while temperature > config.min_temperature && iteration < config.iterations {
            let mut x: Vec<f64> = current
                .position
                .iter()
                .map(|&c| c + config.step_size * standard_normal(rng))
                .collect();
            domain.clip(&mut x);
            let neighbor = Point::evaluated(x, objective);
            history.push(neighbor.clone());

            // Metropolis acceptance criterion
            let delta = neighbor.fitness - current.fitness;
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random::<f64>() < (-delta / temperature).exp()
            };

            if accept {
                accepted_moves += 1;
                if neighbor.improves_on(&best) {
                    best = neighbor.clone();
                }
                current = neighbor;
            }
            fitness_history.push(best.fitness);

            trace!(iteration, temperature, best_fitness = best.fitness, "sa step");

            // Cool down
            temperature = cool(temperature, config, iteration);
            iteration += 1;
        }

        debug!(
            objective = objective.name(),
            iterations = iteration,
            final_temperature = temperature,
            accepted_moves,
            best_fitness = best.fitness,
            "simulated annealing finished"
        );

        Ok(SaResult {
            best: best.position,
            best_fitness: best.fitness,
            history,
            fitness_history,
            iterations: iteration,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            evaluations: iteration + 1,
        })
    }
}

/// Apply the cooling schedule to compute the next temperature.
fn cool(temperature: f64, config: &SaConfig, step: usize) -> f64 {
    match config.cooling {
        CoolingSchedule::Geometric { alpha } => temperature * alpha,

        CoolingSchedule::Linear => {
            let t = config.initial_temperature
                - (step + 1) as f64 * (config.initial_temperature - config.min_temperature)
                    / config.iterations as f64;
            t.max(config.min_temperature)
        }

        CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{Benchmark, FnObjective, Function};

    #[test]
    fn test_sa_sphere_improves() {
        let f = Function::new(Benchmark::Sphere, 2);
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(1e-6)
            .with_cooling(CoolingSchedule::Geometric { alpha: 0.99 })
            .with_iterations(2000)
            .with_step_size(0.3)
            .with_seed(42);

        let result = SaRunner::run(&f, &config).unwrap();

        assert!(
            result.best_fitness < 0.1,
            "expected near-zero cost, got {}",
            result.best_fitness
        );
        assert!(result.improving_moves > 0);
        assert!(result.accepted_moves >= result.improving_moves);
    }

    #[test]
    fn test_sa_iteration_budget_binds() {
        let f = Function::new(Benchmark::Ackley, 3);
        let config = SaConfig::default()
            .with_initial_temperature(1e10)
            .with_min_temperature(1e-15)
            .with_iterations(100)
            .with_seed(42);

        let result = SaRunner::run(&f, &config).unwrap();

        assert_eq!(result.iterations, 100);
        assert_eq!(result.history.len(), 101);
        assert_eq!(result.fitness_history.len(), 101);
    }

    #[test]
    fn test_sa_temperature_floor_binds() {
        // 100 * 0.95^k <= 0.5 first holds at k = 104.
        let f = Function::new(Benchmark::Sphere, 2);
        let config = SaConfig::default().with_iterations(10_000).with_seed(1);

        let result = SaRunner::run(&f, &config).unwrap();

        assert_eq!(result.iterations, 104);
        assert!(result.final_temperature <= config.min_temperature);
        assert_eq!(result.history.len(), result.iterations + 1);
    }

    #[test]
    fn test_sa_best_history_non_increasing() {
        let f = Function::new(Benchmark::Rastrigin, 2);
        let config = SaConfig::default()
            .with_cooling(CoolingSchedule::Linear)
            .with_iterations(400)
            .with_seed(5);

        let result = SaRunner::run(&f, &config).unwrap();

        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        let domain = Domain::of(&f).unwrap();
        assert!(result.history.iter().all(|p| domain.contains(&p.position)));
    }

    #[test]
    fn test_sa_lundy_mees_runs() {
        let t0 = 100.0;
        let t_min = 0.001;
        let iterations = 5000;
        let beta = (t0 - t_min) / (iterations as f64 * t0 * t_min);

        let f = Function::new(Benchmark::Sphere, 1);
        let config = SaConfig::default()
            .with_initial_temperature(t0)
            .with_min_temperature(t_min)
            .with_cooling(CoolingSchedule::LundyMees { beta })
            .with_iterations(iterations)
            .with_seed(42);

        let result = SaRunner::run(&f, &config).unwrap();
        assert!(result.best_fitness < 0.1, "got {}", result.best_fitness);
    }

    #[test]
    fn test_sa_metropolis_accepts_uphill() {
        // At very high temperature, almost all moves should be accepted.
        let f = FnObjective::new("slope", 1, -100.0, 100.0, |x: &[f64]| x[0]);
        let config = SaConfig::default()
            .with_initial_temperature(1e8)
            .with_min_temperature(1e7)
            .with_cooling(CoolingSchedule::Geometric { alpha: 0.9999 })
            .with_iterations(1000)
            .with_seed(42);

        let result = SaRunner::run(&f, &config).unwrap();

        let acceptance_ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(
            acceptance_ratio > 0.95,
            "expected high acceptance at high temp, got {acceptance_ratio}"
        );
    }
}

//! TLBO generation loop.

use super::config::TlboConfig;
use crate::error::Result;
use crate::objective::{best_index, Domain, Objective, Point, Snapshot};
use crate::random::{other_index, rng_from_seed};
use rand::Rng;
use tracing::{debug, trace};

/// Result of a TLBO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TlboResult {
    /// Best position in the final class.
    pub best: Vec<f64>,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// One snapshot per generation; entry 0 is the initial class.
    pub history: Vec<Snapshot>,

    /// Best fitness after each generation.
    pub fitness_history: Vec<f64>,

    /// Number of objective evaluations.
    pub evaluations: usize,
}

/// Executes TLBO.
pub struct TlboRunner;

impl TlboRunner {
    /// Runs TLBO seeded from `config.seed`.
    pub fn run<O: Objective + ?Sized>(objective: &O, config: &TlboConfig) -> Result<TlboResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(objective, config, &mut rng)
    }

    /// Runs TLBO drawing from the supplied generator.
    pub fn run_with_rng<O, R>(objective: &O, config: &TlboConfig, rng: &mut R) -> Result<TlboResult>
    where
        O: Objective + ?Sized,
        R: Rng + ?Sized,
    {
        config.validate()?;
        let domain = Domain::of(objective)?;
        let n = config.population_size;

        let mut class: Vec<Point> = (0..n)
            .map(|_| domain.random_point(objective, rng))
            .collect();
        let mut evaluations = n;

        let mut history = Vec::with_capacity(config.max_generations);
        let mut fitness_history = Vec::with_capacity(config.max_generations);
        history.push(config.history.snapshot(&class));
        fitness_history.push(class[best_index(&class)].fitness);

        for generation in 1..config.max_generations {
            teacher_phase(&mut class, &domain, objective, rng);
            learner_phase(&mut class, &domain, objective, rng);
            evaluations += 2 * n;

            history.push(config.history.snapshot(&class));
            fitness_history.push(class[best_index(&class)].fitness);
            trace!(
                generation,
                best_fitness = fitness_history[generation],
                "tlbo generation"
            );
        }

        let best = class.swap_remove(best_index(&class));

        debug!(
            objective = objective.name(),
            learners = n,
            generations = config.max_generations,
            best_fitness = best.fitness,
            "tlbo finished"
        );

        Ok(TlboResult {
            best: best.position,
            best_fitness: best.fitness,
            history,
            fitness_history,
            evaluations,
        })
    }
}

/// Moves every learner toward the teacher and away from the class mean.
///
/// Teacher and mean are fixed at the start of the phase.
fn teacher_phase<O, R>(class: &mut [Point], domain: &Domain, objective: &O, rng: &mut R)
where
    O: Objective + ?Sized,
    R: Rng + ?Sized,
{
    let teacher = class[best_index(class)].position.clone();
    let mean: Vec<f64> = (0..domain.dimension)
        .map(|j| class.iter().map(|p| p.position[j]).sum::<f64>() / class.len() as f64)
        .collect();

    for learner in class.iter_mut() {
        let teaching_factor = rng.random_range(1..=2) as f64;
        let mut x: Vec<f64> = (0..domain.dimension)
            .map(|j| {
                let r: f64 = rng.random();
                learner.position[j] + r * (teacher[j] - teaching_factor * mean[j])
            })
            .collect();
        domain.clip(&mut x);
        let candidate = Point::evaluated(x, objective);
        if candidate.improves_on(learner) {
            *learner = candidate;
        }
    }
}

/// Lets every learner interact with one random classmate.
///
/// A learner strictly better than its partner moves away from it;
/// otherwise it moves toward it. Updates are visible to later learners.
fn learner_phase<O, R>(class: &mut [Point], domain: &Domain, objective: &O, rng: &mut R)
where
    O: Objective + ?Sized,
    R: Rng + ?Sized,
{
    for i in 0..class.len() {
        let j = other_index(class.len(), i, rng);
        let (xi, xj) = (&class[i], &class[j]);
        let away = xi.improves_on(xj);
        let mut x: Vec<f64> = (0..domain.dimension)
            .map(|d| {
                let r: f64 = rng.random();
                if away {
                    xi.position[d] + r * (xi.position[d] - xj.position[d])
                } else {
                    xi.position[d] + r * (xj.position[d] - xi.position[d])
                }
            })
            .collect();
        domain.clip(&mut x);
        let candidate = Point::evaluated(x, objective);
        if candidate.improves_on(&class[i]) {
            class[i] = candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{Benchmark, Function};
    use crate::random::create_rng;

    #[test]
    fn test_sphere_converges() {
        let f = Function::new(Benchmark::Sphere, 5);
        let config = TlboConfig::default().with_max_generations(100).with_seed(42);
        let result = TlboRunner::run(&f, &config).unwrap();

        assert!(
            result.best_fitness < 1e-3,
            "TLBO failed to minimize Sphere: fitness {}",
            result.best_fitness
        );
    }

    #[test]
    fn test_history_shape_and_evaluations() {
        let f = Function::new(Benchmark::Zakharov, 3);
        let config = TlboConfig::default()
            .with_population_size(10)
            .with_max_generations(15)
            .with_seed(3);
        let result = TlboRunner::run(&f, &config).unwrap();

        assert_eq!(result.history.len(), 15);
        assert!(result.history.iter().all(|s| s.len() == 10));
        assert_eq!(result.evaluations, 10 + 2 * 10 * 14);
    }

    #[test]
    fn test_greedy_phases_never_regress() {
        let f = Function::new(Benchmark::Rastrigin, 4);
        let config = TlboConfig::default()
            .with_population_size(12)
            .with_max_generations(30)
            .with_seed(5);
        let result = TlboRunner::run(&f, &config).unwrap();

        for pair in result.history.windows(2) {
            for (old, new) in pair[0].iter().zip(pair[1].iter()) {
                assert!(new.fitness <= old.fitness);
            }
        }
        let domain = Domain::of(&f).unwrap();
        assert!(result
            .history
            .iter()
            .flatten()
            .all(|p| domain.contains(&p.position)));
    }

    #[test]
    fn test_teacher_phase_keeps_fitness_consistent() {
        let f = Function::new(Benchmark::Sphere, 2);
        let domain = Domain::of(&f).unwrap();
        let mut rng = create_rng(21);
        let mut class: Vec<Point> = (0..6).map(|_| domain.random_point(&f, &mut rng)).collect();
        let before: Vec<f64> = class.iter().map(|p| p.fitness).collect();

        teacher_phase(&mut class, &domain, &f, &mut rng);

        for (p, old) in class.iter().zip(before) {
            assert_eq!(p.fitness, f.evaluate(&p.position));
            assert!(p.fitness <= old);
        }
    }
}

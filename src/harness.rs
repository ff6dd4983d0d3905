//! Repeated-run experiments over the continuous strategies.
//!
//! An [`Experiment`] runs one [`Algorithm`] several times on an objective,
//! seeding run `i` with `base_seed + i`, and summarizes the final best
//! values. Population strategies record only the best point per generation
//! during experiments, since the trajectories are discarded.
//!
//! ```
//! use metaheur_bench::de::DeConfig;
//! use metaheur_bench::harness::{Algorithm, Experiment};
//! use metaheur_bench::objective::{Benchmark, Function};
//!
//! let sphere = Function::new(Benchmark::Sphere, 5);
//! let algorithm = Algorithm::De(DeConfig::default().with_max_generations(20));
//! let summary = Experiment::new(3).with_base_seed(1).run(&sphere, &algorithm).unwrap();
//! assert_eq!(summary.values.len(), 3);
//! assert!(summary.best <= summary.mean && summary.mean <= summary.worst);
//! ```

use crate::blind::{BlindConfig, BlindRunner};
use crate::de::{DeConfig, DeRunner};
use crate::error::{check_nonzero, Result};
use crate::firefly::{FireflyConfig, FireflyRunner};
use crate::hill::{HillConfig, HillRunner};
use crate::objective::{HistoryMode, Objective};
use crate::pso::{PsoConfig, PsoRunner};
use crate::sa::{SaConfig, SaRunner};
use crate::soma::{SomaConfig, SomaRunner};
use crate::tlbo::{TlboConfig, TlboRunner};
use tracing::{debug, info};

/// A continuous strategy together with its configuration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Blind(BlindConfig),
    Hill(HillConfig),
    Sa(SaConfig),
    De(DeConfig),
    Pso(PsoConfig),
    Firefly(FireflyConfig),
    Tlbo(TlboConfig),
    Soma(SomaConfig),
}

/// Outcome of one seeded run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunOutcome {
    pub best_fitness: f64,
    pub evaluations: usize,
}

impl Algorithm {
    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Blind(_) => "Blind",
            Algorithm::Hill(_) => "Hill",
            Algorithm::Sa(_) => "SA",
            Algorithm::De(_) => "DE",
            Algorithm::Pso(_) => "PSO",
            Algorithm::Firefly(_) => "FA",
            Algorithm::Tlbo(_) => "TLBO",
            Algorithm::Soma(_) => "SOMA",
        }
    }

    /// Runs the strategy once with the given seed, overriding the
    /// configured one.
    pub fn run_once<O: Objective + ?Sized>(&self, objective: &O, seed: u64) -> Result<RunOutcome> {
        let outcome = match self {
            Algorithm::Blind(config) => {
                let config = BlindConfig {
                    seed: Some(seed),
                    ..config.clone()
                };
                let r = BlindRunner::run(objective, &config)?;
                (r.best_fitness, r.evaluations)
            }
            Algorithm::Hill(config) => {
                let config = HillConfig {
                    seed: Some(seed),
                    ..config.clone()
                };
                let r = HillRunner::run(objective, &config)?;
                (r.best_fitness, r.evaluations)
            }
            Algorithm::Sa(config) => {
                let config = SaConfig {
                    seed: Some(seed),
                    ..config.clone()
                };
                let r = SaRunner::run(objective, &config)?;
                (r.best_fitness, r.evaluations)
            }
            Algorithm::De(config) => {
                let config = DeConfig {
                    seed: Some(seed),
                    history: HistoryMode::Best,
                    ..config.clone()
                };
                let r = DeRunner::run(objective, &config)?;
                (r.best_fitness, r.evaluations)
            }
            Algorithm::Pso(config) => {
                let config = PsoConfig {
                    seed: Some(seed),
                    history: HistoryMode::Best,
                    ..config.clone()
                };
                let r = PsoRunner::run(objective, &config)?;
                (r.best_fitness, r.evaluations)
            }
            Algorithm::Firefly(config) => {
                let config = FireflyConfig {
                    seed: Some(seed),
                    history: HistoryMode::Best,
                    ..config.clone()
                };
                let r = FireflyRunner::run(objective, &config)?;
                (r.best_fitness, r.evaluations)
            }
            Algorithm::Tlbo(config) => {
                let config = TlboConfig {
                    seed: Some(seed),
                    history: HistoryMode::Best,
                    ..config.clone()
                };
                let r = TlboRunner::run(objective, &config)?;
                (r.best_fitness, r.evaluations)
            }
            Algorithm::Soma(config) => {
                let config = SomaConfig {
                    seed: Some(seed),
                    history: HistoryMode::Best,
                    ..config.clone()
                };
                let r = SomaRunner::run(objective, &config)?;
                (r.best_fitness, r.evaluations)
            }
        };

        Ok(RunOutcome {
            best_fitness: outcome.0,
            evaluations: outcome.1,
        })
    }
}

/// Statistics over the final best values of repeated runs.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentSummary {
    pub algorithm: String,
    pub function: String,

    /// Final best value of each run, in run order.
    pub values: Vec<f64>,

    pub mean: f64,

    /// Population standard deviation of `values`.
    pub std_dev: f64,

    pub best: f64,
    pub worst: f64,

    /// Total objective evaluations across all runs.
    pub evaluations: usize,
}

/// Repeated seeded runs of a strategy.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Experiment {
    /// Number of runs per strategy.
    pub runs: usize,

    /// Seed of the first run; run `i` uses `base_seed + i`.
    pub base_seed: u64,
}

impl Experiment {
    pub fn new(runs: usize) -> Self {
        Self { runs, base_seed: 0 }
    }

    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }

    /// Runs `algorithm` on `objective` and summarizes the results.
    pub fn run<O: Objective + ?Sized>(
        &self,
        objective: &O,
        algorithm: &Algorithm,
    ) -> Result<ExperimentSummary> {
        check_nonzero("runs", self.runs)?;

        let mut values = Vec::with_capacity(self.runs);
        let mut evaluations = 0usize;
        for i in 0..self.runs {
            let seed = self.base_seed.wrapping_add(i as u64);
            let outcome = algorithm.run_once(objective, seed)?;
            debug!(
                algorithm = algorithm.name(),
                run = i,
                seed,
                best_fitness = outcome.best_fitness,
                "experiment run"
            );
            values.push(outcome.best_fitness);
            evaluations += outcome.evaluations;
        }

        let summary = summarize(algorithm.name(), objective.name(), values, evaluations);
        info!(
            algorithm = %summary.algorithm,
            function = %summary.function,
            runs = self.runs,
            mean = summary.mean,
            std_dev = summary.std_dev,
            best = summary.best,
            "experiment finished"
        );
        Ok(summary)
    }

    /// Runs every algorithm on `objective`, one summary per algorithm.
    pub fn run_table<O: Objective + ?Sized>(
        &self,
        objective: &O,
        algorithms: &[Algorithm],
    ) -> Result<Vec<ExperimentSummary>> {
        algorithms
            .iter()
            .map(|algorithm| self.run(objective, algorithm))
            .collect()
    }
}

fn summarize(
    algorithm: &str,
    function: &str,
    values: Vec<f64>,
    evaluations: usize,
) -> ExperimentSummary {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let best = values.iter().copied().fold(f64::INFINITY, f64::min);
    let worst = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    ExperimentSummary {
        algorithm: algorithm.to_string(),
        function: function.to_string(),
        values,
        mean,
        std_dev: variance.sqrt(),
        best,
        worst,
        evaluations,
    }
}

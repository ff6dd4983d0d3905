//! Stochastic global-optimization metaheuristics on a common benchmark suite.
//!
//! Every strategy minimizes an [`objective::Objective`] (or, for the TSP
//! strategies, a [`tsp::Cities`] tour length) and returns its best point
//! together with a history suitable for animation or convergence plots:
//!
//! - **Single-point search**: blind random search ([`blind`]), hill
//!   climbing ([`hill`]), and simulated annealing ([`sa`]).
//! - **Population search**: differential evolution ([`de`]), particle
//!   swarm ([`pso`]), firefly ([`firefly`]), teaching-learning based
//!   optimization ([`tlbo`]), and SOMA All-to-One ([`soma`]).
//! - **Combinatorial search**: a permutation genetic algorithm ([`ga`]) and
//!   Ant System ([`aco`]) for the travelling-salesman problem.
//!
//! The [`harness`] module repeats seeded runs and summarizes the final best
//! values per strategy and function.
//!
//! # Conventions
//!
//! Lower fitness is better. Each runner exposes `run(problem, &config)`,
//! seeded from `config.seed`, and `run_with_rng(problem, &config, &mut rng)`
//! for any [`rand::Rng`]. Configurations are validated before the first
//! evaluation; invalid input surfaces as [`Error`]. Runs are
//! single-threaded, and identical seeds reproduce identical results.
//!
//! ```
//! use metaheur_bench::de::{DeConfig, DeRunner};
//! use metaheur_bench::objective::{Benchmark, Function};
//!
//! let sphere = Function::new(Benchmark::Sphere, 5);
//! let config = DeConfig::default().with_max_generations(50).with_seed(42);
//! let result = DeRunner::run(&sphere, &config).unwrap();
//! assert_eq!(result.history.len(), 50);
//! assert!(result.best_fitness <= result.fitness_history[0]);
//! ```

pub mod aco;
pub mod blind;
pub mod de;
pub mod error;
pub mod firefly;
pub mod ga;
pub mod harness;
pub mod hill;
pub mod objective;
pub mod pso;
pub mod random;
pub mod sa;
pub mod soma;
pub mod tlbo;
pub mod tsp;

pub use error::{Error, Result};

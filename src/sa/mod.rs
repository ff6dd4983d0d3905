//! Simulated Annealing over a continuous box.
//!
//! One current point walks the domain. Each iteration proposes a single
//! neighbour by adding `step_size · N(0, 1)` noise to every coordinate and
//! clipping to the bounds. A strictly better neighbour always replaces the
//! current point; a worse one is accepted with probability `exp(-Δf / T)`.
//! The temperature then drops according to the [`CoolingSchedule`].
//!
//! Two conditions end the run, whichever comes first: the temperature
//! falling to `min_temperature`, or `iterations` neighbours having been
//! tried. Every proposed neighbour lands in the history, accepted or not.
//!
//! ```
//! use metaheur_bench::objective::{Benchmark, Function};
//! use metaheur_bench::sa::{SaConfig, SaRunner};
//!
//! let sphere = Function::new(Benchmark::Sphere, 2);
//!
//! // 100 · 0.95^k first reaches 0.5 at k = 104: the floor stops the run.
//! let cooled = SaRunner::run(&sphere, &SaConfig::default().with_seed(1)).unwrap();
//! assert_eq!(cooled.iterations, 104);
//!
//! // A smaller budget binds before the floor does.
//! let capped = SaConfig::default().with_iterations(40).with_seed(1);
//! let result = SaRunner::run(&sphere, &capped).unwrap();
//! assert_eq!(result.iterations, 40);
//! assert_eq!(result.history.len(), 41);
//! ```
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};

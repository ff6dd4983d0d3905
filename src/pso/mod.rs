//! Particle Swarm Optimization with inertia weight.
//!
//! Particles carry a velocity pulled toward their personal best and the
//! swarm's global best. Particles always move; bests update only on strict
//! improvement. The global best is updated in place, so later particles in
//! the same iteration already follow an improvement found by earlier ones.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"

mod config;
mod runner;

pub use config::PsoConfig;
pub use runner::{PsoResult, PsoRunner};

//! Ant Colony Optimization (Ant System) for the travelling-salesman problem.
//!
//! Each iteration, every ant builds a full tour city by city, choosing the
//! next unvisited city with probability proportional to `τ^α · η^β`, where
//! `τ` is the pheromone on the edge and `η = 1/d` its visibility. After all
//! ants finish, pheromone evaporates by `ρ` and each ant deposits `Q/L` on
//! every edge of its tour.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"

mod config;
mod runner;

pub use config::AcoConfig;
pub use runner::{AcoResult, AcoRunner};

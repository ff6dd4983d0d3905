//! Evaluated points and history snapshots.

use super::Objective;

/// A position together with its fitness.
///
/// The fitness is always the objective value of `position`. Strategies
/// never mutate a `Point` in place; they build a new one through
/// [`Point::evaluated`] after every move.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub position: Vec<f64>,
    pub fitness: f64,
}

impl Point {
    /// Evaluates `position` and wraps the pair.
    pub fn evaluated<O: Objective + ?Sized>(position: Vec<f64>, objective: &O) -> Self {
        let fitness = objective.evaluate(&position);
        Self { position, fitness }
    }

    /// Returns true if `self` is strictly better than `other`.
    pub fn improves_on(&self, other: &Point) -> bool {
        self.fitness < other.fitness
    }
}

/// One population snapshot: the points recorded for a generation.
pub type Snapshot = Vec<Point>;

/// How much of each generation a population strategy records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HistoryMode {
    /// Every individual, for trajectory animation.
    #[default]
    Full,
    /// Only the generation's best individual, for statistics runs.
    Best,
}

impl HistoryMode {
    /// Builds the snapshot for one generation.
    pub(crate) fn snapshot(self, population: &[Point]) -> Snapshot {
        match self {
            HistoryMode::Full => population.to_vec(),
            HistoryMode::Best if population.is_empty() => Vec::new(),
            HistoryMode::Best => vec![population[best_index(population)].clone()],
        }
    }
}

/// Index of the lowest-fitness point, the first one on ties.
///
/// Returns 0 for an empty slice; callers validate population sizes first.
pub(crate) fn best_index(population: &[Point]) -> usize {
    (1..population.len()).fold(0, |best, i| {
        if population[i].fitness < population[best].fitness {
            i
        } else {
            best
        }
    })
}

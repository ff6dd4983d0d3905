//! Random-source helpers.
//!
//! Every runner is generic over [`rand::Rng`], so any generator can be
//! plugged in through `run_with_rng`. The helpers here cover the draws the
//! algorithms share: seeding, standard normals, and index selection without
//! replacement.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, falling back to entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Draws one sample from N(0, 1).
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

/// Picks `amount` distinct indices from `0..n`, none equal to `exclude`.
///
/// # Panics
/// Panics if fewer than `amount` candidates remain after the exclusion.
/// Callers guarantee this through population-size validation.
pub fn distinct_indices_excluding<R: Rng + ?Sized>(
    n: usize,
    amount: usize,
    exclude: usize,
    rng: &mut R,
) -> Vec<usize> {
    assert!(
        exclude < n && amount < n,
        "need {amount} indices out of {n} excluding {exclude}"
    );
    rand::seq::index::sample(rng, n - 1, amount)
        .into_iter()
        .map(|i| if i >= exclude { i + 1 } else { i })
        .collect()
}

/// Picks one index from `0..n` other than `exclude`.
///
/// # Panics
/// Panics if `n < 2`.
pub fn other_index<R: Rng + ?Sized>(n: usize, exclude: usize, rng: &mut R) -> usize {
    assert!(n >= 2, "need at least two indices, got {n}");
    let i = rng.random_range(0..n - 1);
    if i >= exclude {
        i + 1
    } else {
        i
    }
}

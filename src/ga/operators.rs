//! Permutation operators for tour chromosomes.
//!
//! Both operators work on `&[usize]` index vectors and keep the
//! permutation property: every city appears exactly once.
//!
//! - [`order_crossover`] (OX): Davis (1985), preserves relative order
//! - [`swap_mutation`]: exchange two distinct positions, O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) producing a single child.
///
/// # Algorithm
///
/// 1. Draw two distinct cut points from `0..n` and sort them into
///    `start < end`
/// 2. Copy `parent_a[start..end]` to the child at the same positions
/// 3. Fill the remaining positions left to right with the cities of
///    `parent_b` in their order, skipping cities already placed
///
/// Parents of length below two are returned unchanged.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn order_crossover<R: Rng + ?Sized>(
    parent_a: &[usize],
    parent_b: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal length");

    if n < 2 {
        return parent_a.to_vec();
    }

    let (start, end) = cut_points(n, rng);
    ox_build_child(parent_a, parent_b, start, end)
}

/// Build one OX child: slice `[start, end)` from `template`, rest from `donor`.
fn ox_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    for i in start..end {
        child[i] = template[i];
        placed[template[i]] = true;
    }

    let mut fill = donor.iter().copied().filter(|&city| !placed[city]);
    for slot in child.iter_mut().filter(|slot| **slot == usize::MAX) {
        if let Some(city) = fill.next() {
            *slot = city;
        }
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng + ?Sized>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let (i, j) = cut_points(n, rng);
    perm.swap(i, j);
}

// ============================================================================
// Helpers
// ============================================================================

/// Two distinct indices from `0..n`, sorted so that `start < end`.
fn cut_points<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    let picked = rand::seq::index::sample(rng, n, 2);
    let (a, b) = (picked.index(0), picked.index(1));
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tsp::is_permutation;
    use proptest::prelude::*;

    // ---- OX Crossover ----

    #[test]
    fn test_ox_produces_valid_permutations() {
        let mut rng = create_rng(42);
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![7, 6, 5, 4, 3, 2, 1, 0];

        for _ in 0..100 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_permutation(&child, 8), "OX child not valid: {child:?}");
        }
    }

    #[test]
    fn test_ox_known_child() {
        // Slice [2, 5) from A, then B's order for the rest: 8 7 6 1 0 ...
        let a = vec![0, 1, 2, 3, 4, 5, 6, 7, 8];
        let b = vec![8, 7, 6, 5, 4, 3, 2, 1, 0];
        let child = ox_build_child(&a, &b, 2, 5);
        assert_eq!(child, vec![8, 7, 2, 3, 4, 6, 5, 1, 0]);
    }

    #[test]
    fn test_ox_keeps_a_slice_somewhere() {
        let mut rng = create_rng(123);
        let a = vec![0, 1, 2, 3, 4];
        let b = vec![4, 3, 2, 1, 0];

        for _ in 0..50 {
            let child = order_crossover(&a, &b, &mut rng);
            // The cut is non-empty, so at least one position matches A.
            assert!(child.iter().zip(&a).any(|(c, p)| c == p));
        }
    }

    #[test]
    fn test_ox_identical_parents() {
        let mut rng = create_rng(42);
        let p = vec![3, 1, 4, 0, 2];
        assert_eq!(order_crossover(&p, &p, &mut rng), p);
    }

    #[test]
    fn test_ox_single_element() {
        let mut rng = create_rng(42);
        assert_eq!(order_crossover(&[0], &[0], &mut rng), vec![0]);
    }

    #[test]
    fn test_ox_two_elements() {
        let mut rng = create_rng(42);
        for _ in 0..20 {
            let child = order_crossover(&[0, 1], &[1, 0], &mut rng);
            // Cuts are always (0, 1): A's first city, then B's remaining one.
            assert_eq!(child, vec![0, 1]);
        }
    }

    // ---- Swap Mutation ----

    #[test]
    fn test_swap_always_changes_two_positions() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let mut perm: Vec<usize> = (0..10).collect();
            swap_mutation(&mut perm, &mut rng);
            assert!(is_permutation(&perm, 10));
            let moved = perm.iter().enumerate().filter(|(i, &v)| *i != v).count();
            assert_eq!(moved, 2);
        }
    }

    #[test]
    fn test_swap_single_element() {
        let mut rng = create_rng(42);
        let mut perm = vec![0];
        swap_mutation(&mut perm, &mut rng);
        assert_eq!(perm, vec![0]);
    }

    #[test]
    fn test_cut_points_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (start, end) = cut_points(10, &mut rng);
            assert!(start < end);
            assert!(end < 10);
        }
    }

    proptest! {
        #[test]
        fn prop_ox_then_swap_is_permutation(
            a in Just((0..12usize).collect::<Vec<_>>()).prop_shuffle(),
            b in Just((0..12usize).collect::<Vec<_>>()).prop_shuffle(),
            seed in any::<u64>(),
        ) {
            let mut rng = create_rng(seed);
            let mut child = order_crossover(&a, &b, &mut rng);
            swap_mutation(&mut child, &mut rng);
            prop_assert!(is_permutation(&child, 12));
        }
    }
}

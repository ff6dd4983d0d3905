//! Euclidean travelling-salesman instances.
//!
//! A [`Cities`] value owns the coordinates and the precomputed symmetric
//! distance matrix. Routes are permutations of `0..n` and tours are closed:
//! the last city connects back to the first.

use crate::error::{Error, Result};

/// Minimum number of cities the permutation operators work with.
pub const MIN_CITIES: usize = 2;

/// A validated set of cities in the plane.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cities {
    coordinates: Vec<[f64; 2]>,
    distances: Vec<f64>,
}

impl Cities {
    /// Builds an instance, rejecting fewer than two cities or non-finite
    /// coordinates.
    pub fn new(coordinates: Vec<[f64; 2]>) -> Result<Self> {
        if coordinates.len() < MIN_CITIES {
            return Err(Error::TooFewCities {
                required: MIN_CITIES,
                actual: coordinates.len(),
            });
        }
        if let Some(index) = coordinates
            .iter()
            .position(|c| !c[0].is_finite() || !c[1].is_finite())
        {
            return Err(Error::NonFiniteCity { index });
        }

        let n = coordinates.len();
        let mut distances = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let [xi, yi] = coordinates[i];
                let [xj, yj] = coordinates[j];
                let d = (xi - xj).hypot(yi - yj);
                distances[i * n + j] = d;
                distances[j * n + i] = d;
            }
        }

        Ok(Self {
            coordinates,
            distances,
        })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Always false: construction requires at least two cities.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn coordinates(&self) -> &[[f64; 2]] {
        &self.coordinates
    }

    /// Euclidean distance between cities `i` and `j`.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances[i * self.len() + j]
    }

    /// Length of the closed tour visiting `route` in order.
    pub fn tour_length(&self, route: &[usize]) -> f64 {
        let n = route.len();
        (0..n)
            .map(|i| self.distance(route[i], route[(i + 1) % n]))
            .sum()
    }
}

/// Returns true if `route` visits each of `0..n` exactly once.
pub fn is_permutation(route: &[usize], n: usize) -> bool {
    if route.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in route {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

/// A recorded route together with its tour length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourSnapshot {
    pub route: Vec<usize>,
    pub length: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Cities {
        Cities::new(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]).unwrap()
    }

    #[test]
    fn test_distance_matrix_symmetric() {
        let cities = unit_square();
        assert_eq!(cities.len(), 4);
        for i in 0..4 {
            assert_eq!(cities.distance(i, i), 0.0);
            for j in 0..4 {
                assert_eq!(cities.distance(i, j), cities.distance(j, i));
            }
        }
        assert!((cities.distance(0, 2) - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_tour_length_closes_loop() {
        let cities = unit_square();
        assert!((cities.tour_length(&[0, 1, 2, 3]) - 4.0).abs() < 1e-12);
        let crossed = 2.0 + 2.0 * 2f64.sqrt();
        assert!((cities.tour_length(&[0, 2, 1, 3]) - crossed).abs() < 1e-12);
    }

    #[test]
    fn test_two_cities_round_trip() {
        let cities = Cities::new(vec![[0.0, 0.0], [3.0, 4.0]]).unwrap();
        assert!((cities.tour_length(&[1, 0]) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            Cities::new(vec![[0.0, 0.0]]).unwrap_err(),
            Error::TooFewCities {
                required: 2,
                actual: 1
            }
        );
        assert_eq!(
            Cities::new(vec![[0.0, 0.0], [f64::NAN, 1.0]]).unwrap_err(),
            Error::NonFiniteCity { index: 1 }
        );
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
    }
}

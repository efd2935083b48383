//! Precomputed pairwise distances.

use crate::instance::Point;

/// Symmetric N×N table of Euclidean distances, stored row-major.
///
/// Built once from coordinates and read-only afterwards. The diagonal is
/// always zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the table in one pass over all ordered pairs.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance(&points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between nodes `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::random_points;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ])
    }

    #[test]
    fn test_square_distances() {
        let m = square();
        assert_eq!(m.len(), 4);
        assert!((m.get(0, 1) - 1.0).abs() < 1e-12);
        assert!((m.get(0, 2) - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_empty() {
        let m = DistanceMatrix::from_points(&[]);
        assert!(m.is_empty());
    }

    proptest! {
        #[test]
        fn prop_symmetric_zero_diagonal(n in 1usize..30, seed in any::<u64>()) {
            let points = random_points(n, 100.0, &mut create_rng(seed));
            let m = DistanceMatrix::from_points(&points);
            for i in 0..n {
                prop_assert_eq!(m.get(i, i), 0.0);
                for j in 0..n {
                    prop_assert_eq!(m.get(i, j), m.get(j, i));
                    prop_assert!(m.get(i, j) >= 0.0);
                }
            }
        }
    }
}

//! Tour validation and cost evaluation.

use crate::distance::DistanceMatrix;
use crate::error::{TourDefect, TspError};

/// Checks that `tour` is a permutation of `0..n`.
pub fn validate_tour(tour: &[usize], n: usize) -> Result<(), TspError> {
    let invalid = |reason| TspError::InvalidTour {
        expected_len: n,
        reason,
    };
    if tour.len() != n {
        return Err(invalid(TourDefect::WrongLength(tour.len())));
    }
    let mut seen = vec![false; n];
    for &node in tour {
        if node >= n {
            return Err(invalid(TourDefect::OutOfRange(node)));
        }
        if seen[node] {
            return Err(invalid(TourDefect::Duplicate(node)));
        }
        seen[node] = true;
    }
    Ok(())
}

/// Total cyclic length of `tour`, including the closing edge back to the start.
///
/// Fails with [`TspError::InvalidTour`] unless `tour` is a permutation of
/// every node in `matrix`.
pub fn tour_cost(matrix: &DistanceMatrix, tour: &[usize]) -> Result<f64, TspError> {
    validate_tour(tour, matrix.len())?;
    Ok(cyclic_length(matrix, tour))
}

/// Cyclic length without validation. Callers guarantee `tour` is a permutation.
pub(crate) fn cyclic_length(matrix: &DistanceMatrix, tour: &[usize]) -> f64 {
    match (tour.first(), tour.last()) {
        (Some(&first), Some(&last)) => {
            let open: f64 = tour.windows(2).map(|w| matrix.get(w[0], w[1])).sum();
            open + matrix.get(last, first)
        }
        _ => 0.0,
    }
}

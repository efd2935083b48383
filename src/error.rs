//! Error taxonomy shared by the evaluator and both searches.

use std::fmt;

/// Errors raised by tour evaluation, config validation and ant construction.
///
/// Every error is returned to the caller of the offending operation. No
/// search retries or recovers on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum TspError {
    /// The tour is not a permutation of `0..expected_len`.
    InvalidTour {
        expected_len: usize,
        reason: TourDefect,
    },

    /// An algorithm parameter is out of range.
    InvalidConfig(String),

    /// Construction found no node with a positive, finite weight.
    DegenerateDistribution {
        /// Node the ant was standing on.
        from: usize,
        /// Nodes still unvisited at that point.
        remaining: usize,
    },
}

/// Why a tour failed permutation validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourDefect {
    WrongLength(usize),
    OutOfRange(usize),
    Duplicate(usize),
}

impl fmt::Display for TourDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => write!(f, "tour has {len} entries"),
            Self::OutOfRange(node) => write!(f, "node {node} is out of range"),
            Self::Duplicate(node) => write!(f, "node {node} appears more than once"),
        }
    }
}

impl fmt::Display for TspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTour {
                expected_len,
                reason,
            } => write!(
                f,
                "invalid tour: expected a permutation of 0..{expected_len}, {reason}"
            ),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::DegenerateDistribution { from, remaining } => write!(
                f,
                "degenerate distribution at node {from}: no selectable node among {remaining} unvisited"
            ),
        }
    }
}

impl std::error::Error for TspError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_tour() {
        let err = TspError::InvalidTour {
            expected_len: 4,
            reason: TourDefect::Duplicate(2),
        };
        assert_eq!(
            err.to_string(),
            "invalid tour: expected a permutation of 0..4, node 2 appears more than once"
        );
    }

    #[test]
    fn test_display_invalid_config() {
        let err = TspError::InvalidConfig("colony_size must be positive".into());
        assert_eq!(err.to_string(), "invalid config: colony_size must be positive");
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(TspError::DegenerateDistribution {
            from: 0,
            remaining: 3,
        });
        assert!(err.to_string().contains("node 0"));
    }
}

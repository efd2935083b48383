//! HC execution loop.

use super::config::HcConfig;
use super::neighborhood::SwapPairs;
use crate::distance::DistanceMatrix;
use crate::error::TspError;
use crate::random::{random_permutation, rng_from};
use crate::tour::{cyclic_length, tour_cost};
use tracing::{debug, info};

/// Result of a Hill Climbing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcResult {
    /// The best tour found.
    pub best: Vec<usize>,

    /// Cost of the best tour.
    pub best_cost: f64,

    /// Cost of the starting tour.
    pub initial_cost: f64,

    /// Number of sweeps executed (always the configured budget).
    pub iterations: usize,

    /// Number of candidates adopted over the whole run.
    pub improving_moves: usize,

    /// Best cost at the end of each sweep.
    pub cost_history: Vec<f64>,
}

/// Executes Hill Climbing over the swap neighborhood.
pub struct HcRunner;

impl HcRunner {
    /// Runs HC from a uniformly shuffled starting tour.
    pub fn run(matrix: &DistanceMatrix, config: &HcConfig) -> Result<HcResult, TspError> {
        let mut rng = rng_from(config.seed);
        let initial = random_permutation(matrix.len(), &mut rng);
        Self::run_from(matrix, initial, config)
    }

    /// Runs HC from a caller-supplied starting tour.
    ///
    /// Fails with [`TspError::InvalidTour`] if `initial` is not a
    /// permutation of the matrix nodes.
    pub fn run_from(
        matrix: &DistanceMatrix,
        initial: Vec<usize>,
        config: &HcConfig,
    ) -> Result<HcResult, TspError> {
        config.validate()?;
        let initial_cost = tour_cost(matrix, &initial)?;

        let mut best = initial;
        let mut best_cost = initial_cost;
        let mut improving_moves = 0usize;
        let mut cost_history = Vec::with_capacity(config.max_iterations);

        // Candidates of one sweep are drawn from the tour the sweep started on.
        let mut base = best.clone();

        for iteration in 0..config.max_iterations {
            base.copy_from_slice(&best);
            let before = best_cost;

            for (i, j) in SwapPairs::new(base.len()) {
                base.swap(i, j);
                let cost = cyclic_length(matrix, &base);
                if cost < best_cost {
                    best.copy_from_slice(&base);
                    best_cost = cost;
                    improving_moves += 1;
                }
                base.swap(i, j);
            }

            if best_cost < before {
                debug!(iteration, best_cost, "hill climbing improved");
            }
            cost_history.push(best_cost);
        }

        info!(
            initial_cost,
            best_cost,
            improving_moves,
            iterations = config.max_iterations,
            "hill climbing finished"
        );

        Ok(HcResult {
            best,
            best_cost,
            initial_cost,
            iterations: config.max_iterations,
            improving_moves,
            cost_history,
        })
    }
}

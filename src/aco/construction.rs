//! Probabilistic tour construction for a single ant.

use super::config::{AsConfig, DegeneratePolicy};
use super::pheromone::PheromoneMatrix;
use super::sampling::{exp_shifted, sample_index};
use crate::distance::DistanceMatrix;
use crate::error::TspError;
use crate::tour::tour_cost;
use rand::Rng;
use tracing::warn;

/// One ant's tour and its cost, built during a single iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Ant {
    pub tour: Vec<usize>,
    pub cost: f64,
}

/// Heuristic term in log space: `beta * ln(eta(i, j))` with
/// `eta = 1 / max(d(i, j), floor)`.
///
/// Computed once per run. Kept as a logarithm so that large `beta` cannot
/// underflow `eta^beta` to zero. The diagonal is `-inf`.
#[derive(Debug, Clone)]
pub struct Visibility {
    n: usize,
    values: Vec<f64>,
}

impl Visibility {
    pub fn new(matrix: &DistanceMatrix, beta: f64, floor: f64) -> Self {
        let n = matrix.len();
        let mut values = vec![f64::NEG_INFINITY; n * n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    let d = matrix.get(i, j).max(floor);
                    values[i * n + j] = -beta * d.ln();
                }
            }
        }
        Self { n, values }
    }

    /// `ln(eta(i, j)^beta)`.
    #[inline]
    pub fn ln(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }
}

/// Builds ant tours from a read-only view of the colony state.
///
/// Holds only shared references, so one builder can serve every ant of an
/// iteration, including from multiple threads.
pub struct TourBuilder<'a> {
    matrix: &'a DistanceMatrix,
    pheromone: &'a PheromoneMatrix,
    visibility: &'a Visibility,
    alpha: f64,
    degenerate: DegeneratePolicy,
}

impl<'a> TourBuilder<'a> {
    pub fn new(
        matrix: &'a DistanceMatrix,
        pheromone: &'a PheromoneMatrix,
        visibility: &'a Visibility,
        config: &AsConfig,
    ) -> Self {
        Self {
            matrix,
            pheromone,
            visibility,
            alpha: config.alpha,
            degenerate: config.degenerate,
        }
    }

    /// Constructs one complete tour starting at a uniformly random node.
    pub fn build<R: Rng>(&self, rng: &mut R) -> Result<Ant, TspError> {
        let n = self.matrix.len();
        if n == 0 {
            return Ok(Ant {
                tour: Vec::new(),
                cost: 0.0,
            });
        }

        let mut tour = Vec::with_capacity(n);
        let mut visited = vec![false; n];
        let mut weights = vec![0.0; n];

        let start = rng.random_range(0..n);
        tour.push(start);
        visited[start] = true;

        while tour.len() < n {
            let current = tour[tour.len() - 1];
            for (j, w) in weights.iter_mut().enumerate() {
                *w = if visited[j] {
                    f64::NEG_INFINITY
                } else {
                    self.log_weight(current, j)
                };
            }
            exp_shifted(&mut weights);

            let next = match sample_index(&weights, rng) {
                Some(j) => j,
                None => self.fallback(current, &visited, rng)?,
            };
            tour.push(next);
            visited[next] = true;
        }

        let cost = tour_cost(self.matrix, &tour)?;
        Ok(Ant { tour, cost })
    }

    /// `ln(tau(i, j)^alpha * eta(i, j)^beta)`. Zero pheromone gives `-inf`
    /// unless `alpha` is zero.
    fn log_weight(&self, i: usize, j: usize) -> f64 {
        let tau = if self.alpha == 0.0 {
            0.0
        } else {
            self.alpha * self.pheromone.get(i, j).ln()
        };
        tau + self.visibility.ln(i, j)
    }

    fn fallback<R: Rng>(
        &self,
        current: usize,
        visited: &[bool],
        rng: &mut R,
    ) -> Result<usize, TspError> {
        let unvisited: Vec<usize> = (0..visited.len()).filter(|&j| !visited[j]).collect();
        match self.degenerate {
            DegeneratePolicy::Fail => Err(TspError::DegenerateDistribution {
                from: current,
                remaining: unvisited.len(),
            }),
            DegeneratePolicy::Uniform => {
                warn!(
                    from = current,
                    remaining = unvisited.len(),
                    "degenerate distribution, choosing uniformly"
                );
                Ok(unvisited[rng.random_range(0..unvisited.len())])
            }
        }
    }
}

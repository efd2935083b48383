//! Pheromone matrix: evaporation and reinforcement.

use super::config::DepositRule;
use super::construction::Ant;

/// N×N pheromone levels, stored row-major.
///
/// Created once per run and mutated only between iterations. Values stay
/// non-negative: evaporation multiplies by `1 - rho >= 0` and deposits add
/// `Q / cost > 0`. Ants whose cost is zero or not finite deposit nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    n: usize,
    values: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates an `n`×`n` matrix with every entry set to `initial`.
    pub fn new(n: usize, initial: f64) -> Self {
        Self {
            n,
            values: vec![initial; n * n],
        }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Smallest entry, or `None` for an empty matrix.
    pub fn min_value(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    /// Multiplies every entry by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = (1.0 - rho).max(0.0);
        for v in &mut self.values {
            *v *= keep;
        }
    }

    /// Adds each ant's `q / cost` according to `rule`.
    pub fn deposit(&mut self, ants: &[Ant], q: f64, rule: DepositRule) {
        for ant in ants {
            if !ant.cost.is_finite() || ant.cost <= 0.0 {
                continue;
            }
            let amount = q / ant.cost;
            match rule {
                DepositRule::VisitedNode => self.deposit_visited(&ant.tour, amount),
                DepositRule::TraversedEdge => self.deposit_traversed(&ant.tour, amount),
            }
        }
    }

    /// Reinforces `(i, j)` for every row `i` and every node `j` in `tour`.
    fn deposit_visited(&mut self, tour: &[usize], amount: f64) {
        if self.n == 0 {
            return;
        }
        let mut visited = vec![false; self.n];
        for &node in tour {
            visited[node] = true;
        }
        for row in self.values.chunks_exact_mut(self.n) {
            for (j, v) in row.iter_mut().enumerate() {
                if visited[j] {
                    *v += amount;
                }
            }
        }
    }

    /// Reinforces each edge of the cyclic tour in both directions.
    fn deposit_traversed(&mut self, tour: &[usize], amount: f64) {
        let n = self.n;
        for (k, &from) in tour.iter().enumerate() {
            let to = tour[(k + 1) % tour.len()];
            self.values[from * n + to] += amount;
            if from != to {
                self.values[to * n + from] += amount;
            }
        }
    }
}

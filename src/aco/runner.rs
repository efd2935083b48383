//! AS execution loop.

use super::config::AsConfig;
use super::construction::{Ant, TourBuilder, Visibility};
use super::pheromone::PheromoneMatrix;
use crate::distance::DistanceMatrix;
use crate::error::TspError;
use crate::random::{create_rng, rng_from};
use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info};

/// Result of an Ant System run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsResult {
    /// Best tour over all ants of all iterations.
    pub best: Vec<usize>,

    /// Cost of the best tour.
    pub best_cost: f64,

    /// Iterations executed (always the configured count).
    pub iterations: usize,

    /// Zero-based iteration in which the best tour was built.
    pub best_iteration: usize,

    /// Global best cost after each iteration. Non-increasing.
    pub cost_history: Vec<f64>,
}

/// Mutable state threaded through the iteration loop.
struct ColonyState {
    pheromone: PheromoneMatrix,
    best: Vec<usize>,
    best_cost: f64,
    best_iteration: usize,
}

impl ColonyState {
    fn new(n: usize, config: &AsConfig) -> Self {
        Self {
            pheromone: PheromoneMatrix::new(n, config.initial_pheromone),
            best: Vec::new(),
            best_cost: f64::INFINITY,
            best_iteration: 0,
        }
    }

    /// Folds the iteration's best ant into the global best.
    fn absorb(&mut self, ants: &[Ant], iteration: usize) -> bool {
        let Some(leader) = find_best(ants) else {
            return false;
        };
        if leader.cost < self.best_cost {
            self.best = leader.tour.clone();
            self.best_cost = leader.cost;
            self.best_iteration = iteration;
            true
        } else {
            false
        }
    }
}

/// Executes the Ant System.
pub struct AsRunner;

impl AsRunner {
    /// Runs AS optimization.
    ///
    /// # Errors
    ///
    /// - [`TspError::InvalidConfig`] if `config` fails validation.
    /// - [`TspError::DegenerateDistribution`] if an ant cannot choose a next
    ///   node and `config.degenerate` is [`super::DegeneratePolicy::Fail`].
    pub fn run(matrix: &DistanceMatrix, config: &AsConfig) -> Result<AsResult, TspError> {
        config.validate()?;

        let mut rng = rng_from(config.seed);
        let visibility = Visibility::new(matrix, config.beta, config.distance_floor);
        let mut state = ColonyState::new(matrix.len(), config);
        let mut cost_history = Vec::with_capacity(config.iterations);

        for iteration in 0..config.iterations {
            let ants = construct_colony(matrix, &state.pheromone, &visibility, config, &mut rng)?;

            if state.absorb(&ants, iteration) {
                debug!(iteration, best_cost = state.best_cost, "ant system improved");
            }

            state.pheromone.evaporate(config.evaporation);
            state
                .pheromone
                .deposit(&ants, config.deposit_constant, config.deposit_rule);

            cost_history.push(state.best_cost);
        }

        info!(
            best_cost = state.best_cost,
            best_iteration = state.best_iteration,
            iterations = config.iterations,
            "ant system finished"
        );

        Ok(AsResult {
            best: state.best,
            best_cost: state.best_cost,
            iterations: config.iterations,
            best_iteration: state.best_iteration,
            cost_history,
        })
    }
}

/// Builds one tour per ant against a frozen pheromone matrix.
///
/// Per-ant seeds come from the master RNG in order, so serial and parallel
/// construction yield the same ants.
fn construct_colony<R: Rng>(
    matrix: &DistanceMatrix,
    pheromone: &PheromoneMatrix,
    visibility: &Visibility,
    config: &AsConfig,
    rng: &mut R,
) -> Result<Vec<Ant>, TspError> {
    let seeds: Vec<u64> = (0..config.colony_size).map(|_| rng.random()).collect();
    let builder = TourBuilder::new(matrix, pheromone, visibility, config);

    if config.parallel {
        seeds
            .par_iter()
            .map(|&seed| builder.build(&mut create_rng(seed)))
            .collect()
    } else {
        seeds
            .iter()
            .map(|&seed| builder.build(&mut create_rng(seed)))
            .collect()
    }
}

/// Find the ant with the lowest cost; ties keep the earliest.
fn find_best(ants: &[Ant]) -> Option<&Ant> {
    ants.iter().reduce(|best, ant| if ant.cost < best.cost { ant } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::{DegeneratePolicy, DepositRule};
    use crate::instance::{random_points, Point};
    use crate::tour::{tour_cost, validate_tour};

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ])
    }

    fn random_instance(n: usize, seed: u64) -> DistanceMatrix {
        DistanceMatrix::from_points(&random_points(n, 100.0, &mut create_rng(seed)))
    }

    #[test]
    fn test_as_square_default_budget_finds_perimeter() {
        let m = square();
        let result = AsRunner::run(&m, &AsConfig::default().with_seed(42)).unwrap();
        assert!(
            (result.best_cost - 4.0).abs() < 1e-9,
            "expected perimeter, got {}",
            result.best_cost
        );
        validate_tour(&result.best, 4).unwrap();
    }

    #[test]
    fn test_as_square_edge_rule_finds_perimeter() {
        let m = square();
        let config = AsConfig::default()
            .with_deposit_rule(DepositRule::TraversedEdge)
            .with_seed(42);
        let result = AsRunner::run(&m, &config).unwrap();
        assert!((result.best_cost - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_as_single_node() {
        let m = DistanceMatrix::from_points(&[Point::new(3.0, 3.0)]);
        let result = AsRunner::run(&m, &AsConfig::default().with_seed(1)).unwrap();
        assert_eq!(result.best, vec![0]);
        assert_eq!(result.best_cost, 0.0);
    }

    #[test]
    fn test_as_two_nodes() {
        let m = DistanceMatrix::from_points(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
        let result = AsRunner::run(&m, &AsConfig::default().with_seed(1)).unwrap();
        assert!((result.best_cost - 10.0).abs() < 1e-12);
        validate_tour(&result.best, 2).unwrap();
    }

    #[test]
    fn test_as_cost_history_non_increasing() {
        let m = random_instance(15, 3);
        let config = AsConfig::default().with_iterations(40).with_seed(11);
        let result = AsRunner::run(&m, &config).unwrap();
        assert_eq!(result.cost_history.len(), 40);
        for window in result.cost_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
        assert_eq!(result.cost_history.last().copied(), Some(result.best_cost));
        assert!(result.best_iteration < 40);
    }

    #[test]
    fn test_as_best_cost_matches_tour() {
        let m = random_instance(12, 5);
        let result = AsRunner::run(&m, &AsConfig::default().with_iterations(20).with_seed(2)).unwrap();
        let recomputed = tour_cost(&m, &result.best).unwrap();
        assert!((recomputed - result.best_cost).abs() < 1e-9);
    }

    #[test]
    fn test_as_seeded_is_reproducible() {
        let m = random_instance(15, 8);
        let config = AsConfig::default().with_iterations(20).with_seed(99);
        let a = AsRunner::run(&m, &config).unwrap();
        let b = AsRunner::run(&m, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_as_parallel_matches_serial() {
        let m = random_instance(15, 21);
        let config = AsConfig::default().with_iterations(15).with_seed(5);
        let serial = AsRunner::run(&m, &config).unwrap();
        let parallel = AsRunner::run(&m, &config.clone().with_parallel(true)).unwrap();
        assert_eq!(serial.best, parallel.best);
        assert_eq!(serial.cost_history, parallel.cost_history);
    }

    #[test]
    fn test_as_full_evaporation_edge_rule_with_fallback() {
        let m = random_instance(10, 6);
        let config = AsConfig::default()
            .with_iterations(10)
            .with_evaporation(1.0)
            .with_deposit_rule(DepositRule::TraversedEdge)
            .with_degenerate(DegeneratePolicy::Uniform)
            .with_seed(3);
        let result = AsRunner::run(&m, &config).unwrap();
        validate_tour(&result.best, 10).unwrap();
    }

    #[test]
    fn test_as_degenerate_step_reaches_caller() {
        let m = random_instance(15, 6);
        let config = AsConfig::default()
            .with_evaporation(1.0)
            .with_deposit_rule(DepositRule::TraversedEdge)
            .with_seed(3);
        for parallel in [false, true] {
            let err = AsRunner::run(&m, &config.clone().with_parallel(parallel)).unwrap_err();
            assert!(
                matches!(err, TspError::DegenerateDistribution { .. }),
                "parallel = {parallel}: got {err:?}"
            );
        }
    }

    #[test]
    fn test_as_large_beta_on_ordinary_instance() {
        let m = random_instance(10, 1);
        for beta in [300.0, 800.0] {
            let config = AsConfig::default()
                .with_beta(beta)
                .with_iterations(2)
                .with_seed(1);
            let result = AsRunner::run(&m, &config).unwrap();
            validate_tour(&result.best, 10).unwrap();
        }
    }

    #[test]
    fn test_as_rejects_invalid_config() {
        let m = square();
        let err = AsRunner::run(&m, &AsConfig::default().with_evaporation(2.0)).unwrap_err();
        assert!(matches!(err, TspError::InvalidConfig(_)));
    }

    #[test]
    fn test_find_best_keeps_earliest_on_tie() {
        let ants = [
            Ant { tour: vec![0, 1], cost: 2.0 },
            Ant { tour: vec![1, 0], cost: 2.0 },
        ];
        assert_eq!(find_best(&ants).map(|a| a.tour.clone()), Some(vec![0, 1]));
        assert!(find_best(&[]).is_none());
    }
}

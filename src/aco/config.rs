//! AS configuration, deposit rules and degenerate-step policies.

use crate::error::TspError;

/// Which edges an ant reinforces after an iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DepositRule {
    /// Deposit on every edge `(i, j)` whose destination `j` the ant visited.
    ///
    /// Not the textbook rule: it reinforces edges the ant never traversed.
    #[default]
    VisitedNode,

    /// Deposit only on the edges of the ant's tour, in both directions.
    TraversedEdge,
}

/// What construction does when no unvisited node has a usable weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DegeneratePolicy {
    /// Return [`TspError::DegenerateDistribution`].
    #[default]
    Fail,

    /// Pick uniformly among the unvisited nodes.
    Uniform,
}

/// Configuration for the Ant System.
///
/// # Examples
///
/// ```
/// use tsp_heur::aco::{AsConfig, DepositRule};
///
/// let config = AsConfig::default()
///     .with_iterations(50)
///     .with_colony_size(10)
///     .with_beta(3.0)
///     .with_deposit_rule(DepositRule::TraversedEdge)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsConfig {
    /// Number of iterations. No convergence check.
    pub iterations: usize,

    /// Ants per iteration.
    pub colony_size: usize,

    /// Pheromone exponent. `0` ignores pheromone.
    pub alpha: f64,

    /// Heuristic (inverse distance) exponent. `0` ignores distance.
    pub beta: f64,

    /// Evaporation rate rho in `[0, 1]`.
    pub evaporation: f64,

    /// Deposit constant Q; an ant deposits `Q / cost`.
    pub deposit_constant: f64,

    /// Uniform pheromone level of every edge at the start of a run.
    pub initial_pheromone: f64,

    /// Edges reinforced by each ant.
    pub deposit_rule: DepositRule,

    /// Smallest distance used in `eta = 1 / d`. Coincident nodes are
    /// treated as this far apart.
    pub distance_floor: f64,

    /// Behaviour when a construction step has nothing to sample.
    pub degenerate: DegeneratePolicy,

    /// Build the ants of one iteration on the rayon thread pool.
    pub parallel: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AsConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            colony_size: 20,
            alpha: 1.0,
            beta: 5.0,
            evaporation: 0.5,
            deposit_constant: 100.0,
            initial_pheromone: 1.0,
            deposit_rule: DepositRule::default(),
            distance_floor: 1e-6,
            degenerate: DegeneratePolicy::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl AsConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_colony_size(mut self, n: usize) -> Self {
        self.colony_size = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation(mut self, rho: f64) -> Self {
        self.evaporation = rho;
        self
    }

    pub fn with_deposit_constant(mut self, q: f64) -> Self {
        self.deposit_constant = q;
        self
    }

    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    pub fn with_deposit_rule(mut self, rule: DepositRule) -> Self {
        self.deposit_rule = rule;
        self
    }

    pub fn with_distance_floor(mut self, floor: f64) -> Self {
        self.distance_floor = floor;
        self
    }

    pub fn with_degenerate(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TspError> {
        let invalid = |msg: String| Err(TspError::InvalidConfig(msg));
        if self.iterations == 0 {
            return invalid("iterations must be positive".into());
        }
        if self.colony_size == 0 {
            return invalid("colony_size must be positive".into());
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return invalid(format!("alpha must be finite and >= 0, got {}", self.alpha));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return invalid(format!("beta must be finite and >= 0, got {}", self.beta));
        }
        if !(0.0..=1.0).contains(&self.evaporation) {
            return invalid(format!(
                "evaporation must be in [0, 1], got {}",
                self.evaporation
            ));
        }
        if !self.deposit_constant.is_finite() || self.deposit_constant <= 0.0 {
            return invalid(format!(
                "deposit_constant must be finite and positive, got {}",
                self.deposit_constant
            ));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone <= 0.0 {
            return invalid(format!(
                "initial_pheromone must be finite and positive, got {}",
                self.initial_pheromone
            ));
        }
        if !self.distance_floor.is_finite() || self.distance_floor <= 0.0 {
            return invalid(format!(
                "distance_floor must be finite and positive, got {}",
                self.distance_floor
            ));
        }
        Ok(())
    }
}

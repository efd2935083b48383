//! Ant System (AS).
//!
//! A population-based constructive metaheuristic. In every iteration each
//! ant of the colony builds a complete tour node by node, choosing the next
//! node with probability proportional to `tau(i, j)^alpha * eta(i, j)^beta`
//! where `tau` is the pheromone level and `eta = 1 / d(i, j)`. Afterwards all
//! pheromone evaporates by a factor `(1 - rho)` and each ant reinforces
//! edges in proportion to `Q / cost`.
//!
//! # Deposit rule
//!
//! By default reinforcement follows [`DepositRule::VisitedNode`]: an ant
//! deposits on every edge `(i, j)` whose destination `j` it visited. Since
//! every ant visits every node this reinforces the whole matrix uniformly,
//! which differs from the textbook rule that only rewards traversed edges.
//! The textbook rule is available as [`DepositRule::TraversedEdge`].
//!
//! # Concurrency
//!
//! Ants of one iteration only read the pheromone matrix, so they can be
//! built in parallel (`AsConfig::parallel`). Each ant draws from its own RNG
//! seeded from the master stream, so a seeded run gives identical results
//! serially and in parallel.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"

mod config;
mod construction;
mod pheromone;
mod runner;
mod sampling;

pub use config::{AsConfig, DegeneratePolicy, DepositRule};
pub use construction::{Ant, TourBuilder, Visibility};
pub use pheromone::PheromoneMatrix;
pub use runner::{AsResult, AsRunner};
pub use sampling::{exp_shifted, normalize, sample_index};

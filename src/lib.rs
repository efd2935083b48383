//! Hill Climbing vs. Ant System on small Euclidean TSP instances.
//!
//! Two metaheuristics run against the same precomputed distance table:
//!
//! - **Hill Climbing (HC)**: single-solution local search that sweeps the
//!   full pairwise-swap neighborhood and applies every improving swap as
//!   soon as it is found.
//! - **Ant System (AS)**: population-based construction where each ant
//!   builds a tour by weighted random choice over pheromone and inverse
//!   distance, followed by evaporation and reinforcement.
//!
//! # Architecture
//!
//! Leaf modules ([`distance`], [`tour`], [`random`], [`instance`]) are
//! shared by both searches. Each algorithm lives in its own module with a
//! builder-style config and a stateless runner. [`compare`] times both
//! runners on one instance.
//!
//! # Example
//!
//! ```
//! use tsp_heur::distance::DistanceMatrix;
//! use tsp_heur::hc::{HcConfig, HcRunner};
//! use tsp_heur::instance::Point;
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(1.0, 0.0),
//! ];
//! let matrix = DistanceMatrix::from_points(&points);
//! let result = HcRunner::run(&matrix, &HcConfig::default().with_seed(7)).unwrap();
//! assert!((result.best_cost - 4.0).abs() < 1e-9);
//! ```

pub mod aco;
pub mod compare;
pub mod distance;
pub mod error;
pub mod hc;
pub mod instance;
pub mod random;
pub mod tour;

pub use error::TspError;

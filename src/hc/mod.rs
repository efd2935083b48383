//! Hill Climbing (HC).
//!
//! A single-solution local search over the pairwise-swap neighborhood.
//! Each iteration sweeps every unordered position pair of the tour the
//! sweep started from and adopts any candidate that beats the running
//! best. The run always spends its full iteration budget; reaching a local
//! optimum does not stop it.

mod config;
mod neighborhood;
mod runner;

pub use config::HcConfig;
pub use neighborhood::SwapPairs;
pub use runner::{HcResult, HcRunner};

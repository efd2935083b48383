//! Side-by-side runs of both searches on one instance.

use crate::aco::{AsConfig, AsResult, AsRunner};
use crate::distance::DistanceMatrix;
use crate::error::TspError;
use crate::hc::{HcConfig, HcResult, HcRunner};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::info;

/// A search result together with the wall-clock time it took.
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub result: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    fn measure<F>(f: F) -> Result<Self, TspError>
    where
        F: FnOnce() -> Result<T, TspError>,
    {
        let start = Instant::now();
        let result = f()?;
        Ok(Self {
            result,
            elapsed: start.elapsed(),
        })
    }
}

/// Outcome of running Hill Climbing and Ant System on the same instance.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub hill_climbing: Timed<HcResult>,
    pub ant_system: Timed<AsResult>,
}

impl Comparison {
    /// Runs HC, then AS, timing each call separately.
    pub fn run(
        matrix: &DistanceMatrix,
        hc: &HcConfig,
        ant: &AsConfig,
    ) -> Result<Self, TspError> {
        info!(nodes = matrix.len(), "starting hill climbing");
        let hill_climbing = Timed::measure(|| HcRunner::run(matrix, hc))?;
        info!(nodes = matrix.len(), "starting ant system");
        let ant_system = Timed::measure(|| AsRunner::run(matrix, ant))?;
        Ok(Self {
            hill_climbing,
            ant_system,
        })
    }

    /// Runs both searches at the same time on the rayon pool.
    ///
    /// They share only the read-only distance matrix. Each elapsed time
    /// still covers just its own search.
    pub fn run_concurrent(
        matrix: &DistanceMatrix,
        hc: &HcConfig,
        ant: &AsConfig,
    ) -> Result<Self, TspError> {
        let (hill_climbing, ant_system) = rayon::join(
            || Timed::measure(|| HcRunner::run(matrix, hc)),
            || Timed::measure(|| AsRunner::run(matrix, ant)),
        );
        Ok(Self {
            hill_climbing: hill_climbing?,
            ant_system: ant_system?,
        })
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Hill Climbing - Cost: {}, Time: {:.2} seconds",
            self.hill_climbing.result.best_cost,
            self.hill_climbing.elapsed.as_secs_f64()
        )?;
        write!(
            f,
            "Ant System - Cost: {}, Time: {:.2} seconds",
            self.ant_system.result.best_cost,
            self.ant_system.elapsed.as_secs_f64()
        )
    }
}

//! HC configuration.

use crate::error::TspError;

/// Configuration for Hill Climbing.
///
/// # Examples
///
/// ```
/// use tsp_heur::hc::HcConfig;
///
/// let config = HcConfig::default().with_max_iterations(200).with_seed(42);
/// assert_eq!(config.max_iterations, 200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcConfig {
    /// Number of full neighborhood sweeps. Always spent in full.
    pub max_iterations: usize,

    /// Random seed for the initial shuffle.
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            seed: None,
        }
    }
}

impl HcConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TspError> {
        if self.max_iterations == 0 {
            return Err(TspError::InvalidConfig(
                "max_iterations must be positive".into(),
            ));
        }
        Ok(())
    }
}

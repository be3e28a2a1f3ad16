//! SA configuration.

use crate::error::{check_grid_size, ConfigError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for simulated annealing on the magic cube.
///
/// Temperature follows a geometric schedule, `T_{k+1} = cooling_rate · T_k`,
/// applied once per iteration. The run ends when `T` drops to
/// `min_temperature`, so the iteration count is fixed by the schedule:
/// `⌈ln(min/initial) / ln(cooling_rate)⌉`, about 138 000 for the defaults.
///
/// # Examples
///
/// ```
/// use magicube::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.999)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaConfig {
    /// Cube edge length `n`.
    pub grid_size: usize,

    /// Starting temperature. Higher values accept more uphill moves early.
    pub initial_temperature: f64,

    /// Multiplicative cooling factor in (0, 1). Closer to 1 cools slower.
    pub cooling_rate: f64,

    /// The run stops once the temperature is at or below this value.
    pub min_temperature: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            initial_temperature: 100.0,
            cooling_rate: 0.9999,
            min_temperature: 1e-4,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_grid_size(mut self, n: usize) -> Self {
        self.grid_size = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        check_grid_size(self.grid_size)?;
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(ConfigError::InitialTemperature(self.initial_temperature));
        }
        if !(self.min_temperature > 0.0 && self.min_temperature < self.initial_temperature) {
            return Err(ConfigError::MinTemperature(self.min_temperature));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ConfigError::CoolingRate(self.cooling_rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert_eq!(config.grid_size, 5);
        assert!((config.initial_temperature - 100.0).abs() < 1e-10);
        assert!((config.cooling_rate - 0.9999).abs() < 1e-12);
        assert!((config.min_temperature - 1e-4).abs() < 1e-15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        assert_eq!(config.validate(), Err(ConfigError::InitialTemperature(-1.0)));
        let config = SaConfig::default().with_initial_temperature(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0);
        assert_eq!(config.validate(), Err(ConfigError::MinTemperature(20.0)));
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        for rate in [0.0, 1.0, 1.5, -0.3, f64::NAN] {
            let config = SaConfig::default().with_cooling_rate(rate);
            assert!(config.validate().is_err(), "rate {rate} accepted");
        }
    }

    #[test]
    fn test_validate_bad_grid_size() {
        let config = SaConfig::default().with_grid_size(0);
        assert_eq!(config.validate(), Err(ConfigError::GridSize(0)));
    }
}

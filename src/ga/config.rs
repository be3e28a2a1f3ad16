//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{check_grid_size, ConfigError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the genetic algorithm.
///
/// # Defaults
///
/// ```
/// use magicube::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.max_generations, 1000);
/// assert!((config.mutation_rate - 0.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Cube edge length `n`.
    pub grid_size: usize,

    /// Number of individuals per generation.
    pub population_size: usize,

    /// Maximum number of generations.
    pub max_generations: usize,

    /// Probability that a child receives one random swap.
    pub mutation_rate: f64,

    /// Score the population with rayon.
    pub parallel: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            population_size: 10,
            max_generations: 1000,
            mutation_rate: 0.1,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    pub fn with_grid_size(mut self, n: usize) -> Self {
        self.grid_size = n;
        self
    }

    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
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
    pub fn validate(&self) -> Result<()> {
        check_grid_size(self.grid_size)?;
        if self.population_size == 0 {
            return Err(ConfigError::PopulationSize);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroBudget("max_generations"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRate(self.mutation_rate));
        }
        Ok(())
    }
}

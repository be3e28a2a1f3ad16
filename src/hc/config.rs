//! Hill-climbing configurations.

use crate::error::{check_grid_size, ConfigError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Steepest-ascent hill climbing: take the best swap until none improves.
///
/// # Examples
///
/// ```
/// use magicube::hc::SteepestConfig;
///
/// let config = SteepestConfig::default().with_grid_size(3).with_seed(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SteepestConfig {
    /// Cube edge length `n`.
    pub grid_size: usize,

    /// Whether to score the neighbourhood in parallel using rayon.
    ///
    /// Results are identical either way.
    pub parallel: bool,

    /// Random seed for the starting cube.
    pub seed: Option<u64>,
}

impl Default for SteepestConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            parallel: true,
            seed: None,
        }
    }
}

impl SteepestConfig {
    pub fn with_grid_size(mut self, n: usize) -> Self {
        self.grid_size = n;
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

    pub fn validate(&self) -> Result<()> {
        check_grid_size(self.grid_size)
    }
}

/// Stochastic hill climbing: sample random swaps, keep only improvements.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StochasticConfig {
    /// Cube edge length `n`.
    pub grid_size: usize,

    /// Number of random swaps to sample. Non-improving samples are undone
    /// and do not end the run.
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for StochasticConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            max_iterations: 200,
            seed: None,
        }
    }
}

impl StochasticConfig {
    pub fn with_grid_size(mut self, n: usize) -> Self {
        self.grid_size = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_grid_size(self.grid_size)?;
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroBudget("max_iterations"));
        }
        Ok(())
    }
}

/// Steepest ascent that also walks across plateaus.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SidewaysConfig {
    /// Cube edge length `n`.
    pub grid_size: usize,

    /// Consecutive equal-score moves allowed before stopping. Any strict
    /// improvement resets the count.
    pub max_sideways: usize,

    /// Whether to score the neighbourhood in parallel using rayon.
    pub parallel: bool,

    /// Random seed for the starting cube.
    pub seed: Option<u64>,
}

impl Default for SidewaysConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            max_sideways: 50,
            parallel: true,
            seed: None,
        }
    }
}

impl SidewaysConfig {
    pub fn with_grid_size(mut self, n: usize) -> Self {
        self.grid_size = n;
        self
    }

    pub fn with_max_sideways(mut self, n: usize) -> Self {
        self.max_sideways = n;
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

    pub fn validate(&self) -> Result<()> {
        check_grid_size(self.grid_size)
    }
}

/// Repeated steepest ascent from fresh random cubes.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RandomRestartConfig {
    /// Cube edge length `n`.
    pub grid_size: usize,

    /// Number of independent climbs.
    pub restarts: usize,

    /// Whether to score the neighbourhood in parallel using rayon.
    pub parallel: bool,

    /// Random seed; restarts draw their cubes from one seeded stream.
    pub seed: Option<u64>,
}

impl Default for RandomRestartConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            restarts: 5,
            parallel: true,
            seed: None,
        }
    }
}

impl RandomRestartConfig {
    pub fn with_grid_size(mut self, n: usize) -> Self {
        self.grid_size = n;
        self
    }

    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
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

    pub fn validate(&self) -> Result<()> {
        check_grid_size(self.grid_size)?;
        if self.restarts == 0 {
            return Err(ConfigError::ZeroBudget("restarts"));
        }
        Ok(())
    }
}

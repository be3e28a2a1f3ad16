//! Configuration errors.
//!
//! The solvers perform no I/O, so the only failure modes are a configuration
//! that cannot be run and an algorithm name that cannot be parsed.
//! Cancellation and local optima are reported on the result records, never
//! as errors.

use thiserror::Error;

/// Smallest grid edge the solvers accept. A 1×1×1 cube has no swap moves.
pub const MIN_GRID_SIZE: usize = 2;

/// Largest grid edge the solvers accept. Keeps `n³` within `u32` and line
/// sums far away from `i64` overflow.
pub const MAX_GRID_SIZE: usize = 100;

/// Invalid solver configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size must be in {MIN_GRID_SIZE}..={MAX_GRID_SIZE}, got {0}")]
    GridSize(usize),

    #[error("population size must be positive")]
    PopulationSize,

    #[error("mutation rate must be a finite value in [0, 1], got {0}")]
    MutationRate(f64),

    #[error("initial temperature must be positive and finite, got {0}")]
    InitialTemperature(f64),

    #[error("min temperature must be positive and below the initial temperature, got {0}")]
    MinTemperature(f64),

    #[error("cooling rate must be in (0, 1), got {0}")]
    CoolingRate(f64),

    #[error("{0} must be positive")]
    ZeroBudget(&'static str),

    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),
}

/// Result alias for configuration validation.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Checks the grid edge shared by every solver configuration.
pub(crate) fn check_grid_size(n: usize) -> Result<()> {
    if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&n) {
        Ok(())
    } else {
        Err(ConfigError::GridSize(n))
    }
}

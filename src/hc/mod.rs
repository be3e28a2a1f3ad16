//! Hill climbing over single-swap neighbourhoods.
//!
//! Four variants share the same neighbourhood and objective:
//!
//! - [`SteepestRunner`]: scan all `C(n³, 2)` swaps, take the best while it
//!   strictly improves
//! - [`StochasticRunner`]: sample random swaps, keep strict improvements,
//!   stop after a fixed budget
//! - [`SidewaysRunner`]: steepest ascent that also accepts equal-score
//!   moves, up to `max_sideways` in a row
//! - [`RandomRestartRunner`]: independent steepest climbs from fresh cubes
//!
//! The exhaustive scan breaks ties in favour of the first pair in flat
//! `(x, y, z)` order, so seeded runs are reproducible with or without rayon.

mod config;
mod restart;
mod result;
mod sideways;
mod steepest;
mod stochastic;

pub use config::{RandomRestartConfig, SidewaysConfig, SteepestConfig, StochasticConfig};
pub use restart::RandomRestartRunner;
pub use result::{HillClimbResult, RandomRestartResult};
pub use sideways::SidewaysRunner;
pub use steepest::SteepestRunner;
pub use stochastic::StochasticRunner;

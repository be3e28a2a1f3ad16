//! Search engine for the n×n×n magic cube.
//!
//! Places `1..=n³` in an `n×n×n` grid so that every row, column, pillar,
//! planar diagonal and space diagonal sums to `n(n³+1)/2`. The
//! [`Objective`] measures how far an arrangement is from that; the solvers
//! drive it towards zero:
//!
//! - **Simulated Annealing (SA)**: random swaps under a geometric cooling
//!   schedule with Metropolis acceptance.
//! - **Hill Climbing (HC)**: steepest ascent over all swaps, stochastic
//!   sampling, sideways moves across plateaus, and random restarts.
//! - **Genetic Algorithm (GA)**: roulette selection, ordered crossover on
//!   the flattened cube, swap mutation.
//!
//! # Architecture
//!
//! The cube model ([`cube`]) is shared by every solver. Each solver family
//! has its own config and runner; [`engine`] puts them behind one
//! [`Algorithm`] enum for control surfaces. Runs are cooperative: a cloned
//! [`RunControl`] pauses, resumes or cancels them from another thread, and a
//! [`SearchObserver`] receives every recorded state for visualization.
//! Events are emitted through `tracing`; no subscriber is installed here.
//!
//! ```
//! use magicube::sa::{SaConfig, SaRunner};
//!
//! let config = SaConfig::default()
//!     .with_grid_size(3)
//!     .with_cooling_rate(0.99)
//!     .with_seed(42);
//! let result = SaRunner::run(&config).unwrap();
//! assert!(result.best.is_permutation());
//! ```

pub mod control;
pub mod cube;
pub mod engine;
pub mod error;
pub mod ga;
pub mod hc;
pub mod history;
pub mod random;
pub mod sa;

pub use control::{RunControl, StopReason};
pub use cube::{CubeState, Move, Objective, Position};
pub use engine::{run_algorithm, Algorithm, Diagnostics, RunReport};
pub use error::{ConfigError, Result};
pub use history::{HistoryEntry, NoopObserver, SearchObserver, Trajectory};

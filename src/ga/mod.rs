//! Genetic algorithm over cube permutations.
//!
//! A fixed-size population of random cubes evolves by roulette-wheel
//! selection, ordered crossover on the flattened cell vector, and swap
//! mutation. Offspring replace their parents wholesale each generation; the
//! best cube ever seen is tracked separately and is the run's result.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, generation budget, mutation rate
//! - [`GaRunner`]: executes the generational loop
//! - [`GaResult`]: best cube, per-generation best trace, final population
//!
//! # Submodules
//!
//! - [`operators`]: ordered crossover and swap mutation
//! - [`selection`]: inverse-score roulette wheel
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
pub mod operators;
mod runner;
pub mod selection;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};

//! Simulated Annealing (SA).
//!
//! A single-solution trajectory search over random swaps. Worsening swaps
//! are accepted with probability `e^(−Δ/T)`, and the temperature `T` decays
//! geometrically each iteration, so the search drifts from exploration to
//! pure descent.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};

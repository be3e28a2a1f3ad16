//! Cube representation, objective, and neighbourhood.
//!
//! - [`CubeState`]: the `n×n×n` permutation grid
//! - [`Objective`]: magic constant and deviation score over all required lines
//! - [`random_swap`] / [`best_neighbor`]: single-swap moves

mod moves;
mod objective;
mod state;

pub use moves::{all_pairs, best_neighbor, random_swap, Move, Neighbor};
pub use objective::{line_count, magic_constant, Objective};
pub use state::{cell_count, CubeState, Position};

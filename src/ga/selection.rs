//! Parent selection.
//!
//! Fitness-proportionate (roulette wheel) selection for minimisation. Each
//! individual gets weight `1 / (1 + score)`, so a solved cube has weight 1
//! and worse cubes shrink towards 0 without ever being excluded.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1

use rand::Rng;

/// Normalised selection probabilities for a scored population.
pub fn roulette_weights(scores: &[u64]) -> Vec<f64> {
    let raw: Vec<f64> = scores.iter().map(|&s| 1.0 / (1.0 + s as f64)).collect();
    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|w| w / total).collect()
}

/// Draws one index from normalised `weights`.
///
/// Walks the cumulative distribution and returns the first index whose
/// cumulative weight reaches the draw. Falls back to the last index when
/// rounding leaves the total just below the draw.
///
/// # Panics
/// Panics if `weights` is empty.
pub fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    assert!(!weights.is_empty(), "cannot select from empty population");

    let r: f64 = rng.random();
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if r <= cumulative {
            return i;
        }
    }

    weights.len() - 1 // floating-point fallback
}

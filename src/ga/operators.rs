//! Permutation-preserving genetic operators on flattened cubes.
//!
//! Both operators work on the flat cell slice of a [`CubeState`], so any
//! child they produce is again a permutation of `1..=n³`.
//!
//! - [`ordered_crossover`]: copy a random slice from one parent, fill the
//!   rest from the other in its order
//! - [`swap_mutation`]: exchange two random cells

use crate::cube::CubeState;
use rand::Rng;

/// Ordered crossover over the flattened representation.
///
/// Picks a random half-open range `[start, end)` of flat indices. Child 1
/// takes that slice verbatim from `parent1`; its remaining positions are
/// filled front to back with `parent2`'s values in `parent2`'s order,
/// skipping values already present. Child 2 is built the same way with the
/// parents swapped. The range may be empty, in which case each child is a
/// copy of its donor parent.
///
/// # Panics
/// Panics if the parents have different sizes.
pub fn ordered_crossover<R: Rng>(
    parent1: &CubeState,
    parent2: &CubeState,
    rng: &mut R,
) -> (CubeState, CubeState) {
    assert_eq!(
        parent1.size(),
        parent2.size(),
        "parents must have equal size"
    );
    let len = parent1.len();
    let start = rng.random_range(0..len);
    let end = start + rng.random_range(0..len - start);

    let child1 = build_child(parent1.cells(), parent2.cells(), start, end);
    let child2 = build_child(parent2.cells(), parent1.cells(), start, end);

    (
        CubeState::from_raw(parent1.size(), child1),
        CubeState::from_raw(parent1.size(), child2),
    )
}

/// Builds one child: copy `[start, end)` from `template`, fill from `donor`.
fn build_child(template: &[u32], donor: &[u32], start: usize, end: usize) -> Vec<u32> {
    let len = template.len();
    let mut child = vec![0u32; len];
    // Values are 1..=len, so value v is tracked at index v - 1.
    let mut present = vec![false; len];

    for i in start..end {
        child[i] = template[i];
        present[template[i] as usize - 1] = true;
    }

    let mut fill = donor.iter().copied().filter(|&v| !present[v as usize - 1]);
    for (i, slot) in child.iter_mut().enumerate() {
        if (start..end).contains(&i) {
            continue;
        }
        if let Some(v) = fill.next() {
            *slot = v;
        }
    }

    child
}

/// With probability `rate`, swaps two uniformly random cells.
///
/// The two indices are drawn independently and may coincide.
pub fn swap_mutation<R: Rng>(cube: &mut CubeState, rate: f64, rng: &mut R) {
    if rng.random::<f64>() >= rate {
        return;
    }
    let len = cube.len();
    let i = rng.random_range(0..len);
    let j = rng.random_range(0..len);
    cube.swap_indices(i, j);
}

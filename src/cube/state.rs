//! The cube grid and the operations that keep it a permutation.

use crate::random::shuffle;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell coordinate `(x, y, z)`, each in `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Position {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

/// An `n×n×n` arrangement of the integers `1..=n³`.
///
/// Cells are stored flat in row-major `(x, y, z)` order, so the cell at
/// `(x, y, z)` lives at `(x * n + y) * n + z`. Every public mutator is a
/// swap, which keeps the grid a permutation for its whole life.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubeState {
    n: usize,
    cells: Vec<u32>,
}

impl CubeState {
    /// Uniformly random arrangement of `1..=n³`.
    ///
    /// # Panics
    /// Panics if `n³` does not fit in `u32`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut cells: Vec<u32> = (1..=max_value(n)).collect();
        shuffle(&mut cells, rng);
        Self { n, cells }
    }

    /// Cells `1, 2, ..., n³` in flat order. Mostly useful in tests.
    ///
    /// # Panics
    /// Panics if `n³` does not fit in `u32`.
    pub fn ordered(n: usize) -> Self {
        Self {
            n,
            cells: (1..=max_value(n)).collect(),
        }
    }

    /// Builds a state from flat cell values.
    ///
    /// Returns `None` unless `cells` is a permutation of `1..=n³`.
    pub fn from_cells(n: usize, cells: Vec<u32>) -> Option<Self> {
        let state = Self { n, cells };
        state.is_permutation().then_some(state)
    }

    /// Edge length `n`.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of cells, `n³`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat view of all cells in `(x, y, z)` row-major order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn index_of(&self, p: Position) -> usize {
        (p.x * self.n + p.y) * self.n + p.z
    }

    pub fn position_of(&self, index: usize) -> Position {
        let n = self.n;
        Position::new(index / (n * n), (index / n) % n, index % n)
    }

    pub fn get(&self, p: Position) -> u32 {
        self.cells[self.index_of(p)]
    }

    /// Exchanges the values at two positions.
    pub fn swap(&mut self, a: Position, b: Position) {
        let (i, j) = (self.index_of(a), self.index_of(b));
        self.cells.swap(i, j);
    }

    /// Exchanges the values at two flat indices.
    pub fn swap_indices(&mut self, i: usize, j: usize) {
        self.cells.swap(i, j);
    }

    /// True when the cells hold each of `1..=n³` exactly once.
    pub fn is_permutation(&self) -> bool {
        let total = cell_count(self.n);
        if self.cells.len() != total {
            return false;
        }
        let mut seen = vec![false; total + 1];
        for &v in &self.cells {
            let v = v as usize;
            if v == 0 || v > total || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }

    /// Wraps cells that the caller already knows form a permutation.
    pub(crate) fn from_raw(n: usize, cells: Vec<u32>) -> Self {
        let state = Self { n, cells };
        debug_assert!(state.is_permutation());
        state
    }
}

/// `n³`.
pub fn cell_count(n: usize) -> usize {
    n * n * n
}

/// Largest cell value, `n³`, as stored.
fn max_value(n: usize) -> u32 {
    match n.checked_pow(3).and_then(|c| u32::try_from(c).ok()) {
        Some(v) => v,
        None => panic!("grid size {n} is too large: n³ must fit in u32"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    #[test]
    fn test_max_value_bounds() {
        assert_eq!(max_value(5), 125);
        assert_eq!(max_value(1625), 1625 * 1625 * 1625);
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_max_value_overflow_panics() {
        max_value(1626);
    }

    #[test]
    fn test_random_is_permutation() {
        let mut rng = create_rng(42);
        for n in 2..=6 {
            let cube = CubeState::random(n, &mut rng);
            assert_eq!(cube.len(), n * n * n);
            assert!(cube.is_permutation(), "n={n} produced {:?}", cube.cells());
        }
    }

    #[test]
    fn test_random_seeded_is_reproducible() {
        let a = CubeState::random(5, &mut create_rng(11));
        let b = CubeState::random(5, &mut create_rng(11));
        let c = CubeState::random(5, &mut create_rng(12));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_index_layout_is_row_major() {
        let cube = CubeState::ordered(3);
        assert_eq!(cube.get(Position::new(0, 0, 0)), 1);
        assert_eq!(cube.get(Position::new(0, 0, 1)), 2);
        assert_eq!(cube.get(Position::new(0, 1, 0)), 4);
        assert_eq!(cube.get(Position::new(1, 0, 0)), 10);
        assert_eq!(cube.get(Position::new(2, 2, 2)), 27);
    }

    #[test]
    fn test_position_roundtrip() {
        let cube = CubeState::ordered(4);
        for i in 0..cube.len() {
            assert_eq!(cube.index_of(cube.position_of(i)), i);
        }
    }

    #[test]
    fn test_from_cells_rejects_duplicates_and_gaps() {
        assert!(CubeState::from_cells(2, vec![1, 2, 3, 4, 5, 6, 7, 8]).is_some());
        assert!(CubeState::from_cells(2, vec![1, 1, 3, 4, 5, 6, 7, 8]).is_none());
        assert!(CubeState::from_cells(2, vec![0, 2, 3, 4, 5, 6, 7, 8]).is_none());
        assert!(CubeState::from_cells(2, vec![1, 2, 3, 4, 5, 6, 7, 9]).is_none());
        assert!(CubeState::from_cells(2, vec![1, 2, 3]).is_none());
    }

    #[test]
    fn test_swap_exchanges_values() {
        let mut cube = CubeState::ordered(3);
        let a = Position::new(0, 0, 0);
        let b = Position::new(2, 1, 0);
        let (va, vb) = (cube.get(a), cube.get(b));
        cube.swap(a, b);
        assert_eq!(cube.get(a), vb);
        assert_eq!(cube.get(b), va);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = CubeState::ordered(3);
        let mut copy = original.clone();
        copy.swap_indices(0, 1);
        assert_ne!(original, copy);
        assert_eq!(original, CubeState::ordered(3));
    }

    proptest! {
        #[test]
        fn prop_swap_twice_is_identity(seed in any::<u64>(), a in 0usize..64, b in 0usize..64) {
            let original = CubeState::random(4, &mut create_rng(seed));
            let mut cube = original.clone();
            let (pa, pb) = (cube.position_of(a), cube.position_of(b));
            cube.swap(pa, pb);
            cube.swap(pa, pb);
            prop_assert_eq!(cube, original);
        }

        #[test]
        fn prop_swaps_preserve_permutation(
            seed in any::<u64>(),
            swaps in proptest::collection::vec((0usize..125, 0usize..125), 0..200),
        ) {
            let mut cube = CubeState::random(5, &mut create_rng(seed));
            for (i, j) in swaps {
                cube.swap_indices(i, j);
            }
            prop_assert!(cube.is_permutation());
        }
    }
}

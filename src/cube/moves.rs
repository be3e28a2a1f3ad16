//! Swap moves and neighbourhood enumeration.
//!
//! A neighbour is any state one pairwise swap away. The full neighbourhood
//! of an `n`-cube has `C(n³, 2)` members: 7750 for `n = 5`.

use super::objective::Objective;
use super::state::{CubeState, Position};
use rand::Rng;
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An unordered pair of positions whose values were exchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub a: Position,
    pub b: Position,
}

impl Move {
    pub fn new(a: Position, b: Position) -> Self {
        Self { a, b }
    }

    /// Applies the swap. Applying it twice restores the cube.
    pub fn apply(&self, cube: &mut CubeState) {
        cube.swap(self.a, self.b);
    }
}

/// Best single-swap neighbour of a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub mv: Move,
    pub score: u64,
}

/// Swaps two distinct, uniformly chosen cells in place and returns the move.
///
/// Draws are resampled until the two cells differ.
///
/// # Panics
/// Panics if the cube has fewer than two cells.
pub fn random_swap<R: Rng>(cube: &mut CubeState, rng: &mut R) -> Move {
    let len = cube.len();
    assert!(len >= 2, "random_swap needs at least two cells, got {len}");
    let (i, j) = loop {
        let i = rng.random_range(0..len);
        let j = rng.random_range(0..len);
        if i != j {
            break (i, j);
        }
    };
    cube.swap_indices(i, j);
    Move::new(cube.position_of(i), cube.position_of(j))
}

/// Every unordered pair `(i, j)` with `i < j` of flat indices in `0..cells`.
///
/// Flat index order is `(x, y, z)` row-major, so the sequence matches a
/// nested `x1, y1, z1, x2, y2, z2` loop restricted to the upper triangle.
pub fn all_pairs(cells: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..cells).flat_map(move |i| (i + 1..cells).map(move |j| (i, j)))
}

/// Scores every single-swap neighbour and returns the lowest-scoring one.
///
/// Ties go to the pair that comes first in [`all_pairs`] order, whether or
/// not the scan runs in parallel. Returns `None` only for cubes with fewer
/// than two cells. The caller decides whether the neighbour is acceptable.
pub fn best_neighbor(cube: &CubeState, objective: &Objective, parallel: bool) -> Option<Neighbor> {
    let len = cube.len();

    let best = if parallel {
        (0..len)
            .into_par_iter()
            .map_init(
                || cube.clone(),
                |work, i| scan_row(work, objective, i),
            )
            .flatten()
            .min()
    } else {
        let mut work = cube.clone();
        all_pairs(len)
            .map(|(i, j)| (swap_score(&mut work, objective, i, j), i, j))
            .min()
    };

    best.map(|(score, i, j)| Neighbor {
        mv: Move::new(cube.position_of(i), cube.position_of(j)),
        score,
    })
}

/// Best `(score, i, j)` over all `j > i`, first `j` winning ties.
///
/// `work` is swapped and restored, so it is unchanged on return.
fn scan_row(work: &mut CubeState, objective: &Objective, i: usize) -> Option<(u64, usize, usize)> {
    let mut best: Option<(u64, usize, usize)> = None;
    for j in i + 1..work.len() {
        let score = swap_score(work, objective, i, j);
        if best.is_none_or(|(s, _, _)| score < s) {
            best = Some((score, i, j));
        }
    }
    best
}

/// Score of `work` with cells `i` and `j` exchanged; `work` is restored.
fn swap_score(work: &mut CubeState, objective: &Objective, i: usize, j: usize) -> u64 {
    work.swap_indices(i, j);
    let score = objective.score(work);
    work.swap_indices(i, j);
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_swap_changes_exactly_two_cells() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let before = CubeState::random(3, &mut rng);
            let mut after = before.clone();
            let mv = random_swap(&mut after, &mut rng);
            assert_ne!(mv.a, mv.b);
            let diff = before
                .cells()
                .iter()
                .zip(after.cells())
                .filter(|(x, y)| x != y)
                .count();
            assert_eq!(diff, 2);
            assert_eq!(after.get(mv.a), before.get(mv.b));
            assert_eq!(after.get(mv.b), before.get(mv.a));
        }
    }

    #[test]
    fn test_random_swap_on_smallest_cube() {
        let mut rng = create_rng(7);
        let mut cube = CubeState::ordered(2);
        for _ in 0..50 {
            random_swap(&mut cube, &mut rng);
            assert!(cube.is_permutation());
        }
    }

    #[test]
    #[should_panic(expected = "at least two cells")]
    fn test_random_swap_rejects_single_cell() {
        let mut cube = CubeState::ordered(1);
        random_swap(&mut cube, &mut create_rng(1));
    }

    #[test]
    fn test_move_apply_twice_restores() {
        let original = CubeState::random(4, &mut create_rng(5));
        let mut cube = original.clone();
        let mv = Move::new(Position::new(0, 1, 2), Position::new(3, 3, 0));
        mv.apply(&mut cube);
        assert_ne!(cube, original);
        mv.apply(&mut cube);
        assert_eq!(cube, original);
    }

    #[test]
    fn test_all_pairs_count_and_order() {
        assert_eq!(all_pairs(125).count(), 125 * 124 / 2);
        let pairs: Vec<_> = all_pairs(4).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert_eq!(all_pairs(1).count(), 0);
        assert_eq!(all_pairs(0).count(), 0);
    }

    fn brute_force_best(cube: &CubeState, objective: &Objective) -> (u64, usize, usize) {
        let mut best = (u64::MAX, 0, 0);
        for (i, j) in all_pairs(cube.len()) {
            let mut work = cube.clone();
            work.swap_indices(i, j);
            let s = objective.score(&work);
            if s < best.0 {
                best = (s, i, j);
            }
        }
        best
    }

    #[test]
    fn test_best_neighbor_matches_brute_force() {
        let mut rng = create_rng(42);
        let objective = Objective::new(3);
        for _ in 0..5 {
            let cube = CubeState::random(3, &mut rng);
            let (score, i, j) = brute_force_best(&cube, &objective);
            let found = best_neighbor(&cube, &objective, false).expect("neighbour exists");
            assert_eq!(found.score, score);
            assert_eq!(found.mv.a, cube.position_of(i));
            assert_eq!(found.mv.b, cube.position_of(j));
        }
    }

    #[test]
    fn test_best_neighbor_parallel_equals_sequential() {
        let mut rng = create_rng(9);
        let objective = Objective::new(3);
        for _ in 0..5 {
            let cube = CubeState::random(3, &mut rng);
            assert_eq!(
                best_neighbor(&cube, &objective, true),
                best_neighbor(&cube, &objective, false)
            );
        }
    }

    #[test]
    fn test_best_neighbor_leaves_cube_untouched() {
        let cube = CubeState::random(3, &mut create_rng(1));
        let copy = cube.clone();
        let objective = Objective::new(3);
        best_neighbor(&cube, &objective, false);
        assert_eq!(cube, copy);
    }
}

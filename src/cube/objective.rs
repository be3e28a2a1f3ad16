//! Magic constant and deviation score.
//!
//! A cube is scored against every line a magic cube must satisfy:
//!
//! - `3·n²` axis lines (rows, columns, pillars)
//! - `6·n` planar diagonals: two per slice, `n` slices, three orientations
//! - `4` space diagonals joining opposite corners
//!
//! The score is the sum of `|line sum − magic constant|` over all of them.
//! Zero means the cube is magic.

use super::state::CubeState;

/// Required sum of every line: `n·(n³+1)/2`.
pub fn magic_constant(n: usize) -> u64 {
    let n = n as u64;
    n * (n * n * n + 1) / 2
}

/// Number of lines checked for an edge of `n`.
pub fn line_count(n: usize) -> usize {
    3 * n * n + 6 * n + 4
}

/// Precomputed line table for one grid size.
///
/// Built once per run; [`score`](Self::score) is then a pure function of
/// the cube values.
#[derive(Debug, Clone)]
pub struct Objective {
    n: usize,
    magic: i64,
    /// Flat cell indices, `n` per line.
    lines: Vec<usize>,
}

impl Objective {
    pub fn new(n: usize) -> Self {
        let lines = build_lines(n);
        debug_assert_eq!(lines.len(), line_count(n) * n);
        Self {
            n,
            magic: magic_constant(n) as i64,
            lines,
        }
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn magic_constant(&self) -> u64 {
        self.magic as u64
    }

    /// Iterates over lines as slices of flat cell indices.
    pub fn lines(&self) -> impl Iterator<Item = &[usize]> {
        // chunks_exact panics on a zero chunk size.
        self.lines.chunks_exact(self.n.max(1))
    }

    /// Total absolute deviation of `cube` from the magic constant.
    pub fn score(&self, cube: &CubeState) -> u64 {
        debug_assert_eq!(cube.size(), self.n);
        let cells = cube.cells();
        self.lines()
            .map(|line| {
                let sum: i64 = line.iter().map(|&i| cells[i] as i64).sum();
                (sum - self.magic).unsigned_abs()
            })
            .sum()
    }
}

/// Enumerates every required line as flat indices.
fn build_lines(n: usize) -> Vec<usize> {
    let idx = |x: usize, y: usize, z: usize| (x * n + y) * n + z;
    let mut lines = Vec::with_capacity(line_count(n) * n);
    let rev = |i: usize| n - 1 - i;

    // Axis lines: along z, along y, along x.
    for a in 0..n {
        for b in 0..n {
            lines.extend((0..n).map(|i| idx(a, b, i)));
            lines.extend((0..n).map(|i| idx(a, i, b)));
            lines.extend((0..n).map(|i| idx(i, a, b)));
        }
    }

    // Planar diagonals, two per slice in each orientation.
    for s in 0..n {
        lines.extend((0..n).map(|i| idx(s, i, i)));
        lines.extend((0..n).map(|i| idx(s, i, rev(i))));
        lines.extend((0..n).map(|i| idx(i, s, i)));
        lines.extend((0..n).map(|i| idx(rev(i), s, i)));
        lines.extend((0..n).map(|i| idx(i, i, s)));
        lines.extend((0..n).map(|i| idx(i, rev(i), s)));
    }

    // Space diagonals.
    lines.extend((0..n).map(|i| idx(i, i, i)));
    lines.extend((0..n).map(|i| idx(i, i, rev(i))));
    lines.extend((0..n).map(|i| idx(i, rev(i), i)));
    lines.extend((0..n).map(|i| idx(rev(i), i, i)));

    lines
}

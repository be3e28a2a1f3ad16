use crate::control::StopReason;
use crate::cube::CubeState;
use crate::history::Trajectory;
use std::time::Duration;

/// Result of a single hill-climbing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HillClimbResult {
    /// The best cube found.
    pub best: CubeState,

    /// Score of the best cube.
    pub best_score: u64,

    /// Per-iteration score trace.
    ///
    /// Steepest and sideways climbs push the score of every committed move;
    /// stochastic climbing pushes the score of every sampled move, kept or not.
    pub scores: Vec<u64>,

    /// Length of `scores`.
    pub iterations: usize,

    /// Moves committed to the current cube.
    pub accepted_moves: usize,

    /// Equal-score moves taken. Always zero outside sideways climbing.
    pub sideways_moves: usize,

    /// Initial state followed by every committed state.
    pub trajectory: Trajectory,

    pub stop: StopReason,

    pub elapsed: Duration,
}

/// Result of a random-restart run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RandomRestartResult {
    /// Best cube over all restarts.
    pub best: CubeState,

    /// Score of the best cube.
    pub best_score: u64,

    /// Concatenated score traces of all restarts.
    pub scores: Vec<u64>,

    /// Number of entries each restart contributed to `scores`, in order.
    pub per_restart_iterations: Vec<usize>,

    /// Final score of each restart, in order.
    pub restart_scores: Vec<u64>,

    /// Length of `scores`.
    pub iterations: usize,

    /// Each restart's initial state followed by its committed states.
    pub trajectory: Trajectory,

    pub stop: StopReason,

    pub elapsed: Duration,
}

impl RandomRestartResult {
    /// Splits `scores` into one slice per restart.
    pub fn segments(&self) -> Vec<&[u64]> {
        let mut rest = self.scores.as_slice();
        self.per_restart_iterations
            .iter()
            .map(|&len| {
                let (head, tail) = rest.split_at(len);
                rest = tail;
                head
            })
            .collect()
    }
}

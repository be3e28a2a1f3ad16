//! Run trajectory and the observer hook for live consumers.
//!
//! Every strategy records the states it commits to, in order, together with
//! the swap that produced each one. The trajectory is returned with the
//! result for playback; a [`SearchObserver`] sees the same entries as they
//! happen.

use crate::control::RunControl;
use crate::cube::{CubeState, Move};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One recorded state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryEntry {
    /// Snapshot of the cube after the move.
    pub state: CubeState,
    /// The last swap applied before this state was recorded. `None` for a
    /// starting state or a state that came out of recombination. Only the
    /// hill climbers record every committed state, so only their entries are
    /// always exactly one swap apart.
    pub mv: Option<Move>,
    /// Deviation score of `state`.
    pub score: u64,
}

/// Append-only, insertion-ordered list of recorded states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trajectory {
    entries: Vec<HistoryEntry>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn first(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Scores of the recorded states, in order.
    pub fn scores(&self) -> Vec<u64> {
        self.entries.iter().map(|e| e.score).collect()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Receives recorded states as a run progresses.
///
/// This is the hook for a visualization sink. Calls are fire-and-forget and
/// happen on the solver thread, so implementations should return quickly.
/// Closures taking `&HistoryEntry` implement this trait.
pub trait SearchObserver {
    fn on_record(&mut self, entry: &HistoryEntry);
}

impl<F: FnMut(&HistoryEntry)> SearchObserver for F {
    fn on_record(&mut self, entry: &HistoryEntry) {
        self(entry)
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_record(&mut self, _entry: &HistoryEntry) {}
}

/// Writes entries to the trajectory and forwards them to the observer.
pub(crate) struct Recorder<'a> {
    control: &'a RunControl,
    observer: &'a mut dyn SearchObserver,
    trajectory: Trajectory,
}

impl<'a> Recorder<'a> {
    pub(crate) fn new(control: &'a RunControl, observer: &'a mut dyn SearchObserver) -> Self {
        Self {
            control,
            observer,
            trajectory: Trajectory::new(),
        }
    }

    /// Records a starting state. No pacing delay.
    pub(crate) fn start(&mut self, state: &CubeState, score: u64) {
        self.push(state, None, score);
    }

    /// Records a committed state, then applies the pacing delay.
    pub(crate) fn record(&mut self, state: &CubeState, mv: Option<Move>, score: u64) {
        self.push(state, mv, score);
        self.control.pace();
    }

    pub(crate) fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }

    fn push(&mut self, state: &CubeState, mv: Option<Move>, score: u64) {
        let entry = HistoryEntry {
            state: state.clone(),
            mv,
            score,
        };
        self.observer.on_record(&entry);
        self.trajectory.push(entry);
    }
}

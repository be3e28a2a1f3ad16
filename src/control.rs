//! Cooperative pause/resume/cancel control for a running search.
//!
//! A [`RunControl`] is a cheap handle around two shared flags. The solver
//! thread polls it once per outer iteration; any clone of the handle (for
//! example one held by a UI thread) may flip the flags at any time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// How long a paused run sleeps between checks of the flags.
pub const PAUSE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The strategy's own convergence test fired: temperature threshold,
    /// local optimum, or sideways limit.
    Converged,
    /// A fixed iteration, generation, or restart budget ran out.
    BudgetExhausted,
    /// A perfect cube (score 0) was found.
    Solved,
    /// The run was cancelled through its [`RunControl`].
    Cancelled,
}

impl StopReason {
    pub fn is_cancelled(self) -> bool {
        self == StopReason::Cancelled
    }
}

#[derive(Debug, Default)]
struct Flags {
    paused: AtomicBool,
    canceled: AtomicBool,
}

/// Shared control token for one search run at a time.
///
/// # Examples
///
/// ```
/// use magicube::RunControl;
///
/// let control = RunControl::new();
/// let remote = control.clone();
/// remote.cancel();
/// assert!(control.is_canceled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunControl {
    flags: Arc<Flags>,
    step_delay: Duration,
}

impl RunControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleeps for `delay` after each recorded improvement, so a live
    /// visualization can keep up. Zero (the default) disables pacing.
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    pub fn pause(&self) {
        self.flags.paused.store(true, Ordering::SeqCst);
    }

    pub fn resume(&self) {
        self.flags.paused.store(false, Ordering::SeqCst);
    }

    pub fn cancel(&self) {
        self.flags.canceled.store(true, Ordering::SeqCst);
    }

    pub fn is_paused(&self) -> bool {
        self.flags.paused.load(Ordering::SeqCst)
    }

    pub fn is_canceled(&self) -> bool {
        self.flags.canceled.load(Ordering::SeqCst)
    }

    /// Clears both flags. Every run calls this on entry.
    pub fn reset(&self) {
        self.flags.paused.store(false, Ordering::SeqCst);
        self.flags.canceled.store(false, Ordering::SeqCst);
    }

    /// Blocks while paused, polling every [`PAUSE_POLL_INTERVAL`].
    ///
    /// Returns `true` if the run should stop: either it was already
    /// cancelled, or it was cancelled while paused.
    pub fn checkpoint(&self) -> bool {
        loop {
            if self.is_canceled() {
                return true;
            }
            if !self.is_paused() {
                return false;
            }
            thread::sleep(PAUSE_POLL_INTERVAL);
        }
    }

    /// Applies the pacing delay, if any.
    pub(crate) fn pace(&self) {
        if !self.step_delay.is_zero() {
            thread::sleep(self.step_delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_flags_shared_between_clones() {
        let control = RunControl::new();
        let remote = control.clone();
        assert!(!control.is_paused());
        remote.pause();
        assert!(control.is_paused());
        remote.resume();
        assert!(!control.is_paused());
        remote.cancel();
        assert!(control.is_canceled());
    }

    #[test]
    fn test_reset_clears_flags() {
        let control = RunControl::new();
        control.pause();
        control.cancel();
        control.reset();
        assert!(!control.is_paused());
        assert!(!control.is_canceled());
    }

    #[test]
    fn test_checkpoint_returns_immediately_when_running() {
        let control = RunControl::new();
        let start = Instant::now();
        assert!(!control.checkpoint());
        assert!(start.elapsed() < PAUSE_POLL_INTERVAL);
    }

    #[test]
    fn test_checkpoint_reports_cancel() {
        let control = RunControl::new();
        control.cancel();
        assert!(control.checkpoint());
    }

    #[test]
    fn test_checkpoint_waits_for_resume() {
        let control = RunControl::new();
        control.pause();
        let remote = control.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(150));
            remote.resume();
        });
        let start = Instant::now();
        assert!(!control.checkpoint());
        assert!(start.elapsed() >= Duration::from_millis(150));
        handle.join().expect("resume thread");
    }

    #[test]
    fn test_cancel_while_paused_stops() {
        let control = RunControl::new();
        control.pause();
        let remote = control.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            remote.cancel();
        });
        assert!(control.checkpoint());
        handle.join().expect("cancel thread");
    }
}

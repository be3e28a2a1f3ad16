//! Steepest-ascent hill climbing.

use super::config::SteepestConfig;
use super::result::HillClimbResult;
use crate::control::{RunControl, StopReason};
use crate::cube::{best_neighbor, CubeState, Objective};
use crate::error::Result;
use crate::history::{NoopObserver, Recorder, SearchObserver};
use crate::random::rng_from;
use std::time::Instant;
use tracing::{debug, info};

/// Outcome of one descent to a local optimum.
pub(super) struct Descent {
    pub state: CubeState,
    pub score: u64,
    pub steps: usize,
    pub stop: StopReason,
}

/// Repeatedly commits the best single swap while it strictly improves.
///
/// Each committed score is appended to `scores` and each committed state to
/// the recorder. Stops at a local optimum or on cancellation.
pub(super) fn descend(
    mut current: CubeState,
    objective: &Objective,
    parallel: bool,
    control: &RunControl,
    recorder: &mut Recorder<'_>,
    scores: &mut Vec<u64>,
) -> Descent {
    let mut current_score = objective.score(&current);
    let mut steps = 0usize;

    let stop = loop {
        if control.checkpoint() {
            break StopReason::Cancelled;
        }

        let Some(neighbor) = best_neighbor(&current, objective, parallel) else {
            break StopReason::Converged;
        };
        if neighbor.score >= current_score {
            break if current_score == 0 {
                StopReason::Solved
            } else {
                StopReason::Converged
            };
        }

        neighbor.mv.apply(&mut current);
        current_score = neighbor.score;
        steps += 1;
        scores.push(current_score);
        debug!(step = steps, score = current_score, "improving swap");
        recorder.record(&current, Some(neighbor.mv), current_score);
    };

    Descent {
        state: current,
        score: current_score,
        steps,
        stop,
    }
}

/// Executes steepest-ascent hill climbing.
pub struct SteepestRunner;

impl SteepestRunner {
    pub fn run(config: &SteepestConfig) -> Result<HillClimbResult> {
        Self::run_with_control(config, &RunControl::new(), &mut NoopObserver)
    }

    /// Runs from a seeded random cube until no swap strictly improves.
    pub fn run_with_control(
        config: &SteepestConfig,
        control: &RunControl,
        observer: &mut dyn SearchObserver,
    ) -> Result<HillClimbResult> {
        config.validate()?;
        control.reset();

        let start = Instant::now();
        let mut rng = rng_from(config.seed);
        let objective = Objective::new(config.grid_size);
        let mut recorder = Recorder::new(control, observer);

        info!(
            event = "run_start",
            algorithm = "hill_climb_steepest",
            grid_size = config.grid_size,
        );

        let initial = CubeState::random(config.grid_size, &mut rng);
        recorder.start(&initial, objective.score(&initial));

        let mut scores = Vec::new();
        let descent = descend(
            initial,
            &objective,
            config.parallel,
            control,
            &mut recorder,
            &mut scores,
        );
        if descent.stop.is_cancelled() {
            info!(event = "cancelled", algorithm = "hill_climb_steepest");
        }

        let elapsed = start.elapsed();
        info!(
            event = "run_end",
            algorithm = "hill_climb_steepest",
            best_score = descent.score,
            iterations = scores.len(),
            duration_ms = elapsed.as_millis() as u64,
        );

        Ok(HillClimbResult {
            best: descent.state,
            best_score: descent.score,
            iterations: scores.len(),
            scores,
            accepted_moves: descent.steps,
            sideways_moves: 0,
            trajectory: recorder.into_trajectory(),
            stop: descent.stop,
            elapsed,
        })
    }
}

//! Random-restart hill climbing.
//!
//! Runs independent steepest-ascent climbs from fresh random cubes and
//! keeps the best local optimum. The concatenated score trace can be split
//! per restart with [`RandomRestartResult::segments`].

use super::config::RandomRestartConfig;
use super::result::RandomRestartResult;
use super::steepest::descend;
use crate::control::{RunControl, StopReason};
use crate::cube::{CubeState, Objective};
use crate::error::Result;
use crate::history::{NoopObserver, Recorder, SearchObserver};
use crate::random::rng_from;
use std::time::Instant;
use tracing::{debug, info};

/// Executes random-restart hill climbing.
pub struct RandomRestartRunner;

impl RandomRestartRunner {
    pub fn run(config: &RandomRestartConfig) -> Result<RandomRestartResult> {
        Self::run_with_control(config, &RunControl::new(), &mut NoopObserver)
    }

    /// Runs up to `config.restarts` climbs.
    ///
    /// Cancellation aborts the whole run. The interrupted climb's best still
    /// competes for the global best, so a result is always available.
    pub fn run_with_control(
        config: &RandomRestartConfig,
        control: &RunControl,
        observer: &mut dyn SearchObserver,
    ) -> Result<RandomRestartResult> {
        config.validate()?;
        control.reset();

        let start = Instant::now();
        let mut rng = rng_from(config.seed);
        let objective = Objective::new(config.grid_size);
        let mut recorder = Recorder::new(control, observer);

        info!(
            event = "run_start",
            algorithm = "hill_climb_random_restart",
            grid_size = config.grid_size,
            restarts = config.restarts,
        );

        // Placeholder; the first restart always replaces it.
        let mut best = CubeState::ordered(config.grid_size);
        let mut best_score = u64::MAX;
        let mut scores = Vec::new();
        let mut per_restart_iterations = Vec::with_capacity(config.restarts);
        let mut restart_scores = Vec::with_capacity(config.restarts);
        let mut stop = StopReason::BudgetExhausted;

        for restart in 0..config.restarts {
            let initial = CubeState::random(config.grid_size, &mut rng);
            recorder.start(&initial, objective.score(&initial));

            let descent = descend(
                initial,
                &objective,
                config.parallel,
                control,
                &mut recorder,
                &mut scores,
            );

            per_restart_iterations.push(descent.steps);
            restart_scores.push(descent.score);
            debug!(
                restart = restart + 1,
                score = descent.score,
                steps = descent.steps,
                "restart finished"
            );

            if descent.score < best_score {
                best = descent.state;
                best_score = descent.score;
            }

            if descent.stop.is_cancelled() {
                info!(
                    event = "cancelled",
                    algorithm = "hill_climb_random_restart",
                    restart = restart + 1,
                );
                stop = StopReason::Cancelled;
                break;
            }
            if descent.score == 0 {
                stop = StopReason::Solved;
                break;
            }
        }

        let elapsed = start.elapsed();
        info!(
            event = "run_end",
            algorithm = "hill_climb_random_restart",
            best_score,
            iterations = scores.len(),
            duration_ms = elapsed.as_millis() as u64,
        );

        Ok(RandomRestartResult {
            best,
            best_score,
            iterations: scores.len(),
            scores,
            per_restart_iterations,
            restart_scores,
            trajectory: recorder.into_trajectory(),
            stop,
            elapsed,
        })
    }
}

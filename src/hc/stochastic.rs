//! Stochastic hill climbing.
//!
//! Samples one random swap per iteration and keeps it only if it strictly
//! lowers the score. A rejected sample is undone and the run continues; the
//! run ends when the sample budget is spent.

use super::config::StochasticConfig;
use super::result::HillClimbResult;
use crate::control::{RunControl, StopReason};
use crate::cube::{random_swap, CubeState, Objective};
use crate::error::Result;
use crate::history::{NoopObserver, Recorder, SearchObserver};
use crate::random::rng_from;
use std::time::Instant;
use tracing::{debug, info};

/// Executes stochastic hill climbing.
pub struct StochasticRunner;

impl StochasticRunner {
    pub fn run(config: &StochasticConfig) -> Result<HillClimbResult> {
        Self::run_with_control(config, &RunControl::new(), &mut NoopObserver)
    }

    pub fn run_with_control(
        config: &StochasticConfig,
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
            algorithm = "hill_climb_stochastic",
            grid_size = config.grid_size,
            max_iterations = config.max_iterations,
        );

        let mut current = CubeState::random(config.grid_size, &mut rng);
        let mut current_score = objective.score(&current);
        recorder.start(&current, current_score);

        let mut scores = Vec::with_capacity(config.max_iterations);
        let mut accepted_moves = 0usize;

        let mut stop = StopReason::BudgetExhausted;
        for _ in 0..config.max_iterations {
            if control.checkpoint() {
                info!(event = "cancelled", algorithm = "hill_climb_stochastic");
                stop = StopReason::Cancelled;
                break;
            }

            let mv = random_swap(&mut current, &mut rng);
            let new_score = objective.score(&current);
            scores.push(new_score);

            if new_score >= current_score {
                mv.apply(&mut current);
                continue;
            }

            current_score = new_score;
            accepted_moves += 1;
            debug!(iteration = scores.len(), score = current_score, "improving swap");
            recorder.record(&current, Some(mv), current_score);

            if current_score == 0 {
                stop = StopReason::Solved;
                break;
            }
        }

        let elapsed = start.elapsed();
        info!(
            event = "run_end",
            algorithm = "hill_climb_stochastic",
            best_score = current_score,
            iterations = scores.len(),
            duration_ms = elapsed.as_millis() as u64,
        );

        Ok(HillClimbResult {
            best: current,
            best_score: current_score,
            iterations: scores.len(),
            scores,
            accepted_moves,
            sideways_moves: 0,
            trajectory: recorder.into_trajectory(),
            stop,
            elapsed,
        })
    }
}

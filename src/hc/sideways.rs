//! Steepest ascent with sideways moves.
//!
//! Like steepest ascent, but a best neighbour that only ties the current
//! score is still taken, letting the climb cross plateaus. Consecutive ties
//! are capped by `max_sideways`; a strict improvement resets the count.

use super::config::SidewaysConfig;
use super::result::HillClimbResult;
use crate::control::{RunControl, StopReason};
use crate::cube::{best_neighbor, CubeState, Objective};
use crate::error::Result;
use crate::history::{NoopObserver, Recorder, SearchObserver};
use crate::random::rng_from;
use std::cmp::Ordering;
use std::time::Instant;
use tracing::{debug, info};

/// Executes sideways hill climbing.
pub struct SidewaysRunner;

impl SidewaysRunner {
    pub fn run(config: &SidewaysConfig) -> Result<HillClimbResult> {
        Self::run_with_control(config, &RunControl::new(), &mut NoopObserver)
    }

    pub fn run_with_control(
        config: &SidewaysConfig,
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
            algorithm = "hill_climb_sideways",
            grid_size = config.grid_size,
            max_sideways = config.max_sideways,
        );

        let mut current = CubeState::random(config.grid_size, &mut rng);
        let mut current_score = objective.score(&current);
        recorder.start(&current, current_score);

        let mut scores = Vec::new();
        let mut sideways_count = 0usize;
        let mut sideways_moves = 0usize;

        let stop = loop {
            if control.checkpoint() {
                info!(event = "cancelled", algorithm = "hill_climb_sideways");
                break StopReason::Cancelled;
            }

            let Some(neighbor) = best_neighbor(&current, &objective, config.parallel) else {
                break StopReason::Converged;
            };

            match neighbor.score.cmp(&current_score) {
                Ordering::Greater => {
                    break if current_score == 0 {
                        StopReason::Solved
                    } else {
                        StopReason::Converged
                    };
                }
                Ordering::Equal => {
                    sideways_count += 1;
                    sideways_moves += 1;
                }
                Ordering::Less => sideways_count = 0,
            }

            neighbor.mv.apply(&mut current);
            current_score = neighbor.score;
            scores.push(current_score);
            debug!(
                step = scores.len(),
                score = current_score,
                sideways_count,
                "committed swap"
            );
            recorder.record(&current, Some(neighbor.mv), current_score);

            if sideways_count > 0 && sideways_count >= config.max_sideways {
                break StopReason::Converged;
            }
        };

        let committed = scores.len();
        let elapsed = start.elapsed();
        info!(
            event = "run_end",
            algorithm = "hill_climb_sideways",
            best_score = current_score,
            iterations = committed,
            sideways_moves,
            duration_ms = elapsed.as_millis() as u64,
        );

        Ok(HillClimbResult {
            best: current,
            best_score: current_score,
            iterations: committed,
            scores,
            accepted_moves: committed,
            sideways_moves,
            trajectory: recorder.into_trajectory(),
            stop,
            elapsed,
        })
    }
}

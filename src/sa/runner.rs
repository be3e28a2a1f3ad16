//! SA execution loop.

use super::config::SaConfig;
use crate::control::{RunControl, StopReason};
use crate::cube::{random_swap, CubeState, Objective};
use crate::error::Result;
use crate::history::{NoopObserver, Recorder, SearchObserver, Trajectory};
use crate::random::rng_from;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of a simulated annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SaResult {
    /// The best cube found.
    pub best: CubeState,

    /// Score of the best cube.
    pub best_score: u64,

    /// Score of the current solution before each iteration's move.
    pub scores: Vec<u64>,

    /// Acceptance probability `min(1, e^(−Δ/T))` of each iteration's move,
    /// parallel to `scores`.
    pub acceptance: Vec<f64>,

    /// Number of iterations (candidate evaluations).
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Moves committed as current, including improvements.
    pub accepted_moves: usize,

    /// Moves that strictly lowered the current score.
    pub improving_moves: usize,

    /// Initial state followed by every new best.
    ///
    /// Accepted non-improving moves are committed but not recorded, so two
    /// consecutive entries can be several swaps apart. Each entry's `mv` is
    /// the last swap before that best was reached, not a full path from the
    /// previous entry.
    pub trajectory: Trajectory,

    pub stop: StopReason,

    pub elapsed: Duration,
}

/// Executes simulated annealing.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA to completion with no external control.
    pub fn run(config: &SaConfig) -> Result<SaResult> {
        Self::run_with_control(config, &RunControl::new(), &mut NoopObserver)
    }

    /// Runs SA, polling `control` once per iteration and reporting each new
    /// best to `observer`.
    pub fn run_with_control(
        config: &SaConfig,
        control: &RunControl,
        observer: &mut dyn SearchObserver,
    ) -> Result<SaResult> {
        config.validate()?;
        control.reset();

        let start = Instant::now();
        let mut rng = rng_from(config.seed);
        let objective = Objective::new(config.grid_size);
        let mut recorder = Recorder::new(control, observer);

        info!(
            event = "run_start",
            algorithm = "simulated_annealing",
            grid_size = config.grid_size,
            initial_temperature = config.initial_temperature,
            cooling_rate = config.cooling_rate,
        );

        let mut current = CubeState::random(config.grid_size, &mut rng);
        let mut current_score = objective.score(&current);
        recorder.start(&current, current_score);

        let mut best = current.clone();
        let mut best_score = current_score;

        let mut temperature = config.initial_temperature;
        let mut scores = Vec::new();
        let mut acceptance = Vec::new();
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let stop = loop {
            if temperature <= config.min_temperature {
                break StopReason::Converged;
            }
            if control.checkpoint() {
                info!(event = "cancelled", algorithm = "simulated_annealing");
                break StopReason::Cancelled;
            }

            // Try the move in place; it is undone below if rejected.
            let mv = random_swap(&mut current, &mut rng);
            let new_score = objective.score(&current);

            scores.push(current_score);
            let delta = new_score as f64 - current_score as f64;
            let probability = (-delta / temperature).exp().min(1.0);
            acceptance.push(probability);

            // Metropolis criterion; improvements skip the random draw.
            let accept = delta < 0.0 || rng.random::<f64>() < probability;
            if accept {
                accepted_moves += 1;
                if delta < 0.0 {
                    improving_moves += 1;
                }
                current_score = new_score;

                if current_score < best_score {
                    best = current.clone();
                    best_score = current_score;
                    debug!(iteration = scores.len(), best_score, temperature, "new best");
                    recorder.record(&best, Some(mv), best_score);
                }
            } else {
                mv.apply(&mut current);
            }

            temperature *= config.cooling_rate;
        };

        let elapsed = start.elapsed();
        info!(
            event = "run_end",
            algorithm = "simulated_annealing",
            best_score,
            iterations = scores.len(),
            duration_ms = elapsed.as_millis() as u64,
        );

        Ok(SaResult {
            best,
            best_score,
            iterations: scores.len(),
            scores,
            acceptance,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            trajectory: recorder.into_trajectory(),
            stop,
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;

    fn quick_config() -> SaConfig {
        SaConfig::default()
            .with_grid_size(3)
            .with_initial_temperature(50.0)
            .with_cooling_rate(0.99)
            .with_min_temperature(0.01)
            .with_seed(42)
    }

    #[test]
    fn test_sa_improves_on_initial_state() {
        let result = SaRunner::run(&quick_config()).expect("valid config");
        let initial = result.trajectory.first().expect("initial entry").score;
        assert!(
            result.best_score < initial,
            "expected improvement over {initial}, got {}",
            result.best_score
        );
        assert!(result.best.is_permutation());
        assert_eq!(result.stop, StopReason::Converged);
        assert!(result.improving_moves > 0);
        assert!(result.accepted_moves >= result.improving_moves);
    }

    #[test]
    fn test_sa_iteration_count_follows_schedule() {
        let config = quick_config();
        let result = SaRunner::run(&config).expect("valid config");
        // 50 · 0.99^k <= 0.01  ⇔  k >= ln(0.0002) / ln(0.99) ≈ 847.4
        assert_eq!(result.iterations, 848);
        assert_eq!(result.scores.len(), result.iterations);
        assert_eq!(result.acceptance.len(), result.iterations);
        assert!(result.final_temperature <= config.min_temperature);
    }

    #[test]
    fn test_sa_acceptance_is_probability() {
        let result = SaRunner::run(&quick_config()).expect("valid config");
        assert!(result.acceptance.iter().all(|&p| (0.0..=1.0).contains(&p)));
    }

    #[test]
    fn test_sa_trajectory_strictly_improves() {
        let result = SaRunner::run(&quick_config()).expect("valid config");
        for pair in result.trajectory.entries().windows(2) {
            assert!(pair[1].score < pair[0].score);
        }
        let last = result.trajectory.last().expect("non-empty");
        assert_eq!(last.score, result.best_score);
        assert_eq!(last.state, result.best);
    }

    #[test]
    fn test_sa_trajectory_move_is_last_swap_before_best() {
        let result = SaRunner::run(&quick_config()).expect("valid config");
        let objective = Objective::new(3);
        for pair in result.trajectory.entries().windows(2) {
            let mv = pair[1].mv.expect("recorded best carries its move");
            let mut before = pair[1].state.clone();
            mv.apply(&mut before);
            // The state the swap was taken from was a committed current
            // state, which never scores below the best recorded before it.
            assert!(objective.score(&before) >= pair[0].score);
        }
    }

    #[test]
    fn test_sa_seeded_runs_are_identical() {
        let a = SaRunner::run(&quick_config()).expect("valid config");
        let b = SaRunner::run(&quick_config()).expect("valid config");
        assert_eq!(a.best, b.best);
        assert_eq!(a.scores, b.scores);
    }

    #[test]
    fn test_sa_invalid_config_is_rejected() {
        let config = quick_config().with_cooling_rate(1.0);
        assert!(SaRunner::run(&config).is_err());
    }

    #[test]
    fn test_sa_cancel_on_initial_record() {
        let control = RunControl::new();
        let remote = control.clone();
        let mut initial = None;
        let mut observer = |e: &HistoryEntry| {
            if initial.is_none() {
                initial = Some(e.state.clone());
                remote.cancel();
            }
        };
        let result =
            SaRunner::run_with_control(&quick_config(), &control, &mut observer).expect("valid");
        assert_eq!(result.stop, StopReason::Cancelled);
        assert!(result.scores.is_empty());
        assert_eq!(Some(result.best), initial);
    }

    #[test]
    fn test_sa_high_temperature_accepts_most_moves() {
        let config = SaConfig::default()
            .with_grid_size(3)
            .with_initial_temperature(1e9)
            .with_min_temperature(1e8)
            .with_cooling_rate(0.999)
            .with_seed(7);
        let result = SaRunner::run(&config).expect("valid config");
        let ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(ratio > 0.95, "expected near-total acceptance, got {ratio}");
    }
}

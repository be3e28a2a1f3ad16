//! Single entry point over every search strategy.
//!
//! A control surface picks an [`Algorithm`] (by value or by name), hands
//! over a [`RunControl`] and an observer, and gets back a uniform
//! [`RunReport`]. Strategy-specific extras travel in [`Diagnostics`].
//!
//! ```
//! use magicube::engine::{run_algorithm, Algorithm};
//! use magicube::{NoopObserver, RunControl};
//!
//! let algorithm: Algorithm = "steepest".parse().unwrap();
//! let algorithm = algorithm.with_grid_size(3).with_seed(7);
//! let report = run_algorithm(&algorithm, &RunControl::new(), &mut NoopObserver).unwrap();
//! assert_eq!(report.algorithm, "hill_climb_steepest");
//! assert!(report.best.is_permutation());
//! ```

use crate::control::{RunControl, StopReason};
use crate::cube::CubeState;
use crate::error::{ConfigError, Result};
use crate::ga::{GaConfig, GaRunner};
use crate::hc::{
    RandomRestartConfig, RandomRestartRunner, SidewaysConfig, SidewaysRunner, SteepestConfig,
    SteepestRunner, StochasticConfig, StochasticRunner,
};
use crate::history::{SearchObserver, Trajectory};
use crate::sa::{SaConfig, SaRunner};
use std::str::FromStr;
use std::time::Duration;

/// A search strategy together with its configuration.
#[derive(Debug, Clone)]
pub enum Algorithm {
    SimulatedAnnealing(SaConfig),
    HillClimbSteepest(SteepestConfig),
    HillClimbStochastic(StochasticConfig),
    HillClimbSideways(SidewaysConfig),
    HillClimbRandomRestart(RandomRestartConfig),
    GeneticAlgorithm(GaConfig),
}

impl Algorithm {
    /// Every strategy with its default configuration.
    pub fn all() -> Vec<Algorithm> {
        vec![
            Algorithm::SimulatedAnnealing(SaConfig::default()),
            Algorithm::HillClimbSteepest(SteepestConfig::default()),
            Algorithm::HillClimbStochastic(StochasticConfig::default()),
            Algorithm::HillClimbSideways(SidewaysConfig::default()),
            Algorithm::HillClimbRandomRestart(RandomRestartConfig::default()),
            Algorithm::GeneticAlgorithm(GaConfig::default()),
        ]
    }

    /// Stable snake_case name, as used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::SimulatedAnnealing(_) => "simulated_annealing",
            Algorithm::HillClimbSteepest(_) => "hill_climb_steepest",
            Algorithm::HillClimbStochastic(_) => "hill_climb_stochastic",
            Algorithm::HillClimbSideways(_) => "hill_climb_sideways",
            Algorithm::HillClimbRandomRestart(_) => "hill_climb_random_restart",
            Algorithm::GeneticAlgorithm(_) => "genetic_algorithm",
        }
    }

    pub fn grid_size(&self) -> usize {
        match self {
            Algorithm::SimulatedAnnealing(c) => c.grid_size,
            Algorithm::HillClimbSteepest(c) => c.grid_size,
            Algorithm::HillClimbStochastic(c) => c.grid_size,
            Algorithm::HillClimbSideways(c) => c.grid_size,
            Algorithm::HillClimbRandomRestart(c) => c.grid_size,
            Algorithm::GeneticAlgorithm(c) => c.grid_size,
        }
    }

    pub fn with_grid_size(self, n: usize) -> Self {
        match self {
            Algorithm::SimulatedAnnealing(c) => Algorithm::SimulatedAnnealing(c.with_grid_size(n)),
            Algorithm::HillClimbSteepest(c) => Algorithm::HillClimbSteepest(c.with_grid_size(n)),
            Algorithm::HillClimbStochastic(c) => {
                Algorithm::HillClimbStochastic(c.with_grid_size(n))
            }
            Algorithm::HillClimbSideways(c) => Algorithm::HillClimbSideways(c.with_grid_size(n)),
            Algorithm::HillClimbRandomRestart(c) => {
                Algorithm::HillClimbRandomRestart(c.with_grid_size(n))
            }
            Algorithm::GeneticAlgorithm(c) => Algorithm::GeneticAlgorithm(c.with_grid_size(n)),
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        match self {
            Algorithm::SimulatedAnnealing(c) => Algorithm::SimulatedAnnealing(c.with_seed(seed)),
            Algorithm::HillClimbSteepest(c) => Algorithm::HillClimbSteepest(c.with_seed(seed)),
            Algorithm::HillClimbStochastic(c) => Algorithm::HillClimbStochastic(c.with_seed(seed)),
            Algorithm::HillClimbSideways(c) => Algorithm::HillClimbSideways(c.with_seed(seed)),
            Algorithm::HillClimbRandomRestart(c) => {
                Algorithm::HillClimbRandomRestart(c.with_seed(seed))
            }
            Algorithm::GeneticAlgorithm(c) => Algorithm::GeneticAlgorithm(c.with_seed(seed)),
        }
    }

    /// Checks the wrapped configuration without running it.
    pub fn validate(&self) -> Result<()> {
        match self {
            Algorithm::SimulatedAnnealing(c) => c.validate(),
            Algorithm::HillClimbSteepest(c) => c.validate(),
            Algorithm::HillClimbStochastic(c) => c.validate(),
            Algorithm::HillClimbSideways(c) => c.validate(),
            Algorithm::HillClimbRandomRestart(c) => c.validate(),
            Algorithm::GeneticAlgorithm(c) => c.validate(),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    /// Parses a strategy name into its default configuration.
    ///
    /// Accepts the names returned by [`Algorithm::name`] and short aliases,
    /// case-insensitively, with `-` or `_` as separator.
    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim().to_lowercase().replace('-', "_");
        match t.as_str() {
            "simulated_annealing" | "sa" | "annealing" => {
                Ok(Algorithm::SimulatedAnnealing(SaConfig::default()))
            }
            "hill_climb_steepest" | "steepest" => {
                Ok(Algorithm::HillClimbSteepest(SteepestConfig::default()))
            }
            "hill_climb_stochastic" | "stochastic" => {
                Ok(Algorithm::HillClimbStochastic(StochasticConfig::default()))
            }
            "hill_climb_sideways" | "sideways" => {
                Ok(Algorithm::HillClimbSideways(SidewaysConfig::default()))
            }
            "hill_climb_random_restart" | "random_restart" | "restart" => Ok(
                Algorithm::HillClimbRandomRestart(RandomRestartConfig::default()),
            ),
            "genetic_algorithm" | "genetic" | "ga" => {
                Ok(Algorithm::GeneticAlgorithm(GaConfig::default()))
            }
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Strategy-specific output that does not fit the common report.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Diagnostics {
    Annealing {
        /// Acceptance probability per iteration, parallel to the score trace.
        acceptance: Vec<f64>,
        final_temperature: f64,
        accepted_moves: usize,
        improving_moves: usize,
    },
    HillClimb {
        accepted_moves: usize,
        sideways_moves: usize,
    },
    RandomRestart {
        /// Committed steps per restart; splits the score trace.
        per_restart_iterations: Vec<usize>,
        restart_scores: Vec<u64>,
    },
    Genetic {
        generations: usize,
        population: Vec<CubeState>,
    },
}

/// Uniform outcome of any strategy.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunReport {
    /// [`Algorithm::name`] of the strategy that ran.
    pub algorithm: &'static str,
    pub best: CubeState,
    pub best_score: u64,
    /// The strategy's score trace. What one entry means depends on the
    /// strategy; see the individual result types.
    pub scores: Vec<u64>,
    pub iterations: usize,
    pub trajectory: Trajectory,
    pub stop: StopReason,
    pub elapsed: Duration,
    pub diagnostics: Diagnostics,
}

impl RunReport {
    /// `true` when the best cube is a perfect magic cube.
    pub fn is_solved(&self) -> bool {
        self.best_score == 0
    }
}

/// Runs `algorithm` to completion, under `control`, reporting recorded
/// states to `observer`.
pub fn run_algorithm(
    algorithm: &Algorithm,
    control: &RunControl,
    observer: &mut dyn SearchObserver,
) -> Result<RunReport> {
    let name = algorithm.name();
    let report = match algorithm {
        Algorithm::SimulatedAnnealing(config) => {
            let r = SaRunner::run_with_control(config, control, observer)?;
            RunReport {
                algorithm: name,
                best: r.best,
                best_score: r.best_score,
                scores: r.scores,
                iterations: r.iterations,
                trajectory: r.trajectory,
                stop: r.stop,
                elapsed: r.elapsed,
                diagnostics: Diagnostics::Annealing {
                    acceptance: r.acceptance,
                    final_temperature: r.final_temperature,
                    accepted_moves: r.accepted_moves,
                    improving_moves: r.improving_moves,
                },
            }
        }
        Algorithm::HillClimbSteepest(config) => hill_climb_report(
            name,
            SteepestRunner::run_with_control(config, control, observer)?,
        ),
        Algorithm::HillClimbStochastic(config) => hill_climb_report(
            name,
            StochasticRunner::run_with_control(config, control, observer)?,
        ),
        Algorithm::HillClimbSideways(config) => hill_climb_report(
            name,
            SidewaysRunner::run_with_control(config, control, observer)?,
        ),
        Algorithm::HillClimbRandomRestart(config) => {
            let r = RandomRestartRunner::run_with_control(config, control, observer)?;
            RunReport {
                algorithm: name,
                best: r.best,
                best_score: r.best_score,
                scores: r.scores,
                iterations: r.iterations,
                trajectory: r.trajectory,
                stop: r.stop,
                elapsed: r.elapsed,
                diagnostics: Diagnostics::RandomRestart {
                    per_restart_iterations: r.per_restart_iterations,
                    restart_scores: r.restart_scores,
                },
            }
        }
        Algorithm::GeneticAlgorithm(config) => {
            let r = GaRunner::run_with_control(config, control, observer)?;
            RunReport {
                algorithm: name,
                best: r.best,
                best_score: r.best_score,
                scores: r.scores,
                iterations: r.iterations,
                trajectory: r.trajectory,
                stop: r.stop,
                elapsed: r.elapsed,
                diagnostics: Diagnostics::Genetic {
                    generations: r.generations,
                    population: r.population,
                },
            }
        }
    };
    Ok(report)
}

fn hill_climb_report(name: &'static str, r: crate::hc::HillClimbResult) -> RunReport {
    RunReport {
        algorithm: name,
        best: r.best,
        best_score: r.best_score,
        scores: r.scores,
        iterations: r.iterations,
        trajectory: r.trajectory,
        stop: r.stop,
        elapsed: r.elapsed,
        diagnostics: Diagnostics::HillClimb {
            accepted_moves: r.accepted_moves,
            sideways_moves: r.sideways_moves,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Objective;
    use crate::history::{HistoryEntry, NoopObserver};

    /// Every strategy at n = 3 with budgets small enough for unit tests.
    fn quick_algorithms(seed: u64) -> Vec<Algorithm> {
        vec![
            Algorithm::SimulatedAnnealing(
                SaConfig::default()
                    .with_initial_temperature(20.0)
                    .with_cooling_rate(0.99)
                    .with_min_temperature(0.1),
            ),
            Algorithm::HillClimbSteepest(SteepestConfig::default()),
            Algorithm::HillClimbStochastic(StochasticConfig::default()),
            Algorithm::HillClimbSideways(SidewaysConfig::default().with_max_sideways(5)),
            Algorithm::HillClimbRandomRestart(RandomRestartConfig::default().with_restarts(2)),
            Algorithm::GeneticAlgorithm(
                GaConfig::default()
                    .with_population_size(6)
                    .with_max_generations(20),
            ),
        ]
        .into_iter()
        .map(|a| a.with_grid_size(3).with_seed(seed))
        .collect()
    }

    #[test]
    fn test_every_strategy_returns_a_valid_cube() {
        let objective = Objective::new(3);
        for algorithm in quick_algorithms(42) {
            let report = run_algorithm(&algorithm, &RunControl::new(), &mut NoopObserver)
                .expect("valid config");
            assert_eq!(report.algorithm, algorithm.name());
            assert!(report.best.is_permutation(), "{}", report.algorithm);
            assert_eq!(objective.score(&report.best), report.best_score);
            assert_eq!(report.iterations, report.scores.len());
            assert!(!report.trajectory.is_empty());
        }
    }

    #[test]
    fn test_best_never_worse_than_start() {
        for algorithm in quick_algorithms(7) {
            let report = run_algorithm(&algorithm, &RunControl::new(), &mut NoopObserver)
                .expect("valid config");
            let initial = report.trajectory.first().expect("initial").score;
            assert!(report.best_score <= initial, "{}", report.algorithm);
        }
    }

    #[test]
    fn test_trajectory_states_are_permutations() {
        for algorithm in quick_algorithms(3) {
            let report = run_algorithm(&algorithm, &RunControl::new(), &mut NoopObserver)
                .expect("valid config");
            assert!(report.trajectory.iter().all(|e| e.state.is_permutation()));
        }
    }

    #[test]
    fn test_observer_sees_the_trajectory() {
        for algorithm in quick_algorithms(11) {
            let mut seen = Vec::new();
            let mut observer = |e: &HistoryEntry| seen.push(e.score);
            let report = run_algorithm(&algorithm, &RunControl::new(), &mut observer)
                .expect("valid config");
            assert_eq!(seen, report.trajectory.scores(), "{}", report.algorithm);
        }
    }

    #[test]
    fn test_cancel_stops_every_strategy() {
        for algorithm in quick_algorithms(5) {
            let control = RunControl::new();
            let remote = control.clone();
            let mut observer = |_: &HistoryEntry| remote.cancel();
            let report =
                run_algorithm(&algorithm, &control, &mut observer).expect("valid config");
            assert_eq!(report.stop, StopReason::Cancelled, "{}", report.algorithm);
            assert!(report.best.is_permutation());
        }
    }

    #[test]
    fn test_diagnostics_match_strategy() {
        for algorithm in quick_algorithms(9) {
            let report = run_algorithm(&algorithm, &RunControl::new(), &mut NoopObserver)
                .expect("valid config");
            match (&algorithm, &report.diagnostics) {
                (Algorithm::SimulatedAnnealing(_), Diagnostics::Annealing { acceptance, .. }) => {
                    assert_eq!(acceptance.len(), report.scores.len());
                }
                (
                    Algorithm::HillClimbRandomRestart(_),
                    Diagnostics::RandomRestart {
                        per_restart_iterations,
                        ..
                    },
                ) => {
                    assert_eq!(per_restart_iterations.len(), 2);
                }
                (Algorithm::GeneticAlgorithm(_), Diagnostics::Genetic { population, .. }) => {
                    assert_eq!(population.len(), 6);
                }
                (
                    Algorithm::HillClimbSteepest(_)
                    | Algorithm::HillClimbStochastic(_)
                    | Algorithm::HillClimbSideways(_),
                    Diagnostics::HillClimb { .. },
                ) => {}
                (a, d) => panic!("{} produced {d:?}", a.name()),
            }
        }
    }

    #[test]
    fn test_parse_names_and_aliases() {
        for algorithm in Algorithm::all() {
            let parsed: Algorithm = algorithm.name().parse().expect("known name");
            assert_eq!(parsed.name(), algorithm.name());
        }
        let parsed: Algorithm = "Random-Restart".parse().expect("alias");
        assert_eq!(parsed.name(), "hill_climb_random_restart");
        let parsed: Algorithm = " GA ".parse().expect("alias");
        assert_eq!(parsed.name(), "genetic_algorithm");
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "tabu".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownAlgorithm("tabu".to_string()));
    }

    #[test]
    fn test_invalid_config_surfaces_as_error() {
        let algorithm = Algorithm::HillClimbSteepest(SteepestConfig::default()).with_grid_size(1);
        assert!(algorithm.validate().is_err());
        let result = run_algorithm(&algorithm, &RunControl::new(), &mut NoopObserver);
        assert_eq!(result.unwrap_err(), ConfigError::GridSize(1));
    }
}

//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the generational loop:
//! evaluation → best tracking → roulette selection → crossover → mutation →
//! replacement.

use super::config::GaConfig;
use super::operators::{ordered_crossover, swap_mutation};
use super::selection::{roulette, roulette_weights};
use crate::control::{RunControl, StopReason};
use crate::cube::{CubeState, Objective};
use crate::error::Result;
use crate::history::{NoopObserver, Recorder, SearchObserver, Trajectory};
use crate::random::rng_from;
use rand::Rng;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GaResult {
    /// The best individual seen in any generation.
    pub best: CubeState,

    /// Score of `best`.
    pub best_score: u64,

    /// Global best score after each generation.
    pub scores: Vec<u64>,

    /// Length of `scores`.
    pub iterations: usize,

    /// Generations evaluated.
    pub generations: usize,

    /// The population when the loop stopped. After a full generation this is
    /// the freshly bred offspring.
    pub population: Vec<CubeState>,

    /// First individual of the initial population followed by every new
    /// global best.
    pub trajectory: Trajectory,

    pub stop: StopReason,

    pub elapsed: Duration,
}

/// Executes the GA generational loop.
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion with no external control.
    pub fn run(config: &GaConfig) -> Result<GaResult> {
        Self::run_with_control(config, &RunControl::new(), &mut NoopObserver)
    }

    /// Runs the GA, polling `control` once per generation.
    ///
    /// The global best only changes on strict improvement, so the returned
    /// score trace never increases even when a whole generation is worse
    /// than its parents.
    pub fn run_with_control(
        config: &GaConfig,
        control: &RunControl,
        observer: &mut dyn SearchObserver,
    ) -> Result<GaResult> {
        config.validate()?;
        control.reset();

        let start = Instant::now();
        let mut rng = rng_from(config.seed);
        let objective = Objective::new(config.grid_size);
        let mut recorder = Recorder::new(control, observer);

        info!(
            event = "run_start",
            algorithm = "genetic_algorithm",
            grid_size = config.grid_size,
            population_size = config.population_size,
            max_generations = config.max_generations,
        );

        // 1. Initialize population
        let mut population: Vec<CubeState> = (0..config.population_size)
            .map(|_| CubeState::random(config.grid_size, &mut rng))
            .collect();

        let mut best = population[0].clone();
        let mut best_score = objective.score(&best);
        recorder.start(&best, best_score);

        let mut scores = Vec::with_capacity(config.max_generations);
        let mut stop = StopReason::BudgetExhausted;

        // 2. Generational loop
        for generation in 0..config.max_generations {
            if control.checkpoint() {
                info!(
                    event = "cancelled",
                    algorithm = "genetic_algorithm",
                    generation,
                );
                stop = StopReason::Cancelled;
                break;
            }

            let fitness = evaluate_population(&objective, &population, config.parallel);

            // First minimum wins ties.
            let (gen_best, gen_best_score) = fitness
                .iter()
                .copied()
                .enumerate()
                .min_by_key(|&(i, s)| (s, i))
                .unwrap_or((0, best_score));
            if gen_best_score < best_score {
                best = population[gen_best].clone();
                best_score = gen_best_score;
                debug!(generation, score = best_score, "new global best");
                recorder.record(&best, None, best_score);
            }
            scores.push(best_score);

            if best_score == 0 {
                stop = StopReason::Solved;
                break;
            }

            population = breed(&population, &fitness, config.mutation_rate, &mut rng);
        }

        let generations = scores.len();
        let elapsed = start.elapsed();
        info!(
            event = "run_end",
            algorithm = "genetic_algorithm",
            best_score,
            iterations = generations,
            duration_ms = elapsed.as_millis() as u64,
        );

        Ok(GaResult {
            best,
            best_score,
            scores,
            iterations: generations,
            generations,
            population,
            trajectory: recorder.into_trajectory(),
            stop,
            elapsed,
        })
    }
}

/// Scores every individual, in population order.
fn evaluate_population(objective: &Objective, population: &[CubeState], parallel: bool) -> Vec<u64> {
    if parallel {
        population.par_iter().map(|c| objective.score(c)).collect()
    } else {
        population.iter().map(|c| objective.score(c)).collect()
    }
}

/// Produces the next generation from the current one.
///
/// Parents are always drawn from `population`, never from offspring bred
/// earlier in the same pass. An odd population drops the last pair's second
/// child.
fn breed<R: Rng>(
    population: &[CubeState],
    fitness: &[u64],
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<CubeState> {
    let size = population.len();
    let weights = roulette_weights(fitness);
    let mut next = Vec::with_capacity(size);

    for i in (0..size).step_by(2) {
        let p1 = roulette(&weights, rng);
        let p2 = roulette(&weights, rng);
        let (mut child1, mut child2) = ordered_crossover(&population[p1], &population[p2], rng);

        swap_mutation(&mut child1, mutation_rate, rng);
        swap_mutation(&mut child2, mutation_rate, rng);

        next.push(child1);
        if i + 1 < size {
            next.push(child2);
        }
    }

    next
}

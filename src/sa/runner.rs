//! SA execution loop.

use rand::Rng;

use super::config::SaConfig;
use crate::board::{best_states, Board};
use crate::error::SearchError;
use crate::history::FitnessHistory;
use crate::monitor::{NoopMonitor, SearchMonitor};
use crate::random::{create_rng, iteration_seed};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The best board seen. Not necessarily a solution.
    pub best: Board,

    /// Fitness of the best board.
    pub best_fitness: usize,

    /// Whether the best board is a solution.
    pub solved: bool,

    /// Total number of iterations performed.
    pub iterations: usize,

    /// Temperature of the last iteration (0 if none ran).
    ///
    /// Temperature is `fitness / (iteration_factor * size)` and is only taken
    /// on unsolved boards, where `fitness < size`, so it is always 0.
    pub final_temperature: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Number of picks that were discarded.
    pub rejected_moves: usize,

    /// Rejections caused by a zero temperature.
    pub frozen_rejections: usize,

    /// Best fitness before the first iteration and after each one.
    pub fitness_history: Vec<usize>,
}

/// Outcome of offering a strictly worse neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Acceptance {
    Accepted,
    Rejected,
    /// Temperature is zero; worse moves are never taken.
    Frozen,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA on a `size`-queens board starting from all ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_nqueens::sa::{SaConfig, SaRunner};
    ///
    /// let result = SaRunner::run(6, &SaConfig::default()).unwrap();
    /// assert!(result.iterations <= 60);
    /// assert!(result.best_fitness >= 1);
    /// ```
    pub fn run(size: usize, config: &SaConfig) -> Result<SaResult, SearchError> {
        Self::run_from(Board::ones(size)?, config)
    }

    /// Runs SA from an arbitrary starting board.
    pub fn run_from(initial: Board, config: &SaConfig) -> Result<SaResult, SearchError> {
        Self::run_with_monitor(initial, config, &mut NoopMonitor)
    }

    /// Runs SA, reporting progress to `monitor`.
    pub fn run_with_monitor(
        initial: Board,
        config: &SaConfig,
        monitor: &mut dyn SearchMonitor,
    ) -> Result<SaResult, SearchError> {
        config.validate()?;
        let kmax = config.max_iterations(initial.size())?;

        let mut current = initial;
        let mut best = current.clone();
        let mut k = 0usize;
        let mut temperature = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut rejected_moves = 0usize;
        let mut frozen_rejections = 0usize;
        let mut fitness_history = FitnessHistory::new(1, best.fitness());

        monitor.on_start(&current);

        while !current.is_solution() && k < kmax {
            temperature = current.fitness() / kmax;

            let neighbors = current.neighbors();
            let candidates = best_states(&neighbors);

            let mut rng = create_rng(iteration_seed(config.base_seed, k));
            let neighbor = candidates[rng.random_range(0..candidates.len())].clone();

            monitor.on_iteration(k, &current, candidates.len());

            let acceptance = if current.fitness() <= neighbor.fitness() {
                Acceptance::Accepted
            } else {
                accept_worse(current.fitness(), neighbor.fitness(), temperature, &mut rng)
            };

            match acceptance {
                Acceptance::Accepted => {
                    if current.fitness() < neighbor.fitness() {
                        improving_moves += 1;
                    }
                    accepted_moves += 1;
                    monitor.on_accepted(k, &neighbor);
                    current = neighbor;

                    if best.fitness() <= current.fitness() {
                        best = current.clone();
                        monitor.on_best_updated(k, &best);
                    }
                }
                Acceptance::Rejected | Acceptance::Frozen => {
                    if acceptance == Acceptance::Frozen {
                        frozen_rejections += 1;
                    }
                    rejected_moves += 1;
                    monitor.on_rejected(k, &neighbor);
                }
            }

            k += 1;
            fitness_history.record(k, best.fitness());
        }

        monitor.on_end(&best, k);

        Ok(SaResult {
            best_fitness: best.fitness(),
            solved: best.is_solution(),
            best,
            iterations: k,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            rejected_moves,
            frozen_rejections,
            fitness_history: fitness_history.into_vec(),
        })
    }
}

/// Energy term of the acceptance test: `current - (neighbor / temperature)`.
///
/// The division binds tighter than the subtraction and is an integer
/// division, so this is not the textbook `(current - neighbor) / T`.
/// Callers guarantee `temperature > 0`.
fn energy(current: usize, neighbor: usize, temperature: usize) -> f64 {
    (current as i64 - (neighbor / temperature) as i64) as f64
}

/// Decides whether a strictly worse neighbor is taken.
///
/// A zero temperature rejects outright instead of dividing by zero.
fn accept_worse<R: Rng>(
    current: usize,
    neighbor: usize,
    temperature: usize,
    rng: &mut R,
) -> Acceptance {
    if temperature == 0 {
        return Acceptance::Frozen;
    }
    if energy(current, neighbor, temperature).exp() > rng.random::<f64>() {
        Acceptance::Accepted
    } else {
        Acceptance::Rejected
    }
}

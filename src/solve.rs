//! Algorithm selection: one entry point for both searches.

use std::fmt;

use crate::board::Board;
use crate::error::SearchError;
use crate::hill::{HillClimbConfig, HillClimbRunner};
use crate::monitor::{NoopMonitor, SearchMonitor};
use crate::sa::{SaConfig, SaRunner};

/// Local search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Steepest-ascent Hill Climbing (selector `0`).
    HillClimb,
    /// Simulated Annealing (selector `1`).
    SimulatedAnnealing,
}

impl TryFrom<u32> for Algorithm {
    type Error = SearchError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Algorithm::HillClimb),
            1 => Ok(Algorithm::SimulatedAnnealing),
            other => Err(SearchError::UnknownAlgorithm(other)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::HillClimb => f.write_str("hill climbing"),
            Algorithm::SimulatedAnnealing => f.write_str("simulated annealing"),
        }
    }
}

/// Settings for [`solve`], one block per algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveConfig {
    /// Settings used when running [`Algorithm::HillClimb`].
    pub hill: HillClimbConfig,

    /// Settings used when running [`Algorithm::SimulatedAnnealing`].
    pub sa: SaConfig,
}

impl SolveConfig {
    /// Applies `seed` as the base seed of both algorithms.
    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.hill.base_seed = seed;
        self.sa.base_seed = seed;
        self
    }
}

/// Final board of a run and whether it is a solution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// Solution (Hill Climbing) or best board seen (Simulated Annealing).
    pub board: Board,

    /// Whether `board` is a solution.
    pub solved: bool,

    /// Number of iterations the search performed.
    pub iterations: usize,
}

/// Runs `algorithm` on a `size`-queens board from the all-ones start.
///
/// Hill Climbing either returns a solution or, when capped, fails with
/// [`SearchError::Exhausted`]. Simulated Annealing always returns its best
/// board, which may not be a solution.
///
/// # Examples
///
/// ```
/// use u_nqueens::{solve, Algorithm, SolveConfig};
///
/// let outcome = solve(1, Algorithm::HillClimb, &SolveConfig::default()).unwrap();
/// assert_eq!(outcome.board.positions(), &[1]);
/// assert!(outcome.solved);
/// ```
pub fn solve(
    size: usize,
    algorithm: Algorithm,
    config: &SolveConfig,
) -> Result<Outcome, SearchError> {
    solve_with_monitor(size, algorithm, config, &mut NoopMonitor)
}

/// Like [`solve`], reporting progress to `monitor`.
pub fn solve_with_monitor(
    size: usize,
    algorithm: Algorithm,
    config: &SolveConfig,
    monitor: &mut dyn SearchMonitor,
) -> Result<Outcome, SearchError> {
    let initial = Board::ones(size)?;
    match algorithm {
        Algorithm::HillClimb => {
            let result = HillClimbRunner::run_with_monitor(initial, &config.hill, monitor)?;
            Ok(Outcome {
                board: result.solution,
                solved: true,
                iterations: result.iterations,
            })
        }
        Algorithm::SimulatedAnnealing => {
            let result = SaRunner::run_with_monitor(initial, &config.sa, monitor)?;
            Ok(Outcome {
                board: result.best,
                solved: result.solved,
                iterations: result.iterations,
            })
        }
    }
}

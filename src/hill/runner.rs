//! Hill Climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Start from the given board (all queens on row 1 by default)
//! 2. At each iteration `i`:
//!    a. Generate the full one-move neighborhood
//!    b. Keep the neighbors tied for the highest fitness
//!    c. Pick one uniformly with a generator seeded by `base_seed + i`
//!    d. Stop if the pick is a solution, otherwise move to it
//! 3. With a cap, stop with [`SearchError::Exhausted`] after `max_iterations` moves

use rand::Rng;

use super::config::HillClimbConfig;
use crate::board::{best_states, Board};
use crate::error::SearchError;
use crate::history::FitnessHistory;
use crate::monitor::{NoopMonitor, SearchMonitor};
use crate::random::{create_rng, iteration_seed};

/// Moves between two fitness history samples.
pub const HISTORY_INTERVAL: usize = 100;

/// Result of a successful Hill Climbing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbResult {
    /// The solution reached.
    pub solution: Board,

    /// Number of moves made, including the final one.
    pub iterations: usize,

    /// Fitness of the starting board, then every [`HISTORY_INTERVAL`] moves,
    /// ending with the fitness of the solution.
    pub fitness_history: Vec<usize>,
}

/// Where a climb stopped.
struct Climb {
    last: Board,
    solved: bool,
    iterations: usize,
    history: FitnessHistory,
}

/// Executes steepest-ascent Hill Climbing.
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Runs Hill Climbing on a `size`-queens board starting from all ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_nqueens::hill::{HillClimbConfig, HillClimbRunner};
    ///
    /// let result = HillClimbRunner::run(1, &HillClimbConfig::default()).unwrap();
    /// assert_eq!(result.solution.positions(), &[1]);
    /// ```
    pub fn run(size: usize, config: &HillClimbConfig) -> Result<HillClimbResult, SearchError> {
        Self::run_from(Board::ones(size)?, config)
    }

    /// Runs Hill Climbing from an arbitrary starting board.
    pub fn run_from(
        initial: Board,
        config: &HillClimbConfig,
    ) -> Result<HillClimbResult, SearchError> {
        Self::run_with_monitor(initial, config, &mut NoopMonitor)
    }

    /// Runs Hill Climbing, reporting progress to `monitor`.
    pub fn run_with_monitor(
        initial: Board,
        config: &HillClimbConfig,
        monitor: &mut dyn SearchMonitor,
    ) -> Result<HillClimbResult, SearchError> {
        let climb = climb(initial, config, monitor);
        if !climb.solved {
            return Err(SearchError::Exhausted {
                iterations: climb.iterations,
                best_fitness: climb.last.fitness(),
            });
        }
        Ok(HillClimbResult {
            solution: climb.last,
            iterations: climb.iterations,
            fitness_history: climb.history.into_vec(),
        })
    }
}

fn climb(initial: Board, config: &HillClimbConfig, monitor: &mut dyn SearchMonitor) -> Climb {
    let mut current = initial;
    let mut history = FitnessHistory::new(HISTORY_INTERVAL, current.fitness());
    let mut iteration = 0usize;

    monitor.on_start(&current);

    loop {
        if config.max_iterations > 0 && iteration >= config.max_iterations {
            monitor.on_end(&current, iteration);
            return Climb {
                last: current,
                solved: false,
                iterations: iteration,
                history,
            };
        }

        let neighbors = current.neighbors();
        let candidates = best_states(&neighbors);

        // Fresh generator per iteration: the seed sequence alone decides
        // every tie-break.
        let mut rng = create_rng(iteration_seed(config.base_seed, iteration));
        let picked = candidates[rng.random_range(0..candidates.len())].clone();

        monitor.on_iteration(iteration, &current, candidates.len());
        monitor.on_accepted(iteration, &picked);
        history.record(iteration + 1, picked.fitness());

        if picked.is_solution() {
            monitor.on_best_updated(iteration, &picked);
            monitor.on_end(&picked, iteration + 1);
            return Climb {
                last: picked,
                solved: true,
                iterations: iteration + 1,
                history,
            };
        }

        current = picked;
        iteration += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingMonitor {
        started: bool,
        iterations: usize,
        accepted: usize,
        ended_with: Option<usize>,
    }

    impl SearchMonitor for CountingMonitor {
        fn name(&self) -> &str {
            "CountingMonitor"
        }

        fn on_start(&mut self, _initial: &Board) {
            self.started = true;
        }

        fn on_iteration(&mut self, _iteration: usize, _current: &Board, candidates: usize) {
            assert!(candidates > 0);
            self.iterations += 1;
        }

        fn on_accepted(&mut self, _iteration: usize, _neighbor: &Board) {
            self.accepted += 1;
        }

        fn on_end(&mut self, _best: &Board, iterations: usize) {
            self.ended_with = Some(iterations);
        }
    }

    #[test]
    fn test_single_queen_terminates_immediately() {
        let result = HillClimbRunner::run(1, &HillClimbConfig::default()).unwrap();
        assert_eq!(result.solution.positions(), &[1]);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.fitness_history, vec![1, 1]);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(
            HillClimbRunner::run(0, &HillClimbConfig::default()),
            Err(SearchError::InvalidSize)
        );
    }

    #[test]
    fn test_unique_best_move_reaches_solution() {
        // [2,4,1,3] is the only solution one move away.
        let initial = Board::new(vec![2, 4, 1, 1]).unwrap();
        let result = HillClimbRunner::run_from(initial, &HillClimbConfig::default()).unwrap();
        assert_eq!(result.solution.positions(), &[2, 4, 1, 3]);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.fitness_history, vec![3, 4]);
    }

    #[test]
    fn test_known_runs_from_ones() {
        let config = HillClimbConfig::default().with_max_iterations(1_000);
        let cases: [(usize, &str, usize); 3] = [
            (4, "2,4,1,3", 26),
            (5, "1,4,2,5,3", 7),
            (8, "4,2,8,5,7,1,3,6", 120),
        ];
        for (size, rows, iterations) in cases {
            let result = HillClimbRunner::run(size, &config).unwrap();
            assert_eq!(result.solution.to_string(), rows, "size {size}");
            assert_eq!(result.iterations, iterations, "size {size}");
            assert!(result.solution.is_solution());
        }
    }

    #[test]
    fn test_cap_is_reported_as_exhausted() {
        // Two queens can never be placed safely.
        let config = HillClimbConfig::default().with_max_iterations(25);
        let err = HillClimbRunner::run(2, &config).unwrap_err();
        assert_eq!(
            err,
            SearchError::Exhausted {
                iterations: 25,
                best_fitness: 1
            }
        );
    }

    #[test]
    fn test_cap_one_short_of_solution_exhausts() {
        // The four-queens walk from all ones needs exactly 26 moves.
        let short = HillClimbConfig::default().with_max_iterations(25);
        assert!(matches!(
            HillClimbRunner::run(4, &short),
            Err(SearchError::Exhausted { iterations: 25, .. })
        ));

        let enough = HillClimbConfig::default().with_max_iterations(26);
        let solved = HillClimbRunner::run(4, &enough).unwrap();
        assert_eq!(solved.iterations, 26);
        assert_eq!(solved.solution.to_string(), "2,4,1,3");
    }

    #[test]
    fn test_history_bounded_on_long_unsolvable_run() {
        let config = HillClimbConfig::default().with_max_iterations(200_000);
        let climb = climb(Board::ones(2).unwrap(), &config, &mut NoopMonitor);
        assert!(!climb.solved);
        assert_eq!(climb.iterations, 200_000);
        assert_eq!(climb.history.len(), 200_000 / HISTORY_INTERVAL + 1);
    }

    #[test]
    fn test_reproducible() {
        let config = HillClimbConfig::default()
            .with_max_iterations(300)
            .with_base_seed(11);
        let a = HillClimbRunner::run(6, &config);
        let b = HillClimbRunner::run(6, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fitness_history_never_drops() {
        // The parent is always among its neighbors, so the best tie can't be worse.
        let config = HillClimbConfig::default().with_max_iterations(500);
        let initial = Board::ones(8).unwrap();
        let mut monitor = CountingMonitor::default();
        let result = HillClimbRunner::run_with_monitor(initial, &config, &mut monitor).unwrap();

        assert_eq!(result.iterations, 120);
        // Start, move 100, final move.
        assert_eq!(result.fitness_history.len(), 3);
        assert_eq!(result.fitness_history.last(), Some(&8));
        for window in result.fitness_history.windows(2) {
            assert!(window[1] >= window[0]);
        }
        assert!(monitor.started);
        assert_eq!(monitor.iterations, 120);
        assert_eq!(monitor.accepted, 120);
        assert_eq!(monitor.ended_with, Some(120));
    }
}

//! Local search for the N-Queens problem.
//!
//! Places N queens on an N×N board, one per column, so that no two attack
//! each other, using local search instead of backtracking:
//!
//! - **Hill Climbing**: steepest ascent over the one-move neighborhood with
//!   random tie-breaking.
//! - **Simulated Annealing**: the same best-neighbor selection with a
//!   temperature-driven acceptance test and a bounded iteration budget.
//!
//! Both searches draw randomness from a generator reseeded every iteration
//! with `base_seed + iteration`, so a run is fully reproducible.
//!
//! # Example
//!
//! ```
//! use u_nqueens::board::Board;
//! use u_nqueens::hill::{HillClimbConfig, HillClimbRunner};
//!
//! let start = Board::new(vec![2, 4, 1, 1]).unwrap();
//! let result = HillClimbRunner::run_from(start, &HillClimbConfig::default()).unwrap();
//! assert_eq!(result.solution.to_string(), "2,4,1,3");
//! ```

pub mod board;
pub mod error;
pub mod hill;
pub mod history;
pub mod monitor;
pub mod random;
pub mod sa;
mod solve;

pub use error::SearchError;
pub use solve::{solve, solve_with_monitor, Algorithm, Outcome, SolveConfig};

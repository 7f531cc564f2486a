//! Steepest-ascent Hill Climbing.
//!
//! Moves to the best neighbor of the current board at every step, breaking
//! ties uniformly at random. There is no restart and no plateau escape: the
//! search runs until it lands on a solution, or until an optional iteration
//! cap is reached.
//!
//! # References
//!
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, §4.1.1
//!   "Hill-climbing search" (8-queens formulation)

mod config;
mod runner;

pub use config::HillClimbConfig;
pub use runner::{HillClimbResult, HillClimbRunner, HISTORY_INTERVAL};

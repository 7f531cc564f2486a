//! N-Queens board state and its one-move neighborhood.
//!
//! A [`Board`] places exactly one queen per column. Safety is checked as a
//! prefix scan: a queen only looks at queens in earlier columns, and a board
//! is a solution when every queen passes that check.

mod neighborhood;
mod state;

pub use neighborhood::{best_states, max_fitness, neighbors};
pub use state::Board;

//! One-move neighborhood and best-fitness selection.

use super::state::Board;

/// Every board obtained by moving one queen to any row of its column.
///
/// The result is fully materialized in column-major, row-ascending order:
/// column 0 rows `1..=n`, then column 1 rows `1..=n`, and so on. Moving a
/// queen to its current row is included, so `board` appears among its own
/// neighbors. The result always holds exactly `n * n` boards.
///
/// Selection downstream picks by index, so this order is part of the
/// reproducibility contract of both searches.
pub fn neighbors(board: &Board) -> Vec<Board> {
    let size = board.size();
    let mut out = Vec::with_capacity(size * size);
    for column in 0..size {
        for row in 1..=size {
            out.push(board.with_move(column, row));
        }
    }
    out
}

/// Highest fitness among `states`, or `None` when `states` is empty.
pub fn max_fitness(states: &[Board]) -> Option<usize> {
    states.iter().map(Board::fitness).max()
}

/// All states whose fitness equals the maximum, in their original order.
///
/// Ties are common; callers choose among the returned states.
pub fn best_states(states: &[Board]) -> Vec<&Board> {
    match max_fitness(states) {
        Some(max) => states.iter().filter(|s| s.fitness() == max).collect(),
        None => Vec::new(),
    }
}

//! Error type shared by boards, configurations and runners.

use std::fmt;

/// Errors raised while building boards or running a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A board must hold at least one queen.
    InvalidSize,

    /// A queen was placed on a row outside `1..=size`.
    InvalidRow {
        /// Column of the offending queen.
        column: usize,
        /// Row that was requested.
        row: usize,
        /// Board size.
        size: usize,
    },

    /// A configuration value was rejected by `validate`.
    InvalidConfig(String),

    /// The algorithm selector did not name a known algorithm.
    UnknownAlgorithm(u32),

    /// A capped hill climb ran out of iterations before reaching a solution.
    Exhausted {
        /// Iterations performed.
        iterations: usize,
        /// Fitness of the last board visited.
        best_fitness: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidSize => write!(f, "board size must be at least 1"),
            SearchError::InvalidRow { column, row, size } => write!(
                f,
                "row {row} in column {column} is outside 1..={size}"
            ),
            SearchError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            SearchError::UnknownAlgorithm(alg) => write!(
                f,
                "unknown algorithm {alg} (expected 0 = hill climbing, 1 = simulated annealing)"
            ),
            SearchError::Exhausted {
                iterations,
                best_fitness,
            } => write!(
                f,
                "search exhausted after {iterations} iterations without a solution (fitness {best_fitness})"
            ),
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SearchError::InvalidSize.to_string(),
            "board size must be at least 1"
        );
        assert_eq!(
            SearchError::InvalidRow {
                column: 2,
                row: 9,
                size: 4
            }
            .to_string(),
            "row 9 in column 2 is outside 1..=4"
        );
        assert!(SearchError::UnknownAlgorithm(7).to_string().contains('7'));
        assert!(SearchError::Exhausted {
            iterations: 10,
            best_fitness: 3
        }
        .to_string()
        .contains("10 iterations"));
    }
}

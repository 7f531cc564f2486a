//! Immutable queen placement with memoized fitness.

use std::cell::OnceCell;
use std::fmt;

use crate::error::SearchError;

/// One candidate placement of N queens, one queen per column.
///
/// `positions[c]` is the 1-based row of the queen in column `c`. A board is
/// never mutated once built; moving a queen produces a new board.
///
/// Fitness (the number of queens that are safe with respect to every queen
/// in an earlier column) is computed on first use and cached. The cache is
/// an explicit "not yet computed" state, so a board whose fitness is
/// legitimately 0 is never recomputed.
///
/// # Examples
///
/// ```
/// use u_nqueens::board::Board;
///
/// let board = Board::new(vec![2, 4, 1, 3]).unwrap();
/// assert!(board.is_solution());
/// assert_eq!(board.fitness(), 4);
///
/// let ones = Board::ones(4).unwrap();
/// assert_eq!(ones.fitness(), 1);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Board {
    positions: Vec<usize>,
    fitness: OnceCell<usize>,
}

impl Board {
    /// Builds a board from 1-based row positions.
    ///
    /// Fails when `positions` is empty or a row lies outside `1..=len`.
    pub fn new(positions: Vec<usize>) -> Result<Self, SearchError> {
        let size = positions.len();
        if size == 0 {
            return Err(SearchError::InvalidSize);
        }
        if let Some((column, &row)) = positions
            .iter()
            .enumerate()
            .find(|&(_, &row)| row == 0 || row > size)
        {
            return Err(SearchError::InvalidRow { column, row, size });
        }
        Ok(Self::from_rows(positions))
    }

    /// The initial board: every queen on row 1.
    pub fn ones(size: usize) -> Result<Self, SearchError> {
        if size == 0 {
            return Err(SearchError::InvalidSize);
        }
        Ok(Self::from_rows(vec![1; size]))
    }

    fn from_rows(positions: Vec<usize>) -> Self {
        Self {
            positions,
            fitness: OnceCell::new(),
        }
    }

    /// Returns a copy of this board with the queen in `column` moved to `row`.
    ///
    /// Callers guarantee `column < size` and `row` in `1..=size`.
    pub(crate) fn with_move(&self, column: usize, row: usize) -> Self {
        let mut positions = self.positions.clone();
        positions[column] = row;
        Self::from_rows(positions)
    }

    /// Number of queens (and rows, and columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// Row of each queen, in column order.
    #[inline]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Returns true if no queen in an earlier column attacks `(column, row)`.
    ///
    /// Only columns `0..column` are inspected, so checking every column of a
    /// board costs O(N²).
    ///
    /// # Panics
    ///
    /// Panics if `column > size`.
    pub fn is_safe(&self, column: usize, row: usize) -> bool {
        self.positions[..column]
            .iter()
            .enumerate()
            .all(|(i, &other)| other != row && other.abs_diff(row) != column - i)
    }

    /// Returns true if every queen is safe from all queens before it.
    pub fn is_solution(&self) -> bool {
        self.positions
            .iter()
            .enumerate()
            .all(|(column, &row)| self.is_safe(column, row))
    }

    /// Number of columns whose queen is safe. Memoized.
    pub fn fitness(&self) -> usize {
        *self.fitness.get_or_init(|| {
            self.positions
                .iter()
                .enumerate()
                .filter(|&(column, &row)| self.is_safe(column, row))
                .count()
        })
    }

    /// Number of queens attacked by an earlier queen.
    #[inline]
    pub fn conflicts(&self) -> usize {
        self.size() - self.fitness()
    }

    /// Every board reachable by moving exactly one queen.
    ///
    /// See [`neighbors`](super::neighbors) for ordering guarantees.
    pub fn neighbors(&self) -> Vec<Board> {
        super::neighborhood::neighbors(self)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.positions == other.positions
    }
}

impl Eq for Board {}

impl std::hash::Hash for Board {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.positions.hash(state);
    }
}

impl TryFrom<Vec<usize>> for Board {
    type Error = SearchError;

    fn try_from(positions: Vec<usize>) -> Result<Self, Self::Error> {
        Board::new(positions)
    }
}

impl From<Board> for Vec<usize> {
    fn from(board: Board) -> Self {
        board.positions
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.positions.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

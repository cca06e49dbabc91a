//! Move coordinates for tic-tac-toe.
//!
//! An action only names a square. Whose mark lands there is derived from
//! the board it is applied to, so actions carry no player.

use super::types::Board;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A `(row, column)` coordinate designating a move.
///
/// Coordinates are not range-checked on construction; applying an
/// out-of-range action with [`crate::result`] fails with
/// [`crate::InvalidAction::OutOfBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
pub struct Action {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Action {
    /// Row-major board index (0-8), or `None` if either coordinate is out of range.
    pub fn index(&self) -> Option<usize> {
        (self.row < Board::SIZE && self.col < Board::SIZE).then(|| self.row * Board::SIZE + self.col)
    }

    /// Creates an action from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Board::SIZE * Board::SIZE).then(|| Self::new(index / Board::SIZE, index % Board::SIZE))
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines as row-major indices, in scan order.
///
/// Rows top to bottom, then columns left to right, then the main
/// diagonal, then the anti-diagonal.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first line in [`WINNING_LINES`] holding three
/// equal marks, `None` otherwise. Only a board that breaks the
/// single-winner invariant can depend on this order.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    let squares = board.squares();

    for [a, b, c] in WINNING_LINES {
        let sq = squares[a];
        if let Square::Occupied(player) = sq
            && sq == squares[b]
            && sq == squares[c]
        {
            return Some(player);
        }
    }

    None
}

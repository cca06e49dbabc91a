//! Terminal detection and scoring.

use super::super::{Board, Outcome, Utility};
use super::draw::is_full;
use super::win::winner;
use tracing::instrument;

/// Returns true if the game is over: someone has won or the board is full.
#[instrument(level = "trace")]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a board from X's perspective: +1 X won, -1 O won, 0 otherwise.
///
/// Total over all boards. An unfinished board also scores 0, the same as a
/// draw; use [`outcome`] to tell the two apart.
#[instrument(level = "trace")]
pub fn utility(board: &Board) -> Utility {
    winner(board).map_or(0, |player| player.utility())
}

/// Classifies a board as won, drawn or still in progress.
#[instrument(level = "trace")]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::Won(player),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

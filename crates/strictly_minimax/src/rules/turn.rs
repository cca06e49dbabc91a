//! Turn derivation for tic-tac-toe.

use super::super::{Board, Player};
use tracing::instrument;

/// Returns the player who moves next on a board.
///
/// X moves first and turns alternate, so X is to move whenever both sides
/// have the same number of marks. The answer is meaningless on a finished
/// board but is still defined.
#[instrument(level = "trace")]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

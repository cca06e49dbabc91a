//! State transitions for tic-tac-toe.

use super::super::{Action, Board, InvalidAction, Square};
use super::turn::player;
use tracing::instrument;

/// Returns the starting board: every square empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns every empty square as an action, in row-major order.
///
/// Callers may treat the result as a set. The search relies on this order
/// to break ties between equally good moves.
#[instrument(level = "trace")]
pub fn actions(board: &Board) -> Vec<Action> {
    board
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, s)| **s == Square::Empty)
        .filter_map(|(i, _)| Action::from_index(i))
        .collect()
}

/// Returns the board that results from the player to move marking `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`InvalidAction::OutOfBounds`] if either coordinate is outside
/// 0-2, and [`InvalidAction::Occupied`] if the square is already marked.
#[instrument(level = "trace")]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    let index = action.index().ok_or(InvalidAction::OutOfBounds(action))?;

    if board.squares()[index] != Square::Empty {
        return Err(InvalidAction::Occupied(action));
    }

    Ok(board.with_square(index, Square::Occupied(player(board))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_initial_state_is_empty() {
        let board = initial_state();
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_actions_row_major() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        assert_eq!(
            actions(&board),
            vec![
                Action::new(0, 1),
                Action::new(1, 0),
                Action::new(1, 2),
                Action::new(2, 1),
                Action::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_actions_on_full_board() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(actions(&board).is_empty());
    }

    #[test]
    fn test_result_places_current_mark() {
        let board = initial_state();
        let next = result(&board, Action::new(1, 1)).unwrap();
        assert_eq!(next.get(Action::new(1, 1)), Some(Square::Occupied(Player::X)));

        let next = result(&next, Action::new(0, 0)).unwrap();
        assert_eq!(next.get(Action::new(0, 0)), Some(Square::Occupied(Player::O)));
    }

    #[test]
    fn test_result_does_not_mutate_input() {
        let board: Board = "X../.../...".parse().unwrap();
        let before = board;
        let _ = result(&board, Action::new(2, 2)).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_result_applies_to_unreachable_board() {
        // Counts differ, so O is handed the move again. Contents are not judged.
        let board: Board = "O../.../...".parse().unwrap();
        let next = result(&board, Action::new(1, 1)).unwrap();
        assert_eq!(next.get(Action::new(1, 1)), Some(Square::Occupied(Player::O)));
    }

    #[test]
    fn test_result_rejects_occupied() {
        let board: Board = "X../.../...".parse().unwrap();
        assert_eq!(
            result(&board, Action::new(0, 0)),
            Err(InvalidAction::Occupied(Action::new(0, 0)))
        );
    }

    #[test]
    fn test_result_rejects_out_of_bounds() {
        let board = initial_state();
        assert_eq!(
            result(&board, Action::new(3, 0)),
            Err(InvalidAction::OutOfBounds(Action::new(3, 0)))
        );
        assert_eq!(
            result(&board, Action::new(0, 7)),
            Err(InvalidAction::OutOfBounds(Action::new(0, 7)))
        );
    }
}

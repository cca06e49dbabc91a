//! Property tests for the rules, checked over every reachable board.

mod common;

use common::{board, reachable_boards};
use strictly_minimax::{
    Action, InvalidAction, InvariantSet, Outcome, Player, ReachableBoard, Square, actions,
    initial_state, is_full, outcome, player, result, terminal, utility, winner,
};

#[test]
fn test_reachable_board_count() {
    // Well-known count of distinct legal positions, including the empty board.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_reachable_boards_satisfy_invariants() {
    for b in reachable_boards() {
        assert!(ReachableBoard::check_all(&b).is_ok(), "board {}", b);
    }
}

#[test]
fn test_terminal_iff_winner_or_no_actions() {
    for b in reachable_boards() {
        let expected = winner(&b).is_some() || actions(&b).is_empty();
        assert_eq!(terminal(&b), expected, "board {}", b);
    }
}

#[test]
fn test_result_changes_exactly_one_square() {
    for b in reachable_boards().into_iter().filter(|b| !terminal(b)) {
        let before = b;
        for action in actions(&b) {
            let next = result(&b, action).unwrap();
            let changed: Vec<usize> = (0..9)
                .filter(|&i| b.squares()[i] != next.squares()[i])
                .collect();
            assert_eq!(changed, vec![action.index().unwrap()], "board {}", b);
            assert_eq!(next.get(action), Some(Square::Occupied(player(&b))));
        }
        assert_eq!(b, before);
    }
}

#[test]
fn test_result_rejects_every_occupied_square() {
    let b = board("XO./.X./..O");
    for index in 0..9 {
        let action = Action::from_index(index).unwrap();
        match b.squares()[index] {
            Square::Empty => assert!(result(&b, action).is_ok()),
            Square::Occupied(_) => {
                assert_eq!(result(&b, action), Err(InvalidAction::Occupied(action)))
            }
        }
    }
}

#[test]
fn test_result_rejects_out_of_range_coordinates() {
    let b = initial_state();
    for action in [Action::new(3, 0), Action::new(0, 3), Action::new(3, 3), Action::new(10, 1)] {
        let err = result(&b, action).unwrap_err();
        assert_eq!(err, InvalidAction::OutOfBounds(action));
        assert_eq!(err.action(), action);
        assert!(err.to_string().contains("outside the board"));
    }
}

#[test]
fn test_turns_alternate() {
    assert_eq!(player(&initial_state()), Player::X);

    for b in reachable_boards().into_iter().filter(|b| !terminal(b)) {
        let mover = player(&b);
        for action in actions(&b) {
            let next = result(&b, action).unwrap();
            assert_eq!(player(&next), mover.opponent(), "board {}", b);
        }
    }
}

#[test]
fn test_utility_matches_winner() {
    for b in reachable_boards().into_iter().filter(terminal) {
        let expected = match winner(&b) {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        };
        assert_eq!(utility(&b), expected, "board {}", b);
    }
}

#[test]
fn test_outcome_agrees_with_rules() {
    for b in reachable_boards() {
        let expected = match winner(&b) {
            Some(p) => Outcome::Won(p),
            None if is_full(&b) => Outcome::Draw,
            None => Outcome::InProgress,
        };
        assert_eq!(outcome(&b), expected);
        assert_eq!(outcome(&b).is_finished(), terminal(&b));
    }
}

#[test]
fn test_queries_are_idempotent() {
    for b in reachable_boards() {
        assert_eq!(winner(&b), winner(&b));
        assert_eq!(terminal(&b), terminal(&b));
        assert_eq!(utility(&b), utility(&b));
    }
}

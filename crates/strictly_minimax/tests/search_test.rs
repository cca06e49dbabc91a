//! Tests for the exhaustive minimax search.

mod common;

use common::{board, reachable_boards};
use strictly_minimax::{
    Action, Decision, Player, actions, initial_state, minimax, minimax_parallel,
    minimax_with_stats, player, result, terminal, utility,
};

#[test]
fn test_empty_board_is_a_draw() {
    let decision = minimax(&initial_state());
    assert_eq!(*decision.value(), 0);
    // Every opening draws, so the first enumerated square is kept.
    assert_eq!(*decision.action(), Some(Action::new(0, 0)));
}

#[test]
fn test_full_tree_size() {
    let (_, stats) = minimax_with_stats(&initial_state());
    assert_eq!(*stats.nodes(), 549_946);
    assert_eq!(*stats.leaves(), 255_168);
}

#[test]
fn test_winning_move_scenario() {
    let b = board("XX./OO./...");
    assert_eq!(player(&b), Player::X);
    assert_eq!(minimax(&b), Decision::new(1, Some(Action::new(0, 2))));
}

#[test]
fn test_forced_block_scenario() {
    let b = board("XOX/.O./...");
    assert_eq!(minimax(&b), Decision::new(0, Some(Action::new(2, 1))));
}

#[test]
fn test_decision_is_consistent_with_children() {
    // Positions with at least four marks keep the full sweep quick.
    for b in reachable_boards()
        .into_iter()
        .filter(|b| b.squares().iter().filter(|s| **s != strictly_minimax::Square::Empty).count() >= 4)
    {
        let decision = minimax(&b);
        if terminal(&b) {
            assert_eq!(decision, Decision::new(utility(&b), None));
            continue;
        }

        let children: Vec<(Action, i32)> = actions(&b)
            .into_iter()
            .map(|a| (a, *minimax(&result(&b, a).unwrap()).value()))
            .collect();
        let best = match player(&b) {
            Player::X => children.iter().map(|(_, v)| *v).max(),
            Player::O => children.iter().map(|(_, v)| *v).min(),
        };
        let first_best = children.iter().find(|(_, v)| Some(*v) == best).map(|(a, _)| *a);

        assert_eq!(Some(*decision.value()), best, "board {}", b);
        assert_eq!(*decision.action(), first_best, "board {}", b);
    }
}

#[test]
fn test_optimal_self_play_draws() {
    let mut b = initial_state();
    while !terminal(&b) {
        let decision = minimax(&b);
        assert_eq!(*decision.value(), 0);
        b = result(&b, decision.action().unwrap()).unwrap();
    }
    assert_eq!(utility(&b), 0);
}

#[test]
fn test_parallel_matches_sequential_on_openings() {
    for a in actions(&initial_state()) {
        let b = result(&initial_state(), a).unwrap();
        assert_eq!(minimax_parallel(&b), minimax(&b), "board {}", b);
    }
}

#[test]
fn test_decision_serializes() {
    let decision = minimax(&board("XX./OO./..."));
    let json = serde_json::to_value(decision).unwrap();
    assert_eq!(json["value"], 1);
    assert_eq!(json["action"]["row"], 0);
    assert_eq!(json["action"]["col"], 2);
}

//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use strictly_minimax::{Board, actions, initial_state, result, terminal};

/// Parses a board literal, panicking on bad test input.
pub fn board(s: &str) -> Board {
    s.parse().unwrap()
}

/// Every board reachable from the initial state under legal play.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];

    while let Some(b) = stack.pop() {
        if !seen.insert(b) {
            continue;
        }
        if terminal(&b) {
            continue;
        }
        for action in actions(&b) {
            stack.push(result(&b, action).unwrap());
        }
    }

    seen.into_iter().collect()
}

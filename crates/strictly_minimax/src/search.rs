//! Exhaustive minimax search.
//!
//! The search walks the complete game tree below a board. X maximizes the
//! utility and O minimizes it, so each ply alternates between
//! [`max_value`] and [`min_value`]. There is no pruning and no depth limit:
//! the value returned is the exact game-theoretic value of the board.
//!
//! Ties between equally good actions go to the action enumerated first by
//! [`actions`] (row-major), because the running best only changes on a
//! strictly better value.

use super::rules::{actions, player, result, terminal, utility};
use super::{Action, Board, Player, Utility};
use derive_getters::Getters;
use derive_new::new;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Optimal value of a board and an action achieving it.
///
/// `action` is `None` when the board is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Decision {
    /// Game-theoretic value from X's perspective.
    value: Utility,
    /// First-enumerated action achieving `value`.
    action: Option<Action>,
}

impl Decision {
    fn leaf(board: &Board) -> Self {
        Self::new(utility(board), None)
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SearchStats {
    /// Boards visited, including the root.
    nodes: u64,
    /// Terminal boards visited.
    leaves: u64,
}

/// Computes the optimal value and move for the player to move.
///
/// Returns `(utility(board), None)` for a terminal board. Otherwise runs
/// [`max_value`] when X is to move and [`min_value`] when O is.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn minimax(board: &Board) -> Decision {
    let (decision, _) = minimax_with_stats(board);
    decision
}

/// Same as [`minimax`], also reporting how much of the tree was visited.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn minimax_with_stats(board: &Board) -> (Decision, SearchStats) {
    let mut stats = SearchStats::default();
    let decision = search(board, &mut stats);
    debug!(
        value = decision.value,
        action = ?decision.action,
        nodes = stats.nodes,
        leaves = stats.leaves,
        "Search complete"
    );
    (decision, stats)
}

/// Best outcome X can force from `board`, with the move that forces it.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn max_value(board: &Board) -> Decision {
    maximize(board, &mut SearchStats::default())
}

/// Best outcome O can force from `board`, with the move that forces it.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn min_value(board: &Board) -> Decision {
    minimize(board, &mut SearchStats::default())
}

/// Same result as [`minimax`], with the root's subtrees searched in parallel.
///
/// Child values are collected in enumeration order and folded sequentially
/// with the same strict comparison, so ties resolve exactly as in
/// [`minimax`].
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn minimax_parallel(board: &Board) -> Decision {
    if terminal(board) {
        return Decision::leaf(board);
    }

    let mover = player(board);
    let replies: Vec<Option<(Action, Utility)>> = actions(board)
        .into_par_iter()
        .map(|action| {
            let next = child(board, action)?;
            let mut stats = SearchStats::default();
            let reply = match mover {
                Player::X => minimize(&next, &mut stats),
                Player::O => maximize(&next, &mut stats),
            };
            Some((action, reply.value))
        })
        .collect();

    let mut best = match mover {
        Player::X => Decision::new(Utility::MIN, None),
        Player::O => Decision::new(Utility::MAX, None),
    };
    for (action, value) in replies.into_iter().flatten() {
        let improves = match mover {
            Player::X => value > best.value,
            Player::O => value < best.value,
        };
        if improves {
            best = Decision::new(value, Some(action));
        }
    }

    let best = settle(board, best);
    debug!(value = best.value, action = ?best.action, "Parallel search complete");
    best
}

fn search(board: &Board, stats: &mut SearchStats) -> Decision {
    if terminal(board) {
        stats.nodes += 1;
        stats.leaves += 1;
        return Decision::leaf(board);
    }

    match player(board) {
        Player::X => maximize(board, stats),
        Player::O => minimize(board, stats),
    }
}

fn maximize(board: &Board, stats: &mut SearchStats) -> Decision {
    stats.nodes += 1;
    if terminal(board) {
        stats.leaves += 1;
        return Decision::leaf(board);
    }

    // Utility::MIN stands in for negative infinity.
    let mut best = Decision::new(Utility::MIN, None);
    for action in actions(board) {
        let Some(next) = child(board, action) else {
            continue;
        };
        let reply = minimize(&next, stats);
        if reply.value > best.value {
            best = Decision::new(reply.value, Some(action));
        }
    }
    settle(board, best)
}

fn minimize(board: &Board, stats: &mut SearchStats) -> Decision {
    stats.nodes += 1;
    if terminal(board) {
        stats.leaves += 1;
        return Decision::leaf(board);
    }

    // Utility::MAX stands in for positive infinity.
    let mut best = Decision::new(Utility::MAX, None);
    for action in actions(board) {
        let Some(next) = child(board, action) else {
            continue;
        };
        let reply = maximize(&next, stats);
        if reply.value < best.value {
            best = Decision::new(reply.value, Some(action));
        }
    }
    settle(board, best)
}

/// Replaces an infinity sentinel left by a non-terminal board whose every
/// child was rejected with the board's own utility.
fn settle(board: &Board, best: Decision) -> Decision {
    if best.action.is_some() {
        return best;
    }
    debug_assert!(false, "no action could be applied to {}", board);
    error!(board = %board, "No child searched, scoring the board as a leaf");
    Decision::leaf(board)
}

/// Applies an action produced by [`actions`] on the same board.
fn child(board: &Board, action: Action) -> Option<Board> {
    match result(board, action) {
        Ok(next) => Some(next),
        Err(e) => {
            error!(board = %board, error = %e, "Generated action was rejected");
            None
        }
    }
}

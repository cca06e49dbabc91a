//! Strictly Minimax - perfect-play tic-tac-toe
//!
//! This library computes the game-theoretically optimal move from any
//! reachable tic-tac-toe position by walking the complete game tree.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a [`Board`] value: turn derivation,
//!   legal actions, transitions, win/draw detection, scoring
//! - **Search**: exhaustive minimax built from two mutually recursive duals
//!   ([`max_value`] and [`min_value`])
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{initial_state, minimax};
//!
//! let decision = minimax(&initial_state());
//! assert_eq!(*decision.value(), 0);
//! assert!(decision.action().is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod error;
mod invariants;
mod rules;
mod search;
mod types;

// Crate-level exports - Domain types
pub use action::Action;
pub use types::{Board, Outcome, Player, Square, Utility};

// Crate-level exports - Errors
pub use error::{BoardParseError, InvalidAction};

// Crate-level exports - Invariants
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant, ReachableBoard,
    SingleWinnerInvariant,
};

// Crate-level exports - Rules layer
pub use rules::{
    WINNING_LINES, actions, initial_state, is_full, outcome, player, result, terminal, utility,
    winner,
};

// Crate-level exports - Search layer
pub use search::{
    Decision, SearchStats, max_value, min_value, minimax, minimax_parallel, minimax_with_stats,
};

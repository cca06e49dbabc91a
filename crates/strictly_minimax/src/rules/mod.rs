//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions over a [`Board`](crate::Board).
//! Nothing here stores state: whose turn it is, which moves are legal and
//! how the game ended are all recomputed from the board's contents.

pub mod draw;
pub mod score;
pub mod transition;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use score::{outcome, terminal, utility};
pub use transition::{actions, initial_state, result};
pub use turn::player;
pub use win::{WINNING_LINES, winner};

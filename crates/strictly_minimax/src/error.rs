//! Error types for the rules layer.

use super::action::Action;
use derive_more::{Display, Error};
use tracing::instrument;

/// Error raised when an action cannot be applied to a board.
///
/// This is the only error the rules produce. The search never raises it,
/// since it only applies actions it generated itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidAction {
    /// A coordinate lies outside the 3x3 grid.
    #[display("Action {} is outside the board", _0)]
    OutOfBounds(#[error(not(source))] Action),

    /// The square at the action is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] Action),
}

impl InvalidAction {
    /// Returns the offending action.
    pub fn action(&self) -> Action {
        match self {
            InvalidAction::OutOfBounds(action) | InvalidAction::Occupied(action) => *action,
        }
    }
}

/// Board text could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

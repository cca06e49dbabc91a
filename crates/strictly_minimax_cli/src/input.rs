//! Validation of boards supplied on the command line.

use derive_more::{Display, Error};
use strictly_minimax::{Board, InvariantSet, ReachableBoard};
use tracing::{debug, instrument};

/// A board that legal play from the empty grid can never produce.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Board {} is unreachable: {}", board, reasons)]
pub struct UnreachableBoard {
    /// Board in compact text form.
    pub board: String,
    /// Violated properties, joined with `; `.
    pub reasons: String,
}

/// Rejects boards that break the reachability invariants.
///
/// The engine does not judge board contents, so this runs once on input
/// before any search starts.
#[instrument(skip(board), fields(board = %board))]
pub fn check_reachable(board: &Board) -> Result<(), UnreachableBoard> {
    ReachableBoard::check_all(board).map_err(|violations| {
        let reasons = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        debug!(%reasons, "Rejecting board");
        UnreachableBoard {
            board: board.to_string(),
            reasons,
        }
    })
}

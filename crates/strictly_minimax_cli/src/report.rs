//! Engine results prepared for printing.

use serde::Serialize;
use strictly_minimax::{
    Action, Board, Outcome, Player, Utility, actions, minimax, minimax_parallel,
    minimax_with_stats, outcome, player, result,
};
use tracing::{info, instrument, warn};

/// Describes a minimax value in words.
pub fn describe_value(value: Utility) -> &'static str {
    match value {
        v if v > 0 => "X wins",
        v if v < 0 => "O wins",
        _ => "draw",
    }
}

/// Result of the `solve` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    /// Board in compact text form.
    pub board: String,
    /// Player to move.
    pub to_move: Player,
    /// Current outcome of the board.
    pub outcome: Outcome,
    /// Minimax value under optimal play.
    pub value: Utility,
    /// Optimal action, if the game is not over.
    pub action: Option<Action>,
    /// Boards visited (sequential search only).
    pub nodes: Option<u64>,
    /// Terminal boards visited (sequential search only).
    pub leaves: Option<u64>,
}

impl SolveReport {
    /// Solves a board.
    #[instrument(skip(board), fields(board = %board))]
    pub fn compute(board: &Board, parallel: bool) -> Self {
        let (decision, stats) = if parallel {
            (minimax_parallel(board), None)
        } else {
            let (decision, stats) = minimax_with_stats(board);
            (decision, Some(stats))
        };
        info!(value = decision.value(), action = ?decision.action(), "Solved board");

        Self {
            board: board.to_string(),
            to_move: player(board),
            outcome: outcome(board),
            value: *decision.value(),
            action: *decision.action(),
            nodes: stats.map(|s| *s.nodes()),
            leaves: stats.map(|s| *s.leaves()),
        }
    }

    /// Renders the report as text.
    pub fn render(&self, board: &Board) -> String {
        let mut out = format!("{}\n\n", board.display());
        out.push_str(&format!("Outcome: {}\n", self.outcome));
        if !self.outcome.is_finished() {
            out.push_str(&format!("To move: {}\n", self.to_move));
        }
        out.push_str(&format!(
            "Value: {} ({})\n",
            self.value,
            describe_value(self.value)
        ));
        match self.action {
            Some(action) => out.push_str(&format!("Best move: {}\n", action)),
            None => out.push_str("Best move: none (game over)\n"),
        }
        if let (Some(nodes), Some(leaves)) = (self.nodes, self.leaves) {
            out.push_str(&format!("Searched: {} nodes, {} leaves\n", nodes, leaves));
        }
        out
    }
}

/// Value of one legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveValue {
    /// The move.
    pub action: Action,
    /// Minimax value of the board after the move.
    pub value: Utility,
}

/// Result of the `analyze` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeReport {
    /// Board in compact text form.
    pub board: String,
    /// Player to move.
    pub to_move: Player,
    /// Every legal move with its value, in enumeration order.
    pub moves: Vec<MoveValue>,
}

impl AnalyzeReport {
    /// Evaluates every legal move on a board.
    ///
    /// A finished board has no legal moves worth playing, so `moves` is
    /// empty even if squares remain.
    #[instrument(skip(board), fields(board = %board))]
    pub fn compute(board: &Board) -> Self {
        let moves = if outcome(board).is_finished() {
            Vec::new()
        } else {
            actions(board)
                .into_iter()
                .filter_map(|action| match result(board, action) {
                    Ok(next) => Some(MoveValue {
                        action,
                        value: *minimax(&next).value(),
                    }),
                    Err(e) => {
                        warn!(error = %e, "Skipping rejected action");
                        None
                    }
                })
                .collect()
        };

        Self {
            board: board.to_string(),
            to_move: player(board),
            moves,
        }
    }

    /// Renders the report as text.
    pub fn render(&self, board: &Board) -> String {
        let mut out = format!("{}\n\n", board.display());
        if self.moves.is_empty() {
            out.push_str(&format!("Game over: {}\n", outcome(board)));
            return out;
        }
        out.push_str(&format!("To move: {}\n", self.to_move));
        for mv in &self.moves {
            out.push_str(&format!(
                "  {} -> {} ({})\n",
                mv.action,
                mv.value,
                describe_value(mv.value)
            ));
        }
        out
    }
}

/// Result of the `selfplay` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfPlayReport {
    /// Boards from the start to the end of the game, in compact text form.
    pub boards: Vec<String>,
    /// Moves played, one fewer than `boards`.
    pub moves: Vec<Action>,
    /// Final outcome.
    pub outcome: Outcome,
    #[serde(skip)]
    positions: Vec<Board>,
}

impl SelfPlayReport {
    /// Plays optimal moves for both sides until the game ends.
    #[instrument(skip(start), fields(start = %start))]
    pub fn compute(start: &Board) -> Self {
        let mut positions = vec![*start];
        let mut moves = Vec::new();
        let mut board = *start;

        while let Some(action) = *minimax(&board).action() {
            match result(&board, action) {
                Ok(next) => {
                    info!(player = %player(&board), %action, "Engine move");
                    board = next;
                    moves.push(action);
                    positions.push(board);
                }
                Err(e) => {
                    warn!(error = %e, "Engine produced a rejected action");
                    break;
                }
            }
        }

        Self {
            boards: positions.iter().map(Board::to_string).collect(),
            moves,
            outcome: outcome(&board),
            positions,
        }
    }

    /// Renders every position of the game as text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, board) in self.positions.iter().enumerate() {
            if i > 0 {
                out.push_str(&format!(
                    "Move {}: {} plays {}\n",
                    i,
                    player(&self.positions[i - 1]),
                    self.moves[i - 1]
                ));
            }
            out.push_str(&board.display());
            out.push_str("\n\n");
        }
        out.push_str(&format!("Result: {}\n", self.outcome));
        out
    }
}

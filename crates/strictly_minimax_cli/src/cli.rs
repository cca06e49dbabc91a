//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::Board;

/// Strictly Minimax - perfect-play tic-tac-toe solver
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Perfect-play tic-tac-toe solver", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "strictly_minimax.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
///
/// Boards are nine cells in row-major order: `X`, `O`, and `.` for empty,
/// optionally split into rows with `/`, e.g. `XX./OO./...`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the optimal value and move for the player to move
    Solve {
        /// Board to solve
        board: Board,

        /// Search the root's subtrees in parallel (`--parallel=false` overrides the config)
        #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
        parallel: Option<bool>,

        /// Print JSON instead of text (`--json=false` overrides the config)
        #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
        json: Option<bool>,
    },

    /// Show the minimax value of every legal move
    Analyze {
        /// Board to analyze
        board: Board,

        /// Print JSON instead of text (`--json=false` overrides the config)
        #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
        json: Option<bool>,
    },

    /// Let the engine play both sides to the end of the game
    Selfplay {
        /// Starting board
        #[arg(default_value = ".........")]
        board: Board,

        /// Print JSON instead of text (`--json=false` overrides the config)
        #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
        json: Option<bool>,
    },
}

impl Command {
    /// Board the command starts from.
    pub fn board(&self) -> &Board {
        match self {
            Command::Solve { board, .. }
            | Command::Analyze { board, .. }
            | Command::Selfplay { board, .. } => board,
        }
    }
}

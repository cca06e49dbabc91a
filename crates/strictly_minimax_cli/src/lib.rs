//! Strictly Minimax command-line host
//!
//! Parses boards from text, runs the perfect-play engine and renders the
//! results as text or JSON. The engine itself lives in
//! [`strictly_minimax`]; this crate only supplies boards and prints moves.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod report;

pub use cli::{Cli, Command};
pub use config::{ConfigError, SolverConfig};
pub use input::{UnreachableBoard, check_reachable};
pub use report::{AnalyzeReport, MoveValue, SelfPlayReport, SolveReport, describe_value};

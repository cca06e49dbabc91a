//! Strictly Minimax - command-line solver
//!
//! Perfect-play tic-tac-toe from any position.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use strictly_minimax_cli::{
    AnalyzeReport, Cli, Command, SelfPlayReport, SolveReport, SolverConfig, check_reachable,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = SolverConfig::load(&cli.config)?;
    initialize_tracing(config.log_filter());
    debug!(?config, "Configuration loaded");

    let board = *cli.command.board();
    check_reachable(&board)?;

    match cli.command {
        Command::Solve { parallel, json, .. } => {
            let config = config.with_overrides(parallel, json);
            info!(%board, parallel = *config.parallel(), "Solving board");
            let report = SolveReport::compute(&board, *config.parallel());
            emit(&report, *config.json(), || report.render(&board))
        }
        Command::Analyze { json, .. } => {
            let config = config.with_overrides(None, json);
            info!(%board, "Analyzing board");
            let report = AnalyzeReport::compute(&board);
            emit(&report, *config.json(), || report.render(&board))
        }
        Command::Selfplay { json, .. } => {
            let config = config.with_overrides(None, json);
            info!(%board, "Starting self-play");
            let report = SelfPlayReport::compute(&board);
            emit(&report, *config.json(), || report.render())
        }
    }
}

/// Prints a report as pretty JSON or as rendered text.
fn emit<T: Serialize>(report: &T, json: bool, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}

#[instrument]
fn initialize_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();

    debug!("Tracing initialized");
}

//! Command-Line Interface Layer
//!
//! This crate is the user-facing surface of the insurance book: a clap
//! command tree over the book operations, one process per command. Every
//! invocation loads the snapshot, runs exactly one operation, saves when
//! the book changed, and renders the result as text or JSON.
//!
//! # Example
//!
//! ```bash
//! insurabook client add --id walker-a --name "Avery Walker" --birthday 1990-06-15
//! insurabook policy add --client walker-a --type P1 \
//!     --effective 2026-01-01 --expiry 2026-12-31 --limit 15000
//! insurabook claim list --output json
//! ```

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Commands, OutputFormat};
pub use config::CliConfig;

/// Runs one parsed command line against the configured snapshot
///
/// The `--data` flag wins over the configured data file, so scripts can
/// point a single invocation at another book.
pub fn run(cli: Cli, config: &CliConfig) -> anyhow::Result<()> {
    let data_file = cli
        .data
        .clone()
        .unwrap_or_else(|| config.data_file.clone());
    commands::execute(cli, data_file)
}

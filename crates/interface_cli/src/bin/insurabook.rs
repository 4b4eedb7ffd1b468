//! Insurabook - Insurance Book CLI Binary
//!
//! One process per command: load the snapshot, run the command, save when
//! the book changed, print the result.
//!
//! # Usage
//!
//! ```bash
//! # First run bootstraps a sample book
//! insurabook client list
//!
//! # Mutations persist immediately
//! insurabook client add --id walker-a --name "Avery Walker" --birthday 1990-06-15
//!
//! # Point at another snapshot for one invocation
//! insurabook --data /tmp/book.json policy list
//! ```
//!
//! # Environment Variables
//!
//! * `INSURA_DATA_FILE` - Snapshot file path (default: ./data/insurabook.json)
//! * `INSURA_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interface_cli::{Cli, CliConfig};

fn main() {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    init_tracing(&config.log_level);

    if let Err(err) = interface_cli::run(cli, &config) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Initializes the tracing subscriber for structured logging
///
/// Logs go to stderr so `--output json` keeps stdout machine-readable.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

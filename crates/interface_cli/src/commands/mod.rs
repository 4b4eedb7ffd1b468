//! Command handlers
//!
//! Each handler parses its raw arguments into the validated value objects,
//! runs one book operation, persists on success, and renders the result.
//! The session owns the loaded book and the store it came from; handlers
//! call [`Session::commit`] after every successful mutation so the snapshot
//! on disk always matches what the user was just told.

pub mod claim;
pub mod client;
pub mod policy;
pub mod policy_type;

use domain_book::Book;
use infra_store::{BookStore, Preferences};
use serde::Serialize;
use tracing::debug;

use crate::cli::{Cli, Commands, OutputFormat};

/// Shared state one command invocation runs against
pub struct Session {
    store: BookStore,
    book: Book,
    preferences: Preferences,
    output: OutputFormat,
    quiet: bool,
}

impl Session {
    /// Opens a session by loading the snapshot behind `store`
    pub fn open(store: BookStore, output: OutputFormat, quiet: bool) -> Self {
        let (book, preferences) = store.load();
        Self {
            store,
            book,
            preferences,
            output,
            quiet,
        }
    }

    pub(crate) fn book(&self) -> &Book {
        &self.book
    }

    pub(crate) fn book_mut(&mut self) -> &mut Book {
        &mut self.book
    }

    /// Writes the book back to its snapshot
    pub(crate) fn commit(&self) -> anyhow::Result<()> {
        self.store.save(&self.book, &self.preferences)?;
        Ok(())
    }

    /// Prints a one-line confirmation, or its JSON equivalent
    ///
    /// Text confirmations honor `--quiet`; JSON output is machine-facing
    /// and always printed.
    pub(crate) fn confirm(
        &self,
        line: String,
        json: serde_json::Value,
    ) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Text => {
                if !self.quiet {
                    println!("{line}");
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&json)?),
        }
        Ok(())
    }

    /// Prints a collection, one described line each or as a JSON array
    pub(crate) fn render_all<T, F>(&self, items: &[&T], describe: F) -> anyhow::Result<()>
    where
        T: Serialize,
        F: Fn(&T) -> String,
    {
        match self.output {
            OutputFormat::Text => {
                for item in items {
                    println!("{}", describe(item));
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
        }
        Ok(())
    }

    /// Prints a single entity, detailed text or serialized in full
    pub(crate) fn render_one<T: Serialize>(&self, item: &T, text: String) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Text => println!("{text}"),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(item)?),
        }
        Ok(())
    }
}

/// Routes a parsed command line to its handler
pub fn dispatch(command: Commands, session: &mut Session) -> anyhow::Result<()> {
    match command {
        Commands::Client(command) => client::run(command, session),
        Commands::PolicyType(command) => policy_type::run(command, session),
        Commands::Policy(command) => policy::run(command, session),
        Commands::Claim(command) => claim::run(command, session),
    }
}

/// Convenience wrapper: open a session from the command line and run it
pub fn execute(cli: Cli, data_file: std::path::PathBuf) -> anyhow::Result<()> {
    debug!("Running against snapshot {}", data_file.display());
    let store = BookStore::new(data_file);
    let mut session = Session::open(store, cli.output, cli.quiet);
    dispatch(cli.command, &mut session)
}

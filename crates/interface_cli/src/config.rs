//! CLI configuration

use std::path::PathBuf;

use serde::Deserialize;

/// Runtime configuration for the command-line interface
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Snapshot file holding the book
    pub data_file: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./data/insurabook.json"),
            log_level: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from the environment
    ///
    /// `INSURA_`-prefixed variables override the defaults, so
    /// `INSURA_DATA_FILE=/tmp/book.json` points the CLI at another
    /// snapshot and `INSURA_LOG_LEVEL=debug` raises the log level.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("data_file", "./data/insurabook.json")?
            .set_default("log_level", "info")?
            .add_source(config::Environment::with_prefix("INSURA"))
            .build()?
            .try_deserialize()
    }
}

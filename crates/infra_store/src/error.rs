//! Store error types
//!
//! Reading a snapshot never fails from the caller's point of view; a missing
//! or broken document falls back to a starting book. Writing can fail, and
//! those failures are typed here so the caller can report them.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while persisting a snapshot
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot could not be turned into JSON
    #[error("Failed to encode snapshot: {0}")]
    EncodeFailed(#[from] serde_json::Error),

    /// The snapshot could not be written to disk
    #[error("Failed to write snapshot to {path}: {source}")]
    WriteFailed {
        /// The data file the write was aimed at
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Creates a write failure for the given data file
    pub fn write_failed(path: &std::path::Path, source: std::io::Error) -> Self {
        StoreError::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
    }
}

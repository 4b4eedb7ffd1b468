//! Snapshot file management
//!
//! The store owns one path and does whole-document reads and writes against
//! it. Loading is deliberately infallible: a first run gets the sample book,
//! and a damaged document gets an empty one, so the application always comes
//! up. Writing replaces the file atomically through a sibling temp file.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use domain_book::Book;

use crate::error::StoreError;
use crate::preferences::Preferences;
use crate::snapshot::BookSnapshot;

/// File-backed store for one book snapshot
#[derive(Debug, Clone)]
pub struct BookStore {
    path: PathBuf,
}

impl BookStore {
    /// Creates a store over the given data file
    ///
    /// The file does not have to exist yet; [`BookStore::load`] treats a
    /// missing file as a first run and [`BookStore::save`] creates the
    /// parent directories on demand.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The data file this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot, falling back to a starting book when it cannot
    ///
    /// A missing file yields the built-in sample book. A file that exists
    /// but cannot be read, parsed or re-admitted into a book yields an
    /// empty one. Neither case is an error; both are logged.
    pub fn load(&self) -> (Book, Preferences) {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(
                    "No snapshot at {}, starting from the sample book",
                    self.path.display()
                );
                return (Book::sample(), Preferences::default());
            }
            Err(err) => {
                warn!(
                    "Snapshot at {} is unreadable ({}), starting from an empty book",
                    self.path.display(),
                    err
                );
                return (Book::new(), Preferences::default());
            }
        };

        let snapshot: BookSnapshot = match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(
                    "Snapshot at {} is not valid ({}), starting from an empty book",
                    self.path.display(),
                    err
                );
                return (Book::new(), Preferences::default());
            }
        };

        match snapshot.restore() {
            Ok((book, preferences)) => {
                debug!(
                    "Loaded snapshot from {}: {} clients, {} policies, {} claims",
                    self.path.display(),
                    book.clients().count(),
                    book.policies().count(),
                    book.claims().count()
                );
                (book, preferences)
            }
            Err(err) => {
                warn!(
                    "Snapshot at {} breaks the book rules ({}), starting from an empty book",
                    self.path.display(),
                    err
                );
                (Book::new(), Preferences::default())
            }
        }
    }

    /// Writes the full book state and preferences to the data file
    ///
    /// The document is written to a sibling temp file first and renamed
    /// over the target, so a crash mid-write never leaves a half snapshot
    /// behind. Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EncodeFailed`] if the snapshot cannot be
    /// serialized and [`StoreError::WriteFailed`] for any I/O failure.
    pub fn save(&self, book: &Book, preferences: &Preferences) -> Result<(), StoreError> {
        let snapshot = BookSnapshot::capture(book, preferences);
        let body = serde_json::to_string_pretty(&snapshot)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| StoreError::write_failed(&self.path, err))?;
            }
        }

        let staging = self.staging_path();
        fs::write(&staging, body).map_err(|err| StoreError::write_failed(&self.path, err))?;
        fs::rename(&staging, &self.path).map_err(|err| StoreError::write_failed(&self.path, err))?;

        debug!(
            "Wrote snapshot to {}: {} clients, {} policies, {} claims",
            self.path.display(),
            book.clients().count(),
            book.policies().count(),
            book.claims().count()
        );
        Ok(())
    }

    /// The sibling file writes are staged in before the rename
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("snapshot"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

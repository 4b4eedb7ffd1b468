//! Snapshot Persistence Layer
//!
//! This crate stores the whole insurance book as one JSON document on disk,
//! read once at startup and rewritten in full after every successful
//! mutating command.
//!
//! # Load behavior
//!
//! Loading never fails: a missing file means a first run and yields the
//! built-in sample book, and a document that cannot be parsed or breaks the
//! identity rules yields an empty book. Both fallbacks are logged.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::BookStore;
//!
//! let store = BookStore::new("./data/insurabook.json");
//! let (mut book, preferences) = store.load();
//! // ... mutate the book ...
//! store.save(&book, &preferences)?;
//! ```

pub mod error;
pub mod preferences;
pub mod snapshot;
pub mod store;

pub use error::StoreError;
pub use preferences::{Preferences, WindowGeometry};
pub use snapshot::BookSnapshot;
pub use store::BookStore;

//! Book aggregate for the insurance book
//!
//! One [`Book`] holds the entire model: the client, policy-type, policy and
//! claim registries plus the two id counters. All mutations and reads go
//! through it, which is where the cross-registry rules (policy issuance
//! checks, the claim-filing chain, the no-cascade removal policy) live.

pub mod book;
pub mod error;
pub mod sample;

pub use book::{Book, EXPIRY_WINDOW_DAYS};
pub use error::{BookError, BookResult};

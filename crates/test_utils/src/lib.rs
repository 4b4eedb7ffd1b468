//! Test Utilities Crate
//!
//! Shared test infrastructure for the insurance book test suite.
//!
//! # Modules
//!
//! - `builders`: Builder patterns for test entity construction
//! - `fixtures`: Pre-built dates, amounts and seeded books

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;

//! Claims domain for the insurance book

pub mod claim;
pub mod error;
pub mod registry;

pub use claim::{Claim, ClaimDraft};
pub use error::ClaimError;
pub use registry::ClaimRegistry;

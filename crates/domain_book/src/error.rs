//! Book-level error aggregation
//!
//! Every domain keeps its own error enum; the book folds them so callers see
//! one result type across all operations.

use thiserror::Error;

use domain_claims::ClaimError;
use domain_client::ClientError;
use domain_policy::PolicyError;

/// Any failure raised by a book operation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Claim(#[from] ClaimError),
}

/// Shorthand for results carrying a [`BookError`]
pub type BookResult<T> = Result<T, BookError>;

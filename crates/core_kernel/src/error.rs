//! Crate-level error aggregation
//!
//! Each value-object module defines its own error enum; [`CoreError`] folds
//! them into one type for callers that validate several kinds of input in a
//! row.

use thiserror::Error;

use crate::identifiers::IdError;
use crate::money::AmountError;
use crate::temporal::DateError;
use crate::text::TextError;

/// Any validation failure raised by this crate
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error(transparent)]
    Id(#[from] IdError),

    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Text(#[from] TextError),
}

/// Shorthand for results carrying a [`CoreError`]
pub type CoreResult<T> = Result<T, CoreError>;

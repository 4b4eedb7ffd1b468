//! Claims domain errors
//!
//! Besides the registry pair (duplicate, not-found), this enum carries the
//! four outcomes of the claim-filing rule chain. The chain itself runs where
//! all registries are in view; the vocabulary lives here.

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{Amount, ClaimId, ClientId, InsuraDate, PolicyId};

/// Errors that can occur in the claims domain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClaimError {
    /// A claim with this id is already registered
    #[error("Duplicate claim id: {id}")]
    DuplicateClaim { id: ClaimId },

    /// No claim with this id is registered
    #[error("No claim with id: {id}")]
    ClaimNotFound { id: ClaimId },

    /// The draft references a client the book does not know
    #[error("Claim references unknown client: {id}")]
    UnknownClient { id: ClientId },

    /// The draft references a policy the book does not know
    #[error("Claim references unknown policy: {id}")]
    UnknownPolicy { id: PolicyId },

    /// The loss date falls after the policy's expiry
    #[error("Claim dated {date} falls after the policy expiry {expiry}")]
    FiledAfterExpiry { date: InsuraDate, expiry: InsuraDate },

    /// Filing would push the cumulative claimed amount over the limit
    #[error(
        "Claim of {requested} exceeds the remaining cover: {prior_total} already claimed against a limit of {limit}"
    )]
    LimitExceeded {
        requested: Amount,
        prior_total: Decimal,
        limit: Amount,
    },
}

impl ClaimError {
    pub fn not_found(id: &ClaimId) -> Self {
        ClaimError::ClaimNotFound { id: id.clone() }
    }

    pub fn unknown_client(id: &ClientId) -> Self {
        ClaimError::UnknownClient { id: id.clone() }
    }

    pub fn unknown_policy(id: &PolicyId) -> Self {
        ClaimError::UnknownPolicy { id: id.clone() }
    }
}

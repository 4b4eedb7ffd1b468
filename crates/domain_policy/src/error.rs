//! Policy domain errors

use thiserror::Error;

use core_kernel::{ClientId, InsuraDate, PolicyId, PolicyTypeId};

use crate::policy_type::PolicyTypeMatch;

/// Errors that can occur in the policy domain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// The candidate shares an id or a name with a cataloged policy type
    #[error("Policy type conflicts with {existing}: {relation}")]
    ConflictingPolicyType {
        existing: PolicyTypeId,
        relation: PolicyTypeMatch,
    },

    /// No policy type with this id is cataloged
    #[error("No policy type with id: {id}")]
    PolicyTypeNotFound { id: PolicyTypeId },

    /// A policy with this id is already registered
    #[error("Duplicate policy id: {id}")]
    DuplicatePolicy { id: PolicyId },

    /// The client already holds a live policy of this type
    #[error("Client {client_id} already holds a policy of type {policy_type_id}")]
    CoverageAlreadyHeld {
        client_id: ClientId,
        policy_type_id: PolicyTypeId,
    },

    /// No policy with this id is registered
    #[error("No policy with id: {id}")]
    PolicyNotFound { id: PolicyId },

    /// The effective date falls after the expiry date
    #[error("Coverage window is inverted: effective {effective} is after expiry {expiry}")]
    InvalidCoverageWindow {
        effective: InsuraDate,
        expiry: InsuraDate,
    },
}

impl PolicyError {
    pub fn type_not_found(id: &PolicyTypeId) -> Self {
        PolicyError::PolicyTypeNotFound { id: id.clone() }
    }

    pub fn not_found(id: &PolicyId) -> Self {
        PolicyError::PolicyNotFound { id: id.clone() }
    }
}

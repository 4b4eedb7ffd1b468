//! Client domain errors

use thiserror::Error;

use core_kernel::ClientId;

/// Errors that can occur in the client domain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// A client with this id is already registered
    #[error("Duplicate client id: {id}")]
    DuplicateClient { id: ClientId },

    /// No client with this id is registered
    #[error("No client with id: {id}")]
    ClientNotFound { id: ClientId },
}

impl ClientError {
    pub fn duplicate(id: &ClientId) -> Self {
        ClientError::DuplicateClient { id: id.clone() }
    }

    pub fn not_found(id: &ClientId) -> Self {
        ClientError::ClientNotFound { id: id.clone() }
    }
}

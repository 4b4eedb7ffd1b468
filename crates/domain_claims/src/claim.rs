//! Claim record

use serde::{Deserialize, Serialize};

use core_kernel::{Amount, ClaimId, ClientId, Description, InsuraDate, PolicyId};

/// The caller-supplied parts of a claim, before an id is minted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimDraft {
    pub client_id: ClientId,
    pub policy_id: PolicyId,
    pub amount: Amount,
    pub date: InsuraDate,
    pub description: Description,
}

/// A filed claim
///
/// The cross-entity filing rules (client exists, policy exists, date within
/// coverage, limit respected) are enforced where all registries are in view;
/// a `Claim` value itself only guarantees well-formed fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Minted identifier
    pub id: ClaimId,
    /// Claimant
    pub client_id: ClientId,
    /// Policy claimed against
    pub policy_id: PolicyId,
    /// Claimed amount
    pub amount: Amount,
    /// Loss date
    pub date: InsuraDate,
    /// What happened
    #[serde(default)]
    pub description: Description,
}

impl Claim {
    /// Completes a draft under a freshly minted id
    pub fn file(id: ClaimId, draft: ClaimDraft) -> Self {
        Self {
            id,
            client_id: draft.client_id,
            policy_id: draft.policy_id,
            amount: draft.amount,
            date: draft.date,
            description: draft.description,
        }
    }
}

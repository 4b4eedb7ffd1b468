//! The on-disk snapshot document
//!
//! One JSON document carries the entire book: every client, policy type,
//! policy and claim, the two minting counters, and the user preferences.
//! Restoring runs the entities back through the book so identity rules hold
//! again; referential rules are deliberately not re-run, because a snapshot
//! may legitimately contain claims against removed policies or policies
//! whose type was deleted.

use serde::{Deserialize, Serialize};

use domain_book::{Book, BookError};
use domain_claims::Claim;
use domain_client::Client;
use domain_policy::{Policy, PolicyType};

use crate::preferences::Preferences;

/// Serialized form of a whole book plus preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSnapshot {
    #[serde(default)]
    clients: Vec<Client>,
    #[serde(default)]
    policy_types: Vec<PolicyType>,
    #[serde(default)]
    policies: Vec<Policy>,
    #[serde(default)]
    claims: Vec<Claim>,
    /// Counter the next policy id will be minted from
    #[serde(default)]
    next_policy_number: u64,
    /// Counter the next claim id will be minted from
    #[serde(default)]
    next_claim_number: u64,
    #[serde(default)]
    preferences: Preferences,
}

impl BookSnapshot {
    /// Captures the current book state together with the preferences
    pub fn capture(book: &Book, preferences: &Preferences) -> Self {
        Self {
            clients: book.clients().cloned().collect(),
            policy_types: book.policy_types().cloned().collect(),
            policies: book.policies().cloned().collect(),
            claims: book.claims().cloned().collect(),
            next_policy_number: book.next_policy_number(),
            next_claim_number: book.next_claim_number(),
            preferences: preferences.clone(),
        }
    }

    /// Rebuilds a book from the captured state
    ///
    /// Entities are re-admitted in dependency order, so identity collisions
    /// surface as the usual book errors. Counters are restored afterwards
    /// and raised above any entity suffix already present, which keeps
    /// minting collision-free even when the stored counters are stale.
    pub fn restore(self) -> Result<(Book, Preferences), BookError> {
        let mut book = Book::new();
        for client in self.clients {
            book.add_client(client)?;
        }
        for policy_type in self.policy_types {
            book.add_policy_type(policy_type)?;
        }
        for policy in self.policies {
            book.insert_policy(policy)?;
        }
        for claim in self.claims {
            book.insert_claim(claim)?;
        }
        book.restore_counters(self.next_policy_number, self.next_claim_number);
        Ok((book, self.preferences))
    }
}

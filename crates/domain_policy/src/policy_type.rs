//! Policy type entity and the four-way likeness relation
//!
//! A policy type is a product definition: motor, home, travel and so on.
//! Because types are referenced by policies through their id and shown to
//! users through their name, the catalog must keep both unique. The
//! [`PolicyTypeMatch`] relation classifies any two types by which of the two
//! identifying fields they share; the registry admits a new type only when
//! the relation against every existing entry is [`PolicyTypeMatch::Neither`].

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Amount, Description, Name, PolicyTypeId};

/// Which identifying fields two policy types share
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyTypeMatch {
    /// Different id and different name; the two types may coexist
    Neither,
    /// Same name under a different id
    NameOnly,
    /// Same id under a different name
    IdOnly,
    /// Same id and same name
    Both,
}

impl PolicyTypeMatch {
    /// True for every relation except [`PolicyTypeMatch::Neither`]
    pub fn is_conflict(&self) -> bool {
        !matches!(self, PolicyTypeMatch::Neither)
    }
}

impl fmt::Display for PolicyTypeMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PolicyTypeMatch::Neither => "no shared identity",
            PolicyTypeMatch::NameOnly => "same name",
            PolicyTypeMatch::IdOnly => "same id",
            PolicyTypeMatch::Both => "same id and name",
        };
        f.write_str(text)
    }
}

/// A product definition policies are written against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyType {
    /// Caller-chosen identifier in the `P<digits>` family
    pub id: PolicyTypeId,
    /// Product name, unique across the catalog
    pub name: Name,
    /// Free-form product description
    #[serde(default)]
    pub description: Description,
    /// Periodic premium charged for the product
    pub premium: Amount,
}

impl PolicyType {
    pub fn new(id: PolicyTypeId, name: Name, description: Description, premium: Amount) -> Self {
        Self {
            id,
            name,
            description,
            premium,
        }
    }

    /// Classifies this type against `other` by shared id and shared name
    pub fn likeness(&self, other: &PolicyType) -> PolicyTypeMatch {
        match (self.id == other.id, self.name == other.name) {
            (true, true) => PolicyTypeMatch::Both,
            (true, false) => PolicyTypeMatch::IdOnly,
            (false, true) => PolicyTypeMatch::NameOnly,
            (false, false) => PolicyTypeMatch::Neither,
        }
    }
}

//! Strongly-typed identifiers for book entities
//!
//! Every identifier is a newtype over its canonical string form, validated
//! against a per-kind format rule at construction. Policy and claim ids are
//! additionally minted by [`IdSequence`] counters with a fixed prefix and a
//! zero-padded numeric suffix.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised by identifier construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("Invalid {kind}: {value:?} (expected {expects})")]
    InvalidFormat {
        kind: &'static str,
        value: String,
        expects: &'static str,
    },
}

macro_rules! define_entity_id {
    ($(#[$docs:meta])* $name:ident, $label:literal, $rule:literal, $expects:literal) => {
        $(#[$docs])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validates `raw` against this kind's format rule
            pub fn new(raw: impl Into<String>) -> Result<Self, IdError> {
                static RULE: Lazy<Regex> =
                    Lazy::new(|| Regex::new($rule).expect("identifier rule must compile"));
                let raw = raw.into();
                if RULE.is_match(&raw) {
                    Ok(Self(raw))
                } else {
                    Err(IdError::InvalidFormat {
                        kind: $label,
                        value: raw,
                        expects: $expects,
                    })
                }
            }

            /// Returns the canonical string form
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                Self::new(raw)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }
    };
}

define_entity_id! {
    /// Client identifier, chosen by the user when the client is registered
    ClientId, "client id", r"^\S+$", "a non-empty token without whitespace"
}

define_entity_id! {
    /// Policy type identifier, chosen by the user when the type is created
    PolicyTypeId, "policy type id", r"^P[0-9]+$", "'P' followed by digits"
}

define_entity_id! {
    /// Policy identifier, minted by the book's policy counter
    PolicyId, "policy id", r"^PO[0-9]+$", "'PO' followed by digits"
}

define_entity_id! {
    /// Claim identifier, minted by the book's claim counter
    ClaimId, "claim id", r"^C[0-9]+$", "'C' followed by digits"
}

/// Identifier kinds minted by an [`IdSequence`]
pub trait SequentialId: Sized {
    /// Fixed prefix of every minted identifier
    const PREFIX: &'static str;
    /// Minimum digit count; shorter suffixes are zero-padded
    const WIDTH: usize;

    /// Builds the identifier for a counter value
    fn from_counter(value: u64) -> Self;

    /// Numeric suffix of this identifier, if it fits in a `u64`
    fn counter_value(&self) -> Option<u64>;
}

impl SequentialId for PolicyId {
    const PREFIX: &'static str = "PO";
    const WIDTH: usize = 4;

    fn from_counter(value: u64) -> Self {
        Self(format!("{}{:0width$}", Self::PREFIX, value, width = Self::WIDTH))
    }

    fn counter_value(&self) -> Option<u64> {
        self.0[Self::PREFIX.len()..].parse().ok()
    }
}

impl SequentialId for ClaimId {
    const PREFIX: &'static str = "C";
    const WIDTH: usize = 4;

    fn from_counter(value: u64) -> Self {
        Self(format!("{}{:0width$}", Self::PREFIX, value, width = Self::WIDTH))
    }

    fn counter_value(&self) -> Option<u64> {
        self.0[Self::PREFIX.len()..].parse().ok()
    }
}

/// Monotonic counter minting identifiers of one kind.
///
/// Counter values start at 1 and are never reused: removing the entity an
/// identifier was minted for does not return the value to the pool. The
/// counter is only ever moved by minting, or by the restore path that rebuilds
/// it from a persisted snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence<K> {
    next: u64,
    _kind: PhantomData<K>,
}

impl<K: SequentialId> IdSequence<K> {
    /// Creates a fresh sequence whose first minted value is 1
    pub fn new() -> Self {
        Self {
            next: 1,
            _kind: PhantomData,
        }
    }

    /// Restores a sequence from a persisted counter value
    pub fn starting_at(next: u64) -> Self {
        Self {
            next: next.max(1),
            _kind: PhantomData,
        }
    }

    /// Counter value the next mint will use
    pub fn next_value(&self) -> u64 {
        self.next
    }

    /// Identifier the next mint would produce, without advancing
    pub fn peek(&self) -> K {
        K::from_counter(self.next)
    }

    /// Mints the next identifier and advances the counter
    pub fn mint(&mut self) -> K {
        let id = K::from_counter(self.next);
        self.next += 1;
        id
    }

    /// Moves the counter past an already-issued identifier.
    ///
    /// Used when loading a snapshot whose stored counter lags behind the
    /// entities it contains; ids the sequence did not mint itself (or whose
    /// suffix overflows `u64`) are ignored.
    pub fn advance_past(&mut self, issued: &K) {
        if let Some(value) = issued.counter_value() {
            if value >= self.next {
                self.next = value + 1;
            }
        }
    }
}

impl<K: SequentialId> Default for IdSequence<K> {
    fn default() -> Self {
        Self::new()
    }
}

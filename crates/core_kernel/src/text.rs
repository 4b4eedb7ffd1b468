//! Textual value objects shared across the domain crates
//!
//! [`Name`] is used for client and policy-type names, [`Tag`] for the short
//! labels attached to clients, and [`Description`] for free-form text that
//! carries no rule at all.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static NAME_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("name rule must compile"));

static TAG_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("tag rule must compile"));

/// Errors raised by textual value construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("Invalid name: {value:?} (letters, digits and spaces only, starting with a letter or digit)")]
    InvalidName { value: String },

    #[error("Invalid tag: {value:?} (a single alphanumeric word)")]
    InvalidTag { value: String },
}

/// A display name for a client or a policy type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(raw: impl Into<String>) -> Result<Self, TextError> {
        let raw = raw.into();
        if NAME_RULE.is_match(&raw) {
            Ok(Self(raw))
        } else {
            Err(TextError::InvalidName { value: raw })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single-word label attached to a client
///
/// Tags order alphabetically, so a client's tag set lists in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: impl Into<String>) -> Result<Self, TextError> {
        let raw = raw.into();
        if TAG_RULE.is_match(&raw) {
            Ok(Self(raw))
        } else {
            Err(TextError::InvalidTag { value: raw })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-form text with no validation rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

macro_rules! text_conversions {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }
    };
}

text_conversions!(Name);
text_conversions!(Tag);
text_conversions!(Description);

impl FromStr for Name {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Name {
    type Error = TextError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl FromStr for Tag {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Tag {
    type Error = TextError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<String> for Description {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for Description {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

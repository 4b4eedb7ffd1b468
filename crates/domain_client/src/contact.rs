//! Contact value objects
//!
//! Phone, email and postal address are optional on a client record, but when
//! present they must be well formed. The rules are deliberately loose; the
//! book records what the user typed, it does not verify reachability.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static PHONE_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("phone rule must compile"));

static EMAIL_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email rule must compile"));

/// Errors raised by contact value construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Invalid phone number: {value:?} (digits only, at least 3)")]
    InvalidPhone { value: String },

    #[error("Invalid email address: {value:?}")]
    InvalidEmail { value: String },

    #[error("Address must not be blank")]
    BlankAddress,
}

/// A phone number, kept as the digit string the user entered
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: impl Into<String>) -> Result<Self, ContactError> {
        let raw = raw.into();
        if PHONE_RULE.is_match(&raw) {
            Ok(Self(raw))
        } else {
            Err(ContactError::InvalidPhone { value: raw })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An email address under a simplified `local@domain.tld` rule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(raw: impl Into<String>) -> Result<Self, ContactError> {
        let raw = raw.into();
        if EMAIL_RULE.is_match(&raw) {
            Ok(Self(raw))
        } else {
            Err(ContactError::InvalidEmail { value: raw })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A free-form postal address; any non-blank string qualifies
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(raw: impl Into<String>) -> Result<Self, ContactError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            Err(ContactError::BlankAddress)
        } else {
            Ok(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! contact_conversions {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ContactError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ContactError;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                Self::new(raw)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }
    };
}

contact_conversions!(Phone);
contact_conversions!(Email);
contact_conversions!(Address);

//! Monetary amounts with precise decimal arithmetic
//!
//! The book is single-currency: premiums, coverage limits and claim amounts
//! all share one [`Amount`] kind. An amount is constructed from its textual
//! form, which must be a positive number with at most two fraction digits,
//! and keeps that form verbatim so display round-trips the user's input.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static AMOUNT_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("amount rule must compile"));

/// Errors raised by amount construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Invalid amount: {value:?} (expected digits with at most two decimal places)")]
    InvalidFormat { value: String },

    #[error("Amount must be greater than zero, got {value:?}")]
    NotPositive { value: String },
}

/// A positive monetary amount.
///
/// Equality and hashing are on the canonical textual form, so `"1.5"` and
/// `"1.50"` are distinct amounts even though they compare numerically equal
/// through [`Amount::value`]. Rule: digits, optionally a point and one or two
/// fraction digits, numeric value strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount {
    raw: String,
    value: Decimal,
}

impl Amount {
    /// Validates `raw` and parses its numeric value
    pub fn new(raw: impl Into<String>) -> Result<Self, AmountError> {
        let raw = raw.into();
        if !AMOUNT_RULE.is_match(&raw) {
            return Err(AmountError::InvalidFormat { value: raw });
        }
        let value = Decimal::from_str(&raw).map_err(|_| AmountError::InvalidFormat {
            value: raw.clone(),
        })?;
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive { value: raw });
        }
        Ok(Self { raw, value })
    }

    /// Numeric value for arithmetic and comparisons
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Canonical textual form
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Amount {
    type Error = AmountError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> String {
        amount.raw
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    proptest! {
        #[test]
        fn valid_amounts_round_trip(raw in "[1-9][0-9]{0,6}(\\.[0-9]{1,2})?") {
            let amount = Amount::new(raw.clone()).unwrap();
            prop_assert_eq!(amount.to_string(), raw);
            prop_assert!(amount.value() > Decimal::ZERO);
        }

        #[test]
        fn overlong_fractions_never_construct(raw in "[0-9]{1,6}\\.[0-9]{3,5}") {
            prop_assert!(Amount::new(raw).is_err());
        }
    }
}

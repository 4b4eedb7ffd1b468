//! Calendar dates in the book's `YYYY-MM-DD` form
//!
//! [`InsuraDate`] is the single date kind shared by client birthdays, policy
//! coverage windows and claim dates. The textual rule is fixed-width
//! `YYYY-MM-DD`, and the value must be a real calendar date, so ordering the
//! canonical strings lexically and ordering the dates chronologically agree.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static DATE_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date rule must compile"));

/// Errors raised by date construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date: {value:?} (expected YYYY-MM-DD)")]
    InvalidFormat { value: String },

    #[error("No such calendar date: {value:?}")]
    ImpossibleDate { value: String },
}

/// A validated calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InsuraDate(NaiveDate);

impl InsuraDate {
    /// Validates `raw` against the `YYYY-MM-DD` rule and the calendar
    pub fn new(raw: impl Into<String>) -> Result<Self, DateError> {
        let raw = raw.into();
        if !DATE_RULE.is_match(&raw) {
            return Err(DateError::InvalidFormat { value: raw });
        }
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DateError::ImpossibleDate { value: raw })
    }

    /// Wraps an already-validated calendar date
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Underlying calendar date
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// True when this date's month and day equal those of `reference`.
    ///
    /// The year is ignored, which is what the birthday view wants.
    pub fn matches_month_day(&self, reference: NaiveDate) -> bool {
        self.0.month() == reference.month() && self.0.day() == reference.day()
    }

    /// True when this date falls in `[start, start + days]`, both ends
    /// inclusive
    pub fn within_days_after(&self, start: NaiveDate, days: i64) -> bool {
        let elapsed = (self.0 - start).num_days();
        (0..=days).contains(&elapsed)
    }
}

impl fmt::Display for InsuraDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for InsuraDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for InsuraDate {
    type Error = DateError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<InsuraDate> for String {
    fn from(date: InsuraDate) -> String {
        date.to_string()
    }
}

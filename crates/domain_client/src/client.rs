//! Client entity
//!
//! A client is a person or company the book writes policies for. Records are
//! immutable snapshots; correcting one means removing the old record and
//! inserting a replacement under the same id. Identity is the caller-chosen
//! [`ClientId`]; every other field is descriptive.
//!
//! # Examples
//!
//! ```rust
//! use core_kernel::{ClientId, InsuraDate, Name, Tag};
//! use domain_client::client::Client;
//!
//! let client = Client::new(
//!     ClientId::new("reef-d")?,
//!     Name::new("Dana Reef")?,
//!     InsuraDate::new("1981-04-20")?,
//! )
//! .with_tag(Tag::new("vip")?);
//!
//! assert!(client.has_tag("vip"));
//! # Ok::<(), core_kernel::CoreError>(())
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use core_kernel::{ClientId, InsuraDate, Name, Tag};

use crate::contact::{Address, Email, Phone};

/// A client record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Caller-chosen identifier, unique within the book
    pub id: ClientId,
    /// Display name
    pub name: Name,
    /// Date of birth, drives the birthday view
    pub birthday: InsuraDate,
    /// Contact phone number, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    /// Contact email address, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    /// Postal address, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Labels for ad-hoc grouping, kept in alphabetical order
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<Tag>,
}

impl Client {
    /// Creates a client with the required fields and no contact details
    ///
    /// # Arguments
    ///
    /// * `id` - Caller-chosen identifier
    /// * `name` - Display name
    /// * `birthday` - Date of birth
    pub fn new(id: ClientId, name: Name, birthday: InsuraDate) -> Self {
        Self {
            id,
            name,
            birthday,
            phone: None,
            email: None,
            address: None,
            tags: BTreeSet::new(),
        }
    }

    /// Sets the contact phone number
    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phone = Some(phone);
        self
    }

    /// Sets the contact email address
    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    /// Sets the postal address
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Adds one label; adding the same label twice keeps a single copy
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.insert(tag);
        self
    }

    /// True when the client carries the given label
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.as_str() == tag)
    }

    /// True when the client's birthday falls on `reference`'s month and day
    ///
    /// The birth year is ignored; this is the calendar-birthday check used by
    /// the birthday view.
    pub fn has_birthday_on(&self, reference: NaiveDate) -> bool {
        self.birthday.matches_month_day(reference)
    }

    /// True when `keyword` occurs in the name, ignoring case
    pub fn name_contains(&self, keyword: &str) -> bool {
        self.name
            .as_str()
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_client() -> Client {
        Client::new(
            ClientId::new("C042").unwrap(),
            Name::new("Dana Reef").unwrap(),
            InsuraDate::new("1981-04-20").unwrap(),
        )
    }

    #[test]
    fn test_new_client_has_no_contact_details() {
        let client = sample_client();
        assert!(client.phone.is_none());
        assert!(client.email.is_none());
        assert!(client.address.is_none());
        assert!(client.tags.is_empty());
    }

    #[test]
    fn test_with_tag_deduplicates() {
        let client = sample_client()
            .with_tag(Tag::new("vip").unwrap())
            .with_tag(Tag::new("vip").unwrap());
        assert_eq!(client.tags.len(), 1);
    }

    #[test]
    fn test_birthday_check_ignores_year() {
        let client = sample_client();
        let today = NaiveDate::from_ymd_opt(2026, 4, 20).unwrap();
        assert!(client.has_birthday_on(today));
        let tomorrow = NaiveDate::from_ymd_opt(2026, 4, 21).unwrap();
        assert!(!client.has_birthday_on(tomorrow));
    }

    #[test]
    fn test_name_search_is_case_insensitive() {
        let client = sample_client();
        assert!(client.name_contains("dana"));
        assert!(client.name_contains("REEF"));
        assert!(!client.name_contains("smith"));
    }

    #[test]
    fn test_optional_fields_are_omitted_from_json() {
        let json = serde_json::to_string(&sample_client()).unwrap();
        assert!(!json.contains("phone"));
        assert!(!json.contains("tags"));
    }

    #[test]
    fn test_json_roundtrip_with_full_contact() {
        let client = sample_client()
            .with_phone(Phone::new("0478123456").unwrap())
            .with_email(Email::new("dana@example.com").unwrap())
            .with_address(Address::new("12 Harbour Way").unwrap())
            .with_tag(Tag::new("corporate").unwrap());
        let json = serde_json::to_string(&client).unwrap();
        let back: Client = serde_json::from_str(&json).unwrap();
        assert_eq!(client, back);
    }
}

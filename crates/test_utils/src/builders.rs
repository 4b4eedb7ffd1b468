//! Test Data Builders
//!
//! Builder patterns for constructing test entities with sensible defaults.
//! Tests set only the fields they care about; everything else stays at a
//! valid default. Builders parse their inputs at `build()` time and panic on
//! invalid test data, which is the right failure mode inside a test suite.

use core_kernel::{
    Amount, ClaimId, ClientId, Description, InsuraDate, Name, PolicyId, PolicyTypeId,
};
use domain_claims::{Claim, ClaimDraft};
use domain_client::{Address, Client, Email, Phone};
use domain_policy::{Policy, PolicyDraft, PolicyType};

/// Builder for test clients
pub struct ClientBuilder {
    id: String,
    name: String,
    birthday: String,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    tags: Vec<String>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            id: "walker-a".to_string(),
            name: "Avery Walker".to_string(),
            birthday: "1990-06-15".to_string(),
            phone: None,
            email: None,
            address: None,
            tags: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_birthday(mut self, birthday: impl Into<String>) -> Self {
        self.birthday = birthday.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn build(self) -> Client {
        let mut client = Client::new(
            ClientId::new(self.id).expect("builder client id"),
            Name::new(self.name).expect("builder client name"),
            InsuraDate::new(self.birthday).expect("builder birthday"),
        );
        if let Some(phone) = self.phone {
            client = client.with_phone(Phone::new(phone).expect("builder phone"));
        }
        if let Some(email) = self.email {
            client = client.with_email(Email::new(email).expect("builder email"));
        }
        if let Some(address) = self.address {
            client = client.with_address(Address::new(address).expect("builder address"));
        }
        for tag in self.tags {
            client = client.with_tag(core_kernel::Tag::new(tag).expect("builder tag"));
        }
        client
    }
}

/// Builder for test policy types
pub struct PolicyTypeBuilder {
    id: String,
    name: String,
    description: String,
    premium: String,
}

impl Default for PolicyTypeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyTypeBuilder {
    pub fn new() -> Self {
        Self {
            id: "P1".to_string(),
            name: "Motor".to_string(),
            description: "standard motor cover".to_string(),
            premium: "120.00".to_string(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_premium(mut self, premium: impl Into<String>) -> Self {
        self.premium = premium.into();
        self
    }

    pub fn build(self) -> PolicyType {
        PolicyType::new(
            PolicyTypeId::new(self.id).expect("builder policy type id"),
            Name::new(self.name).expect("builder policy type name"),
            Description::new(self.description),
            Amount::new(self.premium).expect("builder premium"),
        )
    }
}

/// Builder for test policies and policy drafts
pub struct PolicyBuilder {
    id: String,
    client_id: String,
    policy_type_id: String,
    effective: String,
    expiry: String,
    coverage_limit: String,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self {
            id: "PO0001".to_string(),
            client_id: "walker-a".to_string(),
            policy_type_id: "P1".to_string(),
            effective: "2026-01-01".to_string(),
            expiry: "2026-12-31".to_string(),
            coverage_limit: "1000".to_string(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_client(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    pub fn with_type(mut self, policy_type_id: impl Into<String>) -> Self {
        self.policy_type_id = policy_type_id.into();
        self
    }

    pub fn with_effective(mut self, date: impl Into<String>) -> Self {
        self.effective = date.into();
        self
    }

    pub fn with_expiry(mut self, date: impl Into<String>) -> Self {
        self.expiry = date.into();
        self
    }

    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.coverage_limit = limit.into();
        self
    }

    /// The id-less form handed to the book's minting insert
    pub fn draft(self) -> PolicyDraft {
        PolicyDraft {
            client_id: ClientId::new(self.client_id).expect("builder client id"),
            policy_type_id: PolicyTypeId::new(self.policy_type_id)
                .expect("builder policy type id"),
            effective: InsuraDate::new(self.effective).expect("builder effective date"),
            expiry: InsuraDate::new(self.expiry).expect("builder expiry date"),
            coverage_limit: Amount::new(self.coverage_limit).expect("builder coverage limit"),
        }
    }

    pub fn build(self) -> Policy {
        let id = PolicyId::new(self.id.clone()).expect("builder policy id");
        Policy::issue(id, self.draft()).expect("builder coverage window")
    }
}

/// Builder for test claims and claim drafts
pub struct ClaimBuilder {
    id: String,
    client_id: String,
    policy_id: String,
    amount: String,
    date: String,
    description: String,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    pub fn new() -> Self {
        Self {
            id: "C0001".to_string(),
            client_id: "walker-a".to_string(),
            policy_id: "PO0001".to_string(),
            amount: "100".to_string(),
            date: "2026-06-15".to_string(),
            description: "hail damage".to_string(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_client(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    pub fn with_policy(mut self, policy_id: impl Into<String>) -> Self {
        self.policy_id = policy_id.into();
        self
    }

    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The id-less form handed to the book's filing chain
    pub fn draft(self) -> ClaimDraft {
        ClaimDraft {
            client_id: ClientId::new(self.client_id).expect("builder client id"),
            policy_id: PolicyId::new(self.policy_id).expect("builder policy id"),
            amount: Amount::new(self.amount).expect("builder claim amount"),
            date: InsuraDate::new(self.date).expect("builder claim date"),
            description: Description::new(self.description),
        }
    }

    pub fn build(self) -> Claim {
        let id = ClaimId::new(self.id.clone()).expect("builder claim id");
        Claim::file(id, self.draft())
    }
}

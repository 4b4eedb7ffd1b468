//! Built-in sample dataset
//!
//! When no snapshot file exists the application starts from this small,
//! coherent book instead of an empty one, so a first-time user sees the
//! shape of the data straight away.

use core_kernel::{Amount, ClientId, Description, InsuraDate, Name, PolicyTypeId, Tag};
use domain_claims::ClaimDraft;
use domain_client::{Client, Email, Phone};
use domain_policy::{PolicyDraft, PolicyType};

use crate::book::Book;

impl Book {
    /// A small pre-populated book used when no snapshot exists yet
    pub fn sample() -> Book {
        build_sample().expect("built-in sample dataset must satisfy the book rules")
    }
}

fn build_sample() -> Result<Book, Box<dyn std::error::Error>> {
    let mut book = Book::new();

    book.add_client(
        Client::new(
            ClientId::new("garcia-m")?,
            Name::new("Maria Garcia")?,
            InsuraDate::new("1984-03-12")?,
        )
        .with_phone(Phone::new("0295550117")?)
        .with_email(Email::new("maria.garcia@example.com")?),
    )?;
    book.add_client(
        Client::new(
            ClientId::new("chen-l")?,
            Name::new("Li Chen")?,
            InsuraDate::new("1990-11-05")?,
        )
        .with_tag(Tag::new("vip")?),
    )?;
    book.add_client(Client::new(
        ClientId::new("okafor-s")?,
        Name::new("Sam Okafor")?,
        InsuraDate::new("1978-07-30")?,
    ))?;

    book.add_policy_type(PolicyType::new(
        PolicyTypeId::new("P1")?,
        Name::new("Motor")?,
        Description::new("third party and collision cover"),
        Amount::new("120.00")?,
    ))?;
    book.add_policy_type(PolicyType::new(
        PolicyTypeId::new("P2")?,
        Name::new("Home")?,
        Description::new("buildings and contents"),
        Amount::new("85.50")?,
    ))?;
    book.add_policy_type(PolicyType::new(
        PolicyTypeId::new("P3")?,
        Name::new("Travel")?,
        Description::new("international travel, single trip"),
        Amount::new("45.00")?,
    ))?;

    book.add_policy(PolicyDraft {
        client_id: ClientId::new("garcia-m")?,
        policy_type_id: PolicyTypeId::new("P1")?,
        effective: InsuraDate::new("2026-01-01")?,
        expiry: InsuraDate::new("2026-12-31")?,
        coverage_limit: Amount::new("15000")?,
    })?;
    book.add_policy(PolicyDraft {
        client_id: ClientId::new("chen-l")?,
        policy_type_id: PolicyTypeId::new("P2")?,
        effective: InsuraDate::new("2026-03-15")?,
        expiry: InsuraDate::new("2027-03-14")?,
        coverage_limit: Amount::new("250000")?,
    })?;

    book.file_claim(ClaimDraft {
        client_id: ClientId::new("garcia-m")?,
        policy_id: core_kernel::PolicyId::new("PO0001")?,
        amount: Amount::new("640.00")?,
        date: InsuraDate::new("2026-04-02")?,
        description: Description::new("rear bumper respray"),
    })?;

    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_well_formed() {
        let book = Book::sample();
        assert_eq!(book.clients().count(), 3);
        assert_eq!(book.policy_types().count(), 3);
        assert_eq!(book.policies().count(), 2);
        assert_eq!(book.claims().count(), 1);
    }

    #[test]
    fn test_sample_counters_follow_the_minted_ids() {
        let book = Book::sample();
        assert_eq!(book.next_policy_number(), 3);
        assert_eq!(book.next_claim_number(), 2);
    }

    #[test]
    fn test_sample_claim_targets_the_first_policy() {
        let book = Book::sample();
        let claim = book.claims().next().unwrap();
        assert_eq!(claim.policy_id.as_str(), "PO0001");
        assert_eq!(claim.amount.as_str(), "640.00");
    }
}

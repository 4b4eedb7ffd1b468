//! Pre-built Test Fixtures
//!
//! Ready-to-use dates, amounts and seeded books for tests that need a
//! realistic starting state rather than a hand-assembled one.

use chrono::{Datelike, Duration, Local, NaiveDate};

use core_kernel::{Amount, ClientId, InsuraDate, PolicyId};
use domain_book::Book;

use crate::builders::{ClientBuilder, PolicyBuilder, PolicyTypeBuilder};

/// Fixture for calendar dates relative to the local today
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The local calendar date the fixtures are relative to
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Today plus `days`, as a book date
    pub fn in_days(days: i64) -> InsuraDate {
        InsuraDate::from_naive(Self::today() + Duration::days(days))
    }

    /// Today minus `days`, as a book date
    pub fn days_ago(days: i64) -> InsuraDate {
        InsuraDate::from_naive(Self::today() - Duration::days(days))
    }

    /// A birthday in the past whose month and day fall on today
    pub fn birthday_today() -> InsuraDate {
        let today = Self::today();
        let then = today
            .with_year(today.year() - 30)
            .unwrap_or_else(|| today - Duration::days(30 * 365));
        InsuraDate::from_naive(then)
    }
}

/// Fixture for monetary amounts
pub struct AmountFixtures;

impl AmountFixtures {
    /// A typical periodic premium
    pub fn premium() -> Amount {
        Amount::new("120.00").expect("fixture premium")
    }

    /// A coverage limit small enough to exhaust in a test
    pub fn small_limit() -> Amount {
        Amount::new("1000").expect("fixture limit")
    }

    /// A claim amount well under [`AmountFixtures::small_limit`]
    pub fn small_claim() -> Amount {
        Amount::new("150").expect("fixture claim amount")
    }
}

/// Fixture for seeded books
pub struct BookFixtures;

impl BookFixtures {
    /// An empty book
    pub fn empty() -> Book {
        Book::new()
    }

    /// A book holding one client, one policy type and one live policy
    ///
    /// The policy covers the whole year around today with the given limit.
    /// Returns the book together with the ids a claim draft needs.
    pub fn covered(limit: &str) -> (Book, ClientId, PolicyId) {
        let mut book = Book::new();
        let client = ClientBuilder::new().build();
        let client_id = client.id.clone();
        book.add_client(client).expect("fixture client");
        book.add_policy_type(PolicyTypeBuilder::new().build())
            .expect("fixture policy type");
        let policy_id = book
            .add_policy(
                PolicyBuilder::new()
                    .with_client(client_id.as_str())
                    .with_effective(TemporalFixtures::days_ago(180).to_string())
                    .with_expiry(TemporalFixtures::in_days(185).to_string())
                    .with_limit(limit)
                    .draft(),
            )
            .expect("fixture policy");
        (book, client_id, policy_id)
    }
}

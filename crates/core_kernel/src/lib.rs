//! Shared value objects for the insurance book
//!
//! Every domain crate builds on the kinds defined here: validated identifiers
//! and their minting sequences, monetary amounts, calendar dates and the
//! textual values. Construction is the only gate; once a value exists it is
//! known to satisfy its rule, so the domain crates never re-validate.

pub mod error;
pub mod identifiers;
pub mod money;
pub mod temporal;
pub mod text;

pub use error::{CoreError, CoreResult};
pub use identifiers::{ClaimId, ClientId, IdError, IdSequence, PolicyId, PolicyTypeId, SequentialId};
pub use money::{Amount, AmountError};
pub use temporal::{DateError, InsuraDate};
pub use text::{Description, Name, Tag, TextError};

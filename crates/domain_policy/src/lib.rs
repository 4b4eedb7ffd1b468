//! Policy domain for the insurance book
//!
//! Two entities live here. [`PolicyType`](policy_type::PolicyType) is a
//! product definition kept unique by id and by name through the four-way
//! [`PolicyTypeMatch`](policy_type::PolicyTypeMatch) relation.
//! [`Policy`](policy::Policy) binds a client to a product for a validated
//! coverage window; the register keeps one live policy per
//! (client, policy type) pair while lookups go by minted policy id.

pub mod error;
pub mod policy;
pub mod policy_type;
pub mod registry;

pub use error::PolicyError;
pub use policy::{Policy, PolicyDraft};
pub use policy_type::{PolicyType, PolicyTypeMatch};
pub use registry::{PolicyRegistry, PolicyTypeRegistry};

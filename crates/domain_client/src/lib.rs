//! Client domain for the insurance book
//!
//! Holds the [`Client`](client::Client) record, its optional contact value
//! objects and the uniqueness-enforcing [`ClientRegistry`](registry::ClientRegistry).

pub mod client;
pub mod contact;
pub mod error;
pub mod registry;

pub use client::Client;
pub use contact::{Address, ContactError, Email, Phone};
pub use error::ClientError;
pub use registry::ClientRegistry;

//! Client registry
//!
//! The registry is the book's only collection of clients. It enforces id
//! uniqueness on insertion and keeps records in insertion order, so every
//! listing a user sees is stable across reads.

use indexmap::IndexMap;

use core_kernel::ClientId;

use crate::client::Client;
use crate::error::ClientError;

/// Insertion-ordered, id-unique collection of clients
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientRegistry {
    clients: IndexMap<ClientId, Client>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a client, rejecting a duplicate id
    ///
    /// On failure the registry is unchanged.
    pub fn add(&mut self, client: Client) -> Result<(), ClientError> {
        if self.clients.contains_key(&client.id) {
            return Err(ClientError::duplicate(&client.id));
        }
        self.clients.insert(client.id.clone(), client);
        Ok(())
    }

    /// Removes and returns the client with the given id
    ///
    /// Removal preserves the insertion order of the remaining records.
    pub fn remove(&mut self, id: &ClientId) -> Result<Client, ClientError> {
        self.clients
            .shift_remove(id)
            .ok_or_else(|| ClientError::not_found(id))
    }

    /// Looks up a client by id
    pub fn get(&self, id: &ClientId) -> Option<&Client> {
        self.clients.get(id)
    }

    /// True when a client with this id is registered
    pub fn contains(&self, id: &ClientId) -> bool {
        self.clients.contains_key(id)
    }

    /// All clients in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Client> {
        self.clients.values()
    }

    /// Clients satisfying `predicate`, in insertion order
    pub fn matching<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Client>
    where
        P: Fn(&Client) -> bool + 'a,
    {
        self.clients.values().filter(move |client| predicate(client))
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

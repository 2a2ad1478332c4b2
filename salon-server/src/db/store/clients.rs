//! Client store

use shared::models::{Client, Pet};

use super::CLIENTS_KEY;
use crate::db::{KvStore, StorageResult};

/// Store for the `clients` collection (pets embedded)
#[derive(Debug, Clone)]
pub struct ClientStore {
    kv: KvStore,
}

impl ClientStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    pub fn list(&self) -> StorageResult<Vec<Client>> {
        self.kv.read_collection(CLIENTS_KEY)
    }

    pub fn get(&self, id: &str) -> StorageResult<Option<Client>> {
        Ok(self.list()?.into_iter().find(|c| c.id == id))
    }

    /// Append a new client, rewriting the collection
    pub fn insert(&self, client: Client) -> StorageResult<Client> {
        let mut clients = self.list()?;
        clients.push(client.clone());
        self.kv.write_collection(CLIENTS_KEY, &clients)?;
        Ok(client)
    }

    /// Replace the client with the same id. Returns the stored record,
    /// `None` if no client matched.
    pub fn replace(&self, client: Client) -> StorageResult<Option<Client>> {
        let mut clients = self.list()?;
        let Some(slot) = clients.iter_mut().find(|c| c.id == client.id) else {
            return Ok(None);
        };
        *slot = client.clone();
        self.kv.write_collection(CLIENTS_KEY, &clients)?;
        Ok(Some(client))
    }

    /// Filter-rewrite delete. Returns whether a client was removed.
    pub fn remove(&self, id: &str) -> StorageResult<bool> {
        let clients = self.list()?;
        let before = clients.len();
        let kept: Vec<Client> = clients.into_iter().filter(|c| c.id != id).collect();
        let removed = kept.len() != before;
        if removed {
            self.kv.write_collection(CLIENTS_KEY, &kept)?;
        }
        Ok(removed)
    }

    /// Resolve a pet across all clients (used by reporting and the
    /// appointment handlers to denormalize names/size)
    pub fn find_pet(&self, pet_id: &str) -> StorageResult<Option<(Client, Pet)>> {
        for client in self.list()? {
            if let Some(pet) = client.pet(pet_id).cloned() {
                return Ok(Some((client, pet)));
            }
        }
        Ok(None)
    }
}

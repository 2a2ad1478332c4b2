//! Inventory store

use shared::models::InventoryItem;

use super::INVENTORY_KEY;
use crate::db::{KvStore, StorageResult};

/// Store for the `inventory` collection
#[derive(Debug, Clone)]
pub struct InventoryStore {
    kv: KvStore,
}

impl InventoryStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    pub fn list(&self) -> StorageResult<Vec<InventoryItem>> {
        self.kv.read_collection(INVENTORY_KEY)
    }

    pub fn get(&self, id: &str) -> StorageResult<Option<InventoryItem>> {
        Ok(self.list()?.into_iter().find(|i| i.id == id))
    }

    /// Items at or below their reorder threshold
    pub fn needing_reorder(&self) -> StorageResult<Vec<InventoryItem>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(InventoryItem::needs_reorder)
            .collect())
    }

    pub fn insert(&self, item: InventoryItem) -> StorageResult<InventoryItem> {
        let mut items = self.list()?;
        items.push(item.clone());
        self.kv.write_collection(INVENTORY_KEY, &items)?;
        Ok(item)
    }

    pub fn replace(&self, item: InventoryItem) -> StorageResult<Option<InventoryItem>> {
        let mut items = self.list()?;
        let Some(slot) = items.iter_mut().find(|i| i.id == item.id) else {
            return Ok(None);
        };
        *slot = item.clone();
        self.kv.write_collection(INVENTORY_KEY, &items)?;
        Ok(Some(item))
    }

    /// Filter-rewrite delete
    pub fn remove(&self, id: &str) -> StorageResult<bool> {
        let items = self.list()?;
        let before = items.len();
        let kept: Vec<InventoryItem> = items.into_iter().filter(|i| i.id != id).collect();
        let removed = kept.len() != before;
        if removed {
            self.kv.write_collection(INVENTORY_KEY, &kept)?;
        }
        Ok(removed)
    }
}

//! Pet photo store
//!
//! Photos are Data-URL strings held under one slot per pet
//! (`pet-photos-<petId>`). Adding or deleting a photo rewrites the
//! entire list, exactly like the original documents.

use super::pet_photos_key;
use crate::db::{KvStore, StorageResult};

/// Store for per-pet photo lists
#[derive(Debug, Clone)]
pub struct PetPhotoStore {
    kv: KvStore,
}

impl PetPhotoStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    pub fn photos(&self, pet_id: &str) -> StorageResult<Vec<String>> {
        self.kv.read_collection(&pet_photos_key(pet_id))
    }

    /// Replace the whole photo list
    pub fn save(&self, pet_id: &str, photos: &[String]) -> StorageResult<()> {
        self.kv.write_collection(&pet_photos_key(pet_id), photos)
    }

    /// Remove one photo by index, rewriting the list. Returns the new
    /// list, `None` if the index was out of range.
    pub fn remove_at(&self, pet_id: &str, index: usize) -> StorageResult<Option<Vec<String>>> {
        let mut photos = self.photos(pet_id)?;
        if index >= photos.len() {
            return Ok(None);
        }
        photos.remove(index);
        self.save(pet_id, &photos)?;
        Ok(Some(photos))
    }

    /// Drop the slot entirely (pet deleted)
    pub fn remove_all(&self, pet_id: &str) -> StorageResult<bool> {
        self.kv.delete_blob(&pet_photos_key(pet_id))
    }
}

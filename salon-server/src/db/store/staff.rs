//! Staff store

use shared::models::Staff;

use super::STAFF_KEY;
use crate::db::{KvStore, StorageResult};

/// Store for the `staff` collection
#[derive(Debug, Clone)]
pub struct StaffStore {
    kv: KvStore,
}

impl StaffStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    pub fn list(&self) -> StorageResult<Vec<Staff>> {
        self.kv.read_collection(STAFF_KEY)
    }

    pub fn get(&self, id: &str) -> StorageResult<Option<Staff>> {
        Ok(self.list()?.into_iter().find(|s| s.id == id))
    }

    /// Active staff members who take grooming appointments
    pub fn groomers(&self) -> StorageResult<Vec<Staff>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|s| s.is_groomer && s.is_active)
            .collect())
    }

    pub fn insert(&self, staff: Staff) -> StorageResult<Staff> {
        let mut members = self.list()?;
        members.push(staff.clone());
        self.kv.write_collection(STAFF_KEY, &members)?;
        Ok(staff)
    }

    pub fn replace(&self, staff: Staff) -> StorageResult<Option<Staff>> {
        let mut members = self.list()?;
        let Some(slot) = members.iter_mut().find(|s| s.id == staff.id) else {
            return Ok(None);
        };
        *slot = staff.clone();
        self.kv.write_collection(STAFF_KEY, &members)?;
        Ok(Some(staff))
    }

    /// Filter-rewrite delete
    pub fn remove(&self, id: &str) -> StorageResult<bool> {
        let members = self.list()?;
        let before = members.len();
        let kept: Vec<Staff> = members.into_iter().filter(|s| s.id != id).collect();
        let removed = kept.len() != before;
        if removed {
            self.kv.write_collection(STAFF_KEY, &kept)?;
        }
        Ok(removed)
    }
}

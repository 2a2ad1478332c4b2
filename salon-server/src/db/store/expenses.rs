//! Expense store

use shared::models::ExpenseRecord;

use super::EXPENSES_KEY;
use crate::db::{KvStore, StorageResult};

/// Store for the `expenses` collection
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    kv: KvStore,
}

impl ExpenseStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    pub fn list(&self) -> StorageResult<Vec<ExpenseRecord>> {
        self.kv.read_collection(EXPENSES_KEY)
    }

    pub fn get(&self, id: &str) -> StorageResult<Option<ExpenseRecord>> {
        Ok(self.list()?.into_iter().find(|e| e.id == id))
    }

    pub fn insert(&self, expense: ExpenseRecord) -> StorageResult<ExpenseRecord> {
        let mut expenses = self.list()?;
        expenses.push(expense.clone());
        self.kv.write_collection(EXPENSES_KEY, &expenses)?;
        Ok(expense)
    }

    pub fn replace(&self, expense: ExpenseRecord) -> StorageResult<Option<ExpenseRecord>> {
        let mut expenses = self.list()?;
        let Some(slot) = expenses.iter_mut().find(|e| e.id == expense.id) else {
            return Ok(None);
        };
        *slot = expense.clone();
        self.kv.write_collection(EXPENSES_KEY, &expenses)?;
        Ok(Some(expense))
    }

    /// Filter-rewrite delete
    pub fn remove(&self, id: &str) -> StorageResult<bool> {
        let expenses = self.list()?;
        let before = expenses.len();
        let kept: Vec<ExpenseRecord> = expenses.into_iter().filter(|e| e.id != id).collect();
        let removed = kept.len() != before;
        if removed {
            self.kv.write_collection(EXPENSES_KEY, &kept)?;
        }
        Ok(removed)
    }
}

//! Transaction store

use shared::models::Transaction;

use super::TRANSACTIONS_KEY;
use crate::db::{KvStore, StorageResult};

/// Store for the `transactions` collection
#[derive(Debug, Clone)]
pub struct TransactionStore {
    kv: KvStore,
}

impl TransactionStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    pub fn list(&self) -> StorageResult<Vec<Transaction>> {
        self.kv.read_collection(TRANSACTIONS_KEY)
    }

    pub fn get(&self, id: &str) -> StorageResult<Option<Transaction>> {
        Ok(self.list()?.into_iter().find(|t| t.id == id))
    }

    /// The transaction recorded for an appointment, if any
    pub fn find_by_appointment(&self, appointment_id: &str) -> StorageResult<Option<Transaction>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|t| t.appointment_id == appointment_id))
    }

    pub fn insert(&self, transaction: Transaction) -> StorageResult<Transaction> {
        let mut transactions = self.list()?;
        transactions.push(transaction.clone());
        self.kv.write_collection(TRANSACTIONS_KEY, &transactions)?;
        Ok(transaction)
    }
}

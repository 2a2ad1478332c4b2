//! Database layer
//!
//! [`KvStore`] is the raw keyed-blob store; [`store`] wraps it with one
//! typed store per entity so handlers never touch slot keys directly.

pub mod storage;
pub mod store;

pub use storage::{KvStore, StorageError, StorageResult};

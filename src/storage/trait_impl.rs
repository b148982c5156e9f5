//! `RecordStore` implementation for `SqliteStorage`.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::traits::RecordStore;

use super::core::SqliteStorage;
use super::types::{InsertedRecord, StoredRecord};

#[async_trait]
impl RecordStore for SqliteStorage {
    async fn insert(&self, value: &str) -> Result<InsertedRecord, StorageError> {
        self.insert_record(value).await
    }

    async fn list_all(&self) -> Result<Vec<StoredRecord>, StorageError> {
        self.list_records().await
    }
}

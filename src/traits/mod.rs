//! Trait definitions for mockable dependencies.
//!
//! This module defines [`RecordStore`], the seam between the HTTP handlers
//! and the database. Handlers receive an `Arc<dyn RecordStore>` at
//! construction time and never reach for global state.
//!
//! # Mocking
//!
//! The trait is annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates a mock implementation automatically for testing.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::storage::{InsertedRecord, StoredRecord};

/// Record store abstraction.
///
/// Implementations must tolerate concurrent calls from many handlers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Append a record with the given value.
    ///
    /// The id and timestamp are generated by the store as part of the write.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    async fn insert(&self, value: &str) -> Result<InsertedRecord, StorageError>;

    /// List all records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the read or any row decode fails.
    async fn list_all(&self) -> Result<Vec<StoredRecord>, StorageError>;
}

//! Storage backend.
//!
//! This module provides:
//! - `SQLite` connection setup and schema initialization
//! - Record insert and newest-first listing
//!
//! # Architecture
//!
//! The storage layer uses `SQLite` with the `sqlx` crate for async operations.
//! Every operation is a single statement, so each request maps to exactly one
//! implicit transaction. Write serialization is left to `SQLite` itself.
//!
//! - `core`: Pool management, schema, and helper functions
//! - `records`: Record insert and listing
//! - `trait_impl`: `RecordStore` implementation
//!
//! # Example
//!
//! ```ignore
//! use records_service::storage::SqliteStorage;
//!
//! let storage = SqliteStorage::new("./data.db").await?;
//! let inserted = storage.insert_record("hello").await?;
//! let all = storage.list_records().await?;
//! ```

mod core;
mod records;
mod trait_impl;
mod types;

pub use self::core::SqliteStorage;
pub use types::{parse_timestamp, InsertedRecord, StoredRecord, SQLITE_TIMESTAMP_FORMAT};

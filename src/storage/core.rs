//! Core `SQLite` storage implementation.
//!
//! This module provides the main [`SqliteStorage`] struct, connection setup,
//! and schema initialization.

use crate::error::StorageError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Schema for the records table.
///
/// `created_at` uses `SQLite`'s `CURRENT_TIMESTAMP` (UTC, second resolution).
pub(crate) const RECORDS_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS records (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    value TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)";

/// `SQLite` storage backend.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pub(crate) pool: SqlitePool,
}

impl SqliteStorage {
    /// Get a clone of the connection pool.
    #[must_use]
    pub fn get_pool(&self) -> SqlitePool {
        self.pool.clone()
    }

    /// Open (or create) the database file and ensure the schema exists.
    ///
    /// # Arguments
    ///
    /// * `database_path` - Path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ConnectionFailed`] if the connection fails, or
    /// [`StorageError::SchemaFailed`] if the records table cannot be created.
    pub async fn new(database_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = database_path.as_ref();

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to create database directory: {e}"),
            })?;
        }

        let options =
            SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", path.display()))
                .map_err(|e| StorageError::ConnectionFailed {
                    message: format!("Invalid database path: {e}"),
                })?
                .journal_mode(SqliteJournalMode::Wal)
                .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to connect to database: {e}"),
            })?;

        let storage = Self { pool };
        storage.ensure_schema().await?;

        Ok(storage)
    }

    /// Create a new in-memory `SQLite` storage instance for testing.
    ///
    /// The pool holds exactly one connection that is never recycled, so the
    /// database lives as long as the pool.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ConnectionFailed`] if the connection fails.
    pub async fn new_in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(|e| {
            StorageError::ConnectionFailed {
                message: format!("Invalid memory database options: {e}"),
            }
        })?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to create in-memory database: {e}"),
            })?;

        let storage = Self { pool };
        storage.ensure_schema().await?;

        Ok(storage)
    }

    /// Create the records table if it does not exist.
    ///
    /// Safe to call any number of times.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::SchemaFailed`] if the statement fails.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        sqlx::query(RECORDS_SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::SchemaFailed {
                message: format!("Failed to create records table: {e}"),
            })?;

        tracing::debug!("records schema ready");
        Ok(())
    }

    /// Close every connection in the pool.
    ///
    /// Waits for checked-out connections to be returned first.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Create a query error with the given query name and message.
    pub(crate) fn query_error(query: &str, message: String) -> StorageError {
        StorageError::QueryFailed {
            query: query.to_string(),
            message,
        }
    }
}

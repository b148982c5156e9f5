//! Storage types for database operations.
//!
//! - [`StoredRecord`]: A full row of the records table
//! - [`InsertedRecord`]: The store-generated columns of a fresh insert

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Text format of `SQLite`'s `CURRENT_TIMESTAMP`.
pub const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Record stored in database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Store-assigned identifier.
    pub id: i64,
    /// Caller-supplied value.
    pub value: String,
    /// Insert time in the store's native text form.
    pub created_at: String,
}

impl StoredRecord {
    /// Create a stored record.
    #[must_use]
    pub fn new(id: i64, value: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            created_at: created_at.into(),
        }
    }

    /// Parse `created_at` as a UTC timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::RowDecode`] if the text is not a `SQLite` timestamp.
    pub fn created_at_utc(&self) -> Result<DateTime<Utc>, StorageError> {
        parse_timestamp(&self.created_at)
    }
}

/// Columns generated by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertedRecord {
    /// Store-assigned identifier.
    pub id: i64,
    /// Insert time in the store's native text form.
    pub created_at: String,
}

/// Parse a `SQLite` timestamp (`YYYY-MM-DD HH:MM:SS`, UTC).
///
/// Fractional seconds are accepted.
///
/// # Errors
///
/// Returns [`StorageError::RowDecode`] if the text does not parse.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, StorageError> {
    NaiveDateTime::parse_from_str(s, SQLITE_TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|e| StorageError::RowDecode {
            message: format!("Failed to parse timestamp '{s}': {e}"),
        })
}

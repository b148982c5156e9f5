//! Record storage operations.

use crate::error::StorageError;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::core::SqliteStorage;
use super::types::{InsertedRecord, StoredRecord};

impl SqliteStorage {
    /// Append a record and return the id and timestamp the store assigned.
    ///
    /// Both columns come back from the same `INSERT ... RETURNING` statement.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::QueryFailed`] if the write fails, or
    /// [`StorageError::RowDecode`] if the returned columns cannot be read.
    pub async fn insert_record(&self, value: &str) -> Result<InsertedRecord, StorageError> {
        let row = sqlx::query("INSERT INTO records (value) VALUES (?) RETURNING id, created_at")
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::query_error("INSERT records", format!("{e}")))?;

        let id: i64 = decode_column(&row, "id")?;
        let created_at: String = decode_column(&row, "created_at")?;

        Ok(InsertedRecord { id, created_at })
    }

    /// List every record, newest first.
    ///
    /// Ties on `created_at` are broken by descending id. Returns an empty
    /// vector when the table is empty.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::QueryFailed`] if the read fails, or
    /// [`StorageError::RowDecode`] if any row cannot be decoded. No partial
    /// list is ever returned.
    pub async fn list_records(&self) -> Result<Vec<StoredRecord>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, value, created_at FROM records ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::query_error("SELECT records", format!("{e}")))?;

        rows.iter().map(record_from_row).collect()
    }
}

fn record_from_row(row: &SqliteRow) -> Result<StoredRecord, StorageError> {
    let id: i64 = decode_column(row, "id")?;
    let value: String = decode_column(row, "value")?;
    let created_at: String = decode_column(row, "created_at")?;

    Ok(StoredRecord::new(id, value, created_at))
}

/// Decode a non-nullable column.
///
/// sqlx reads `NULL` as an empty string for `String`, so nullness is checked
/// through `Option<T>` and reported as a decode failure.
fn decode_column<'r, T>(row: &'r SqliteRow, column: &str) -> Result<T, StorageError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    let value: Option<T> = row.try_get(column).map_err(|e| StorageError::RowDecode {
        message: format!("column '{column}': {e}"),
    })?;

    value.ok_or_else(|| StorageError::RowDecode {
        message: format!("column '{column}': NULL"),
    })
}

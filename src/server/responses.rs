//! Response body types.
//!
//! Each endpoint has one fixed success shape.

use serde::{Deserialize, Serialize};

use crate::storage::StoredRecord;

/// Value of the `status` field on every success body.
pub const STATUS_SUCCESS: &str = "success";

/// Message returned after a successful write.
pub const WRITE_SUCCESS_MESSAGE: &str = "record written successfully";

/// Response from `POST /write`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteResponse {
    /// Always `"success"`.
    pub status: String,
    /// Human-readable confirmation.
    pub message: String,
    /// Id assigned to the new record.
    pub id: i64,
    /// Timestamp assigned to the new record.
    pub create_time: String,
}

impl WriteResponse {
    /// Build a success response for a freshly inserted record.
    #[must_use]
    pub fn success(id: i64, create_time: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: WRITE_SUCCESS_MESSAGE.to_string(),
            id,
            create_time: create_time.into(),
        }
    }
}

/// One record as rendered by `GET /query/all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordView {
    /// Record id.
    pub id: i64,
    /// Record value.
    pub value: String,
    /// Record timestamp.
    pub create_time: String,
}

impl From<StoredRecord> for RecordView {
    fn from(record: StoredRecord) -> Self {
        Self {
            id: record.id,
            value: record.value,
            create_time: record.created_at,
        }
    }
}

/// Response from `GET /query/all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryAllResponse {
    /// Always `"success"`.
    pub status: String,
    /// Number of records.
    pub total: usize,
    /// Records, newest first.
    pub records: Vec<RecordView>,
}

impl QueryAllResponse {
    /// Build a success response from records already in display order.
    #[must_use]
    pub fn success(records: Vec<StoredRecord>) -> Self {
        let records: Vec<RecordView> = records.into_iter().map(RecordView::from).collect();
        Self {
            status: STATUS_SUCCESS.to_string(),
            total: records.len(),
            records,
        }
    }
}

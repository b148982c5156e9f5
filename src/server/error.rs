//! HTTP error mapping.
//!
//! Every failure leaves a handler as an [`ApiError`], which renders a short
//! plain-text body. Storage failures are logged with their cause; the client
//! only sees a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::{RequestError, StorageError};

/// Error returned by the HTTP handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request was rejected before touching the store.
    Request(RequestError),
    /// Inserting a record failed.
    Write(StorageError),
    /// Listing records failed.
    Query(StorageError),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Request(RequestError::MethodNotAllowed { .. }) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Request(RequestError::InvalidBody { .. }) => StatusCode::BAD_REQUEST,
            Self::Write(_) | Self::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Request(err) => err.to_string(),
            Self::Write(_) => "failed to write record".to_string(),
            Self::Query(StorageError::RowDecode { .. }) => "failed to decode records".to_string(),
            Self::Query(_) => "query failed".to_string(),
        }
    }
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        Self::Request(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Request(RequestError::InvalidBody { message }) => {
                tracing::debug!(error = %message, "rejected request body");
            }
            Self::Request(_) => {}
            Self::Write(err) => tracing::error!(error = %err, "record write failed"),
            Self::Query(err) => tracing::error!(error = %err, "record query failed"),
        }

        (self.status(), self.public_message()).into_response()
    }
}

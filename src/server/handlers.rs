//! Route handlers.
//!
//! Both routes are mounted with `any`, so method checks happen here and
//! produce the same plain-text errors as every other failure.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::Json;

use super::error::ApiError;
use super::requests::WriteRequest;
use super::responses::{QueryAllResponse, WriteResponse};
use super::types::AppState;
use crate::error::RequestError;

/// `POST /write`: persist one value.
///
/// # Errors
///
/// - 405 if the method is not POST
/// - 400 if the body is not a JSON object of the expected shape
/// - 500 if the insert fails
pub async fn write_handler(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<(StatusCode, Json<WriteResponse>), ApiError> {
    require_method(&method, &Method::POST)?;

    let request: WriteRequest =
        serde_json::from_slice(&body).map_err(|e| RequestError::InvalidBody {
            message: e.to_string(),
        })?;

    let inserted = state
        .store
        .insert(&request.value)
        .await
        .map_err(ApiError::Write)?;

    tracing::debug!(id = inserted.id, "record written");

    Ok((
        StatusCode::OK,
        Json(WriteResponse::success(inserted.id, inserted.created_at)),
    ))
}

/// `GET /query/all`: list every record, newest first.
///
/// # Errors
///
/// - 405 if the method is not GET
/// - 500 if the query or any row decode fails
pub async fn query_all_handler(
    State(state): State<AppState>,
    method: Method,
) -> Result<Json<QueryAllResponse>, ApiError> {
    require_method(&method, &Method::GET)?;

    let records = state.store.list_all().await.map_err(ApiError::Query)?;

    Ok(Json(QueryAllResponse::success(records)))
}

/// Plain-text 404 for unknown paths.
pub async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found")
}

fn require_method(actual: &Method, allowed: &Method) -> Result<(), RequestError> {
    if actual == allowed {
        Ok(())
    } else {
        Err(RequestError::MethodNotAllowed {
            allowed: allowed.to_string(),
        })
    }
}

//! Shared helpers for HTTP integration tests.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use records_service::server::{create_router, AppState};
use records_service::storage::SqliteStorage;
use tempfile::TempDir;
use tower::ServiceExt;

/// Router plus the storage behind it.
pub struct TestApp {
    pub router: Router,
    pub storage: SqliteStorage,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = SqliteStorage::new(temp_dir.path().join("http.db"))
            .await
            .expect("Failed to create storage");
        let router = create_router(AppState::new(storage.clone()));
        Self {
            router,
            storage,
            _temp_dir: temp_dir,
        }
    }

    /// Send a request and collect status plus body text.
    pub async fn send(&self, method: &str, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn write(&self, value: &str) -> serde_json::Value {
        let body = serde_json::json!({ "value": value }).to_string();
        let (status, text) = self.send("POST", "/write", &body).await;
        assert_eq!(status, StatusCode::OK, "body: {text}");
        serde_json::from_str(&text).unwrap()
    }

    pub async fn query_all(&self) -> serde_json::Value {
        let (status, text) = self.send("GET", "/query/all", "").await;
        assert_eq!(status, StatusCode::OK, "body: {text}");
        serde_json::from_str(&text).unwrap()
    }

    pub async fn record_count(&self) -> usize {
        self.storage.list_records().await.unwrap().len()
    }
}

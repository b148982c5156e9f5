//! `POST /write` workflows.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use records_service::server::{WriteResponse, STATUS_SUCCESS, WRITE_SUCCESS_MESSAGE};

use super::common::TestApp;

#[tokio::test]
async fn test_write_success_shape() {
    let app = TestApp::new().await;

    let (status, text) = app.send("POST", "/write", r#"{"value":"hello"}"#).await;
    assert_eq!(status, StatusCode::OK);

    let body: WriteResponse = serde_json::from_str(&text).unwrap();
    assert_eq!(body.status, STATUS_SUCCESS);
    assert_eq!(body.message, WRITE_SUCCESS_MESSAGE);
    assert!(body.id > 0);
    assert!(records_service::storage::parse_timestamp(&body.create_time).is_ok());
    assert_eq!(app.record_count().await, 1);
}

#[tokio::test]
async fn test_write_with_get_is_405_and_store_untouched() {
    let app = TestApp::new().await;

    let (status, text) = app.send("GET", "/write", "").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(text, "only POST requests are supported");
    assert_eq!(app.record_count().await, 0);
}

#[tokio::test]
async fn test_write_with_other_methods_is_405() {
    let app = TestApp::new().await;

    for method in ["PUT", "DELETE", "PATCH"] {
        let (status, _) = app.send(method, "/write", r#"{"value":"x"}"#).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "method {method}");
    }
    assert_eq!(app.record_count().await, 0);
}

#[tokio::test]
async fn test_write_malformed_json_is_400_and_store_untouched() {
    let app = TestApp::new().await;

    let (status, text) = app.send("POST", "/write", "not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "invalid request body");
    assert_eq!(app.record_count().await, 0);
}

#[tokio::test]
async fn test_write_wrong_value_type_is_400() {
    let app = TestApp::new().await;

    let (status, _) = app.send("POST", "/write", r#"{"value": 12}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.record_count().await, 0);
}

#[tokio::test]
async fn test_write_empty_body_is_400() {
    let app = TestApp::new().await;

    let (status, _) = app.send("POST", "/write", "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_write_missing_value_stores_empty_string() {
    let app = TestApp::new().await;

    let (status, _) = app.send("POST", "/write", r#"{"other": true}"#).await;
    assert_eq!(status, StatusCode::OK);

    let listed = app.query_all().await;
    assert_eq!(listed["records"][0]["value"], "");
}

#[tokio::test]
async fn test_write_ids_strictly_increase() {
    let app = TestApp::new().await;

    let first = app.write("a").await["id"].as_i64().unwrap();
    let second = app.write("b").await["id"].as_i64().unwrap();

    assert!(second > first);
}

#[tokio::test]
async fn test_write_after_table_dropped_is_500() {
    let app = TestApp::new().await;
    sqlx::query("DROP TABLE records")
        .execute(&app.storage.get_pool())
        .await
        .unwrap();

    let (status, text) = app.send("POST", "/write", r#"{"value":"x"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(text, "failed to write record");
}

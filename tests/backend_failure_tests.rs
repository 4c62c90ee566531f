mod common;

use axum::http::StatusCode;
use axum_test::{
    TestResponse,
    multipart::{MultipartForm, Part},
};
use serde_json::Value;
use std::sync::Arc;

use common::{UnreachableStore, server_with_store};

fn assert_backend_error(response: TestResponse) {
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("connection refused"), "unexpected error: {}", error);
}

#[tokio::test]
async fn every_operation_reports_backend_failure_as_500() {
    let store = Arc::new(UnreachableStore::default());
    let server = server_with_store(store.clone());

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"data".as_slice()).file_name("a.txt").mime_type("text/plain"),
    );
    assert_backend_error(server.post("/api/upload").multipart(form).await);
    assert_backend_error(server.get("/api/files").await);
    assert_backend_error(server.get("/api/download/20240101T000000_a.txt").await);
    assert_backend_error(server.delete("/api/delete/20240101T000000_a.txt").await);

    // one backend call per operation, no retries
    assert_eq!(store.calls(), 4);
}

#[tokio::test]
async fn health_does_not_depend_on_backend() {
    let store = Arc::new(UnreachableStore::default());
    let server = server_with_store(store.clone());

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");
    assert_eq!(store.calls(), 0);
}

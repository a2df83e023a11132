//! Health & Documentation API Tests

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn test_health_reports_database_ok() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_openapi_lists_vendor_paths() {
    let app = TestApp::new().await;

    let response = app.get("/api-doc/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let doc: Value = body_json(response).await;
    let paths = doc["paths"].as_object().unwrap();
    assert!(paths.contains_key("/api/v1/vendors"));
    assert!(paths.contains_key("/api/v1/vendors/{id}"));
    assert!(paths["/api/v1/vendors/{id}"].get("patch").is_some());
}

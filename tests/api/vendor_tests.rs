//! Vendor API Tests

use axum::http::StatusCode;
use serde_json::json;

use fruit_vendor::application::VendorDto;
use fruit_vendor::interfaces::http::common::ApiResponse;

use crate::common::{body_json, data, TestApp, BASE};

async fn create(app: &TestApp, name: &str) -> VendorDto {
    let response = app
        .post_json(BASE, &json!({ "name": name }).to_string())
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    data(response).await
}

#[tokio::test]
async fn test_list_empty() {
    let app = TestApp::new().await;

    let response = app.get(BASE).await;

    assert_eq!(response.status(), StatusCode::OK);
    let vendors: Vec<VendorDto> = data(response).await;
    assert!(vendors.is_empty());
}

#[tokio::test]
async fn test_create_assigns_id_and_url() {
    let app = TestApp::new().await;

    let created = create(&app, "First DTO Vendor").await;

    let id = created.id.unwrap();
    assert_eq!(created.name, "First DTO Vendor");
    assert_eq!(created.vendor_url, Some(format!("{}/{}", BASE, id)));
}

#[tokio::test]
async fn test_create_ignores_client_id_and_url() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            BASE,
            &json!({ "id": 500, "name": "Home Fruits", "vendor_url": "/elsewhere/500" }).to_string(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: VendorDto = data(response).await;

    assert_ne!(created.id, Some(500));
    assert_eq!(
        created.vendor_url,
        Some(format!("{}/{}", BASE, created.id.unwrap()))
    );
}

#[tokio::test]
async fn test_list_returns_vendors_in_id_order() {
    let app = TestApp::new().await;
    let first = create(&app, "Western Tasty Fruits Ltd.").await;
    let second = create(&app, "Exotic Fruits Company").await;

    let vendors: Vec<VendorDto> = data(app.get(BASE).await).await;

    assert_eq!(vendors, vec![first, second]);
}

#[tokio::test]
async fn test_get_by_id() {
    let app = TestApp::new().await;
    let created = create(&app, "Home Fruits").await;
    let id = created.id.unwrap();

    let response = app.get(&format!("{}/{}", BASE, id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let found: VendorDto = data(response).await;
    assert_eq!(found, created);
}

#[tokio::test]
async fn test_get_missing_is_404() {
    let app = TestApp::new().await;

    let response = app.get(&format!("{}/999", BASE)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ApiResponse<()> = body_json(response).await;
    assert!(!body.success);
    assert_eq!(body.error.as_deref(), Some("Not found: Vendor with id=999"));
}

#[tokio::test]
async fn test_get_with_non_numeric_id_is_400() {
    let app = TestApp::new().await;

    let response = app.get(&format!("{}/abc", BASE)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_with_empty_name_is_422() {
    let app = TestApp::new().await;

    let response = app.post_json(BASE, r#"{"name": ""}"#).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let vendors: Vec<VendorDto> = data(app.get(BASE).await).await;
    assert!(vendors.is_empty());
}

#[tokio::test]
async fn test_create_with_malformed_json_is_400() {
    let app = TestApp::new().await;

    let response = app.post_json(BASE, "{name").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_put_replaces_existing_vendor() {
    let app = TestApp::new().await;
    let created = create(&app, "Old Name").await;
    let id = created.id.unwrap();

    let response = app
        .put_json(&format!("{}/{}", BASE, id), r#"{"name": "New Name"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated: VendorDto = data(response).await;
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.name, "New Name");
    assert!(updated.vendor_url.unwrap().contains(&format!("/{}", id)));

    let vendors: Vec<VendorDto> = data(app.get(BASE).await).await;
    assert_eq!(vendors.len(), 1);
}

#[tokio::test]
async fn test_put_on_unknown_id_creates_vendor() {
    let app = TestApp::new().await;

    let response = app
        .put_json(&format!("{}/42", BASE), r#"{"name": "Fun Fresh Fruits Ltd."}"#)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let upserted: VendorDto = data(response).await;
    assert_eq!(upserted.id, Some(42));

    let fetched: VendorDto = data(app.get(&format!("{}/42", BASE)).await).await;
    assert_eq!(fetched.name, "Fun Fresh Fruits Ltd.");
}

#[tokio::test]
async fn test_patch_updates_name() {
    let app = TestApp::new().await;
    let created = create(&app, "Nuts Co").await;
    let id = created.id.unwrap();

    let response = app
        .patch_json(&format!("{}/{}", BASE, id), r#"{"name": "Nuts for Nuts Company"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let patched: VendorDto = data(response).await;
    assert_eq!(patched.id, Some(id));
    assert_eq!(patched.name, "Nuts for Nuts Company");
}

#[tokio::test]
async fn test_patch_without_name_keeps_vendor() {
    let app = TestApp::new().await;
    let created = create(&app, "Home Fruits").await;
    let id = created.id.unwrap();

    let response = app.patch_json(&format!("{}/{}", BASE, id), "{}").await;

    assert_eq!(response.status(), StatusCode::OK);
    let patched: VendorDto = data(response).await;
    assert_eq!(patched, created);
}

#[tokio::test]
async fn test_patch_missing_is_404_and_creates_nothing() {
    let app = TestApp::new().await;

    let response = app
        .patch_json(&format!("{}/7", BASE), r#"{"name": "Ghost"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let vendors: Vec<VendorDto> = data(app.get(BASE).await).await;
    assert!(vendors.is_empty());
}

#[tokio::test]
async fn test_patch_malformed_json_is_400_envelope() {
    let app = TestApp::new().await;
    let created = create(&app, "Home Fruits").await;

    let response = app
        .patch_json(&format!("{}/{}", BASE, created.id.unwrap()), "{name")
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ApiResponse<()> = body_json(response).await;
    assert!(!body.success);
    assert!(body.error.unwrap().starts_with("Invalid JSON"));
}

#[tokio::test]
async fn test_patch_oversized_name_is_422_and_keeps_vendor() {
    let app = TestApp::new().await;
    let created = create(&app, "Home Fruits").await;
    let uri = format!("{}/{}", BASE, created.id.unwrap());

    let response = app
        .patch_json(&uri, &json!({ "name": "x".repeat(256) }).to_string())
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ApiResponse<()> = body_json(response).await;
    assert_eq!(
        body.error.as_deref(),
        Some("name: vendor name must be at most 255 characters")
    );

    let fetched: VendorDto = data(app.get(&uri).await).await;
    assert_eq!(fetched.name, "Home Fruits");
}

#[tokio::test]
async fn test_delete_removes_vendor() {
    let app = TestApp::new().await;
    let created = create(&app, "Short Lived").await;
    let uri = format!("{}/{}", BASE, created.id.unwrap());

    let response = app.delete(&uri).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.get(&uri).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_is_ok() {
    let app = TestApp::new().await;

    let response = app.delete(&format!("{}/999", BASE)).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let app = TestApp::new().await;

    let response = app.get(BASE).await;

    assert!(response.headers().contains_key("x-request-id"));
}

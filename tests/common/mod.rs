//! Common Test Utilities
//!
//! Builds the real router on top of a private in-memory SQLite database.

use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use sea_orm_migration::MigratorTrait;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use fruit_vendor::application::{VendorMapper, VendorService, VendorServiceImpl};
use fruit_vendor::infrastructure::database::migrator::Migrator;
use fruit_vendor::interfaces::http::common::ApiResponse;
use fruit_vendor::{create_api_router, init_database, DatabaseConfig, SeaOrmVendorRepository};

pub const BASE: &str = "/api/v1/vendors";

/// Test application wrapping the full router
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let repo = Arc::new(SeaOrmVendorRepository::new(db.clone()));
        let service: Arc<dyn VendorService> =
            Arc::new(VendorServiceImpl::new(repo, VendorMapper::new(BASE)));

        Self {
            router: create_api_router(service, db, BASE),
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<&str>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.request("GET", uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn put_json(&self, uri: &str, body: &str) -> Response {
        self.request("PUT", uri, Some(body)).await
    }

    pub async fn patch_json(&self, uri: &str, body: &str) -> Response {
        self.request("PATCH", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> Response {
        self.request("DELETE", uri, None).await
    }
}

/// Decode a response body as JSON.
pub async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Decode the `data` field of an `ApiResponse` envelope.
pub async fn data<T: DeserializeOwned>(response: Response) -> T {
    let envelope: ApiResponse<T> = body_json(response).await;
    assert!(envelope.success, "expected success envelope");
    envelope.data.unwrap()
}

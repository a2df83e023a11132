//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{middleware, routing::get, Router};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{VendorDto, VendorPatchDto, VendorService};
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::{health, vendors};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Vendors
        vendors::list_vendors,
        vendors::get_vendor,
        vendors::create_vendor,
        vendors::update_vendor,
        vendors::patch_vendor,
        vendors::delete_vendor,
    ),
    components(
        schemas(
            ApiResponse<String>,
            ApiResponse<VendorDto>,
            VendorDto,
            VendorPatchDto,
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Vendors", description = "Fruit vendor CRUD operations"),
    ),
    info(
        title = "Fruit Vendor API",
        version = "1.0.0",
        description = "REST API for managing fruit vendors",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// Vendor routes are mounted under `base_path`, which must match the base
/// path the service's mapper uses for `vendor_url`.
pub fn create_api_router(
    vendor_service: Arc<dyn VendorService>,
    db: DatabaseConnection,
    base_path: &str,
) -> Router {
    let vendor_state = vendors::VendorAppState {
        service: vendor_service,
    };
    let vendor_routes = Router::new()
        .route("/", get(vendors::list_vendors).post(vendors::create_vendor))
        .route(
            "/{id}",
            get(vendors::get_vendor)
                .put(vendors::update_vendor)
                .patch(vendors::patch_vendor)
                .delete(vendors::delete_vendor),
        )
        .with_state(vendor_state);

    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .nest(base_path, vendor_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

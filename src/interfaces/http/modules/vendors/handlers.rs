//! Vendor REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::{VendorDto, VendorPatchDto, VendorService};
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse, ValidatedJson};

#[derive(Clone)]
pub struct VendorAppState {
    pub service: Arc<dyn VendorService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/vendors",
    tag = "Vendors",
    responses(
        (status = 200, description = "Vendor list", body = ApiResponse<Vec<VendorDto>>)
    )
)]
pub async fn list_vendors(
    State(state): State<VendorAppState>,
) -> Result<Json<ApiResponse<Vec<VendorDto>>>, ApiError> {
    let vendors = state.service.get_all_vendors().await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(vendors)))
}

#[utoipa::path(
    get,
    path = "/api/v1/vendors/{id}",
    tag = "Vendors",
    params(("id" = i64, Path, description = "Vendor ID")),
    responses(
        (status = 200, description = "Vendor details", body = ApiResponse<VendorDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_vendor(
    State(state): State<VendorAppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<VendorDto>>, ApiError> {
    let vendor = state.service.get_vendor_by_id(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(vendor)))
}

#[utoipa::path(
    post,
    path = "/api/v1/vendors",
    tag = "Vendors",
    request_body = VendorDto,
    responses(
        (status = 201, description = "Created", body = ApiResponse<VendorDto>),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Invalid vendor name")
    )
)]
pub async fn create_vendor(
    State(state): State<VendorAppState>,
    ValidatedJson(dto): ValidatedJson<VendorDto>,
) -> Result<(StatusCode, Json<ApiResponse<VendorDto>>), ApiError> {
    let created = state.service.add_vendor(dto).await.map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

#[utoipa::path(
    put,
    path = "/api/v1/vendors/{id}",
    tag = "Vendors",
    params(("id" = i64, Path, description = "Vendor ID")),
    request_body = VendorDto,
    responses(
        (status = 200, description = "Replaced (created when the id was unknown)", body = ApiResponse<VendorDto>),
        (status = 422, description = "Invalid vendor name")
    )
)]
pub async fn update_vendor(
    State(state): State<VendorAppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<VendorDto>,
) -> Result<Json<ApiResponse<VendorDto>>, ApiError> {
    let updated = state
        .service
        .update_vendor_by_id(id, dto)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(updated)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/vendors/{id}",
    tag = "Vendors",
    params(("id" = i64, Path, description = "Vendor ID")),
    request_body = VendorPatchDto,
    responses(
        (status = 200, description = "Patched", body = ApiResponse<VendorDto>),
        (status = 400, description = "Malformed JSON"),
        (status = 404, description = "Not found"),
        (status = 422, description = "Vendor name too long")
    )
)]
pub async fn patch_vendor(
    State(state): State<VendorAppState>,
    Path(id): Path<i64>,
    ValidatedJson(patch): ValidatedJson<VendorPatchDto>,
) -> Result<Json<ApiResponse<VendorDto>>, ApiError> {
    let updated = state
        .service
        .update_fields_in_vendor_by_id(id, patch.into())
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/vendors/{id}",
    tag = "Vendors",
    params(("id" = i64, Path, description = "Vendor ID")),
    responses(
        (status = 200, description = "Deleted (also when the id was unknown)")
    )
)]
pub async fn delete_vendor(
    State(state): State<VendorAppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    state.service.delete_vendor(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success("Vendor deleted".to_string())))
}

//! Vendor handlers.

use axum::{extract::State, routing::get, Router};

use crate::api::extractors::{EntityId, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateVendor, UpdateVendor, VendorResponse};
use crate::types::Outcome;

/// Create vendor routes
pub fn vendor_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/vendor/", get(list_vendors).post(create_vendor))
        .route(
            "/api/v1/vendor/:id",
            get(get_vendor).put(update_vendor).delete(delete_vendor),
        )
}

/// List active vendors
#[utoipa::path(
    get,
    path = "/api/v1/vendor/",
    tag = "Vendors",
    responses(
        (status = 200, description = "Active vendors in the response envelope", body = [VendorResponse])
    )
)]
pub async fn list_vendors(State(state): State<AppState>) -> Outcome<Vec<VendorResponse>> {
    state.services.vendors().list_vendors().await
}

/// Get a vendor by id
#[utoipa::path(
    get,
    path = "/api/v1/vendor/{id}",
    tag = "Vendors",
    params(("id" = i32, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Vendor found", body = VendorResponse),
        (status = 404, description = "Vendor not found")
    )
)]
pub async fn get_vendor(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Outcome<VendorResponse> {
    state.services.vendors().get_vendor(id).await
}

/// Create a vendor
#[utoipa::path(
    post,
    path = "/api/v1/vendor/",
    tag = "Vendors",
    request_body = CreateVendor,
    responses(
        (status = 201, description = "Vendor created", body = VendorResponse),
        (status = 409, description = "Vendor name already exists"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_vendor(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateVendor>,
) -> Outcome<VendorResponse> {
    state.services.vendors().create_vendor(payload).await
}

/// Partially update a vendor
#[utoipa::path(
    put,
    path = "/api/v1/vendor/{id}",
    tag = "Vendors",
    params(("id" = i32, Path, description = "Vendor id")),
    request_body = UpdateVendor,
    responses(
        (status = 200, description = "Vendor updated", body = VendorResponse),
        (status = 404, description = "Vendor not found"),
        (status = 409, description = "Vendor name already exists")
    )
)]
pub async fn update_vendor(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(payload): ValidatedJson<UpdateVendor>,
) -> Outcome<VendorResponse> {
    state.services.vendors().update_vendor(id, payload).await
}

/// Soft-delete a vendor
#[utoipa::path(
    delete,
    path = "/api/v1/vendor/{id}",
    tag = "Vendors",
    params(("id" = i32, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Vendor deleted", body = VendorResponse),
        (status = 404, description = "Vendor not found")
    )
)]
pub async fn delete_vendor(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Outcome<VendorResponse> {
    state.services.vendors().delete_vendor(id).await
}

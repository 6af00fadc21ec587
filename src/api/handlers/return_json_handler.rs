//! Extracted document (return JSON) handlers.

use axum::{extract::State, routing::get, Router};

use crate::api::extractors::{EntityId, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateReturnJson, ReturnJsonResponse, UpdateReturnJson};
use crate::types::Outcome;

pub fn return_json_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/return-json/",
            get(list_return_jsons).post(create_return_json),
        )
        .route(
            "/api/v1/return-json/:id",
            get(get_return_json)
                .put(update_return_json)
                .delete(delete_return_json),
        )
}

#[utoipa::path(
    get,
    path = "/api/v1/return-json/",
    tag = "Return JSON",
    responses(
        (status = 200, description = "Active extracted documents", body = [ReturnJsonResponse])
    )
)]
pub async fn list_return_jsons(
    State(state): State<AppState>,
) -> Outcome<Vec<ReturnJsonResponse>> {
    state.services.return_jsons().list_return_jsons().await
}

#[utoipa::path(
    get,
    path = "/api/v1/return-json/{id}",
    tag = "Return JSON",
    params(("id" = i32, Path, description = "Return JSON id")),
    responses(
        (status = 200, description = "Document found", body = ReturnJsonResponse),
        (status = 404, description = "Document not found")
    )
)]
pub async fn get_return_json(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Outcome<ReturnJsonResponse> {
    state.services.return_jsons().get_return_json(id).await
}

#[utoipa::path(
    post,
    path = "/api/v1/return-json/",
    tag = "Return JSON",
    request_body = CreateReturnJson,
    responses(
        (status = 201, description = "Document stored", body = ReturnJsonResponse),
        (status = 404, description = "Referenced vendor not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_return_json(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateReturnJson>,
) -> Outcome<ReturnJsonResponse> {
    state.services.return_jsons().create_return_json(payload).await
}

#[utoipa::path(
    put,
    path = "/api/v1/return-json/{id}",
    tag = "Return JSON",
    params(("id" = i32, Path, description = "Return JSON id")),
    request_body = UpdateReturnJson,
    responses(
        (status = 200, description = "Document updated", body = ReturnJsonResponse),
        (status = 404, description = "Document or vendor not found")
    )
)]
pub async fn update_return_json(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(payload): ValidatedJson<UpdateReturnJson>,
) -> Outcome<ReturnJsonResponse> {
    state
        .services
        .return_jsons()
        .update_return_json(id, payload)
        .await
}

#[utoipa::path(
    delete,
    path = "/api/v1/return-json/{id}",
    tag = "Return JSON",
    params(("id" = i32, Path, description = "Return JSON id")),
    responses(
        (status = 200, description = "Document deleted", body = ReturnJsonResponse),
        (status = 404, description = "Document not found")
    )
)]
pub async fn delete_return_json(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Outcome<ReturnJsonResponse> {
    state.services.return_jsons().delete_return_json(id).await
}

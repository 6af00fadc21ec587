//! Extraction handlers.

use axum::{extract::State, routing::get, Router};

use crate::api::extractors::{EntityId, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateExtraction, ExtractionResponse, UpdateExtraction};
use crate::types::Outcome;

pub fn extraction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/extraction/",
            get(list_extractions).post(create_extraction),
        )
        .route(
            "/api/v1/extraction/:id",
            get(get_extraction)
                .put(update_extraction)
                .delete(delete_extraction),
        )
}

#[utoipa::path(
    get,
    path = "/api/v1/extraction/",
    tag = "Extractions",
    responses(
        (status = 200, description = "Active extraction definitions", body = [ExtractionResponse])
    )
)]
pub async fn list_extractions(
    State(state): State<AppState>,
) -> Outcome<Vec<ExtractionResponse>> {
    state.services.extractions().list_extractions().await
}

#[utoipa::path(
    get,
    path = "/api/v1/extraction/{id}",
    tag = "Extractions",
    params(("id" = i32, Path, description = "Extraction id")),
    responses(
        (status = 200, description = "Extraction found", body = ExtractionResponse),
        (status = 404, description = "Extraction not found")
    )
)]
pub async fn get_extraction(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Outcome<ExtractionResponse> {
    state.services.extractions().get_extraction(id).await
}

#[utoipa::path(
    post,
    path = "/api/v1/extraction/",
    tag = "Extractions",
    request_body = CreateExtraction,
    responses(
        (status = 201, description = "Extraction created", body = ExtractionResponse),
        (status = 404, description = "Referenced vendor not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_extraction(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateExtraction>,
) -> Outcome<ExtractionResponse> {
    state.services.extractions().create_extraction(payload).await
}

#[utoipa::path(
    put,
    path = "/api/v1/extraction/{id}",
    tag = "Extractions",
    params(("id" = i32, Path, description = "Extraction id")),
    request_body = UpdateExtraction,
    responses(
        (status = 200, description = "Extraction updated", body = ExtractionResponse),
        (status = 404, description = "Extraction or vendor not found")
    )
)]
pub async fn update_extraction(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(payload): ValidatedJson<UpdateExtraction>,
) -> Outcome<ExtractionResponse> {
    state
        .services
        .extractions()
        .update_extraction(id, payload)
        .await
}

#[utoipa::path(
    delete,
    path = "/api/v1/extraction/{id}",
    tag = "Extractions",
    params(("id" = i32, Path, description = "Extraction id")),
    responses(
        (status = 200, description = "Extraction deleted", body = ExtractionResponse),
        (status = 404, description = "Extraction not found")
    )
)]
pub async fn delete_extraction(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Outcome<ExtractionResponse> {
    state.services.extractions().delete_extraction(id).await
}

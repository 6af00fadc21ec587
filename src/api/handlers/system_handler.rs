//! Root, health and fallback handlers.

use axum::{extract::State, http::StatusCode, routing::get, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::state::AppInfo;
use crate::api::AppState;
use crate::types::outcome::{self, Outcome};

/// Database connectivity as reported by `/health`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "healthy")]
    pub database: String,
}

pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

/// Application name and version
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses((status = 200, description = "Application info", body = AppInfo))
)]
pub async fn root(State(state): State<AppState>) -> Outcome<AppInfo> {
    outcome::ok(state.info.clone(), "Application is running", StatusCode::OK)
}

/// Database health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Database reachable", body = HealthStatus),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn health(State(state): State<AppState>) -> Outcome<HealthStatus> {
    match state.database.ping().await {
        Ok(()) => outcome::ok(
            HealthStatus {
                database: "healthy".to_string(),
            },
            "Service is healthy",
            StatusCode::OK,
        ),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            outcome::fail("Database unavailable", StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Unknown routes answer with a failure envelope.
pub async fn fallback() -> Outcome<()> {
    outcome::fail("Route not found", StatusCode::NOT_FOUND)
}

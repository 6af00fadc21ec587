//! Authentication handlers.

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};

use crate::api::extractors::{EntityId, ValidatedJson};
use crate::api::AppState;
use crate::domain::{LoginLogResponse, LoginRequest, LoginResponse, LogoutRequest};
use crate::types::Outcome;

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/logout", post(logout))
        .route("/api/v1/auth/logs/:user_id", get(login_history))
}

/// Verify credentials and record a login event
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid username or password"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Outcome<LoginResponse> {
    state.services.auth().login(payload).await
}

/// Close the user's latest open session
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = "Authentication",
    request_body = LogoutRequest,
    responses(
        (status = 200, description = "Logout successful", body = LoginLogResponse),
        (status = 404, description = "No open login session")
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LogoutRequest>,
) -> Outcome<LoginLogResponse> {
    state.services.auth().logout(payload.user_id).await
}

/// Login history of a user, newest first
#[utoipa::path(
    get,
    path = "/api/v1/auth/logs/{user_id}",
    tag = "Authentication",
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Login events", body = [LoginLogResponse]),
        (status = 404, description = "User not found")
    )
)]
pub async fn login_history(
    State(state): State<AppState>,
    EntityId(user_id): EntityId,
) -> Outcome<Vec<LoginLogResponse>> {
    state.services.auth().login_history(user_id).await
}

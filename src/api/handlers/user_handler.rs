//! User management handlers.

use axum::{
    extract::State,
    routing::{get, patch},
    Router,
};

use crate::api::extractors::{EntityId, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateUser, PasswordUpdate, UpdateUser, UserList, UserResponse};
use crate::types::Outcome;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/user/", get(list_users).post(create_user))
        .route(
            "/api/v1/user/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/v1/user/bio/:bio_id", get(get_users_by_bio_id))
        .route("/api/v1/user/:id/password", patch(update_password))
}

/// List active users
#[utoipa::path(
    get,
    path = "/api/v1/user/",
    tag = "Users",
    responses(
        (status = 200, description = "Active users and their count", body = UserList)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Outcome<UserList> {
    state.services.users().list_users().await
}

/// Get user by id
#[utoipa::path(
    get,
    path = "/api/v1/user/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Outcome<UserResponse> {
    state.services.users().get_user(id).await
}

/// All active users sharing a biometric id
#[utoipa::path(
    get,
    path = "/api/v1/user/bio/{bio_id}",
    tag = "Users",
    params(("bio_id" = i32, Path, description = "Biometric id")),
    responses(
        (status = 200, description = "Matching users", body = [UserResponse]),
        (status = 404, description = "No users found for this Bio ID")
    )
)]
pub async fn get_users_by_bio_id(
    State(state): State<AppState>,
    EntityId(bio_id): EntityId,
) -> Outcome<Vec<UserResponse>> {
    state.services.users().get_users_by_bio_id(bio_id).await
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/v1/user/",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> Outcome<UserResponse> {
    state.services.users().create_user(payload).await
}

/// Partially update a user
#[utoipa::path(
    put,
    path = "/api/v1/user/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(payload): ValidatedJson<UpdateUser>,
) -> Outcome<UserResponse> {
    state.services.users().update_user(id, payload).await
}

/// Change a user's password
#[utoipa::path(
    patch,
    path = "/api/v1/user/{id}/password",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    request_body = PasswordUpdate,
    responses(
        (status = 200, description = "Password updated"),
        (status = 404, description = "User not found"),
        (status = 422, description = "Password too short")
    )
)]
pub async fn update_password(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(payload): ValidatedJson<PasswordUpdate>,
) -> Outcome<()> {
    state.services.users().update_password(id, payload).await
}

/// Soft-delete a user
#[utoipa::path(
    delete,
    path = "/api/v1/user/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Outcome<UserResponse> {
    state.services.users().delete_user(id).await
}

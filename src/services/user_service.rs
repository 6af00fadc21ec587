//! User service - Handles user-related business logic.
//!
//! Passwords are hashed here on create and on password change; the
//! repository only ever sees the stored hash.

use async_trait::async_trait;
use axum::http::StatusCode;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::domain::{
    CreateUser, NewUser, Password, PasswordUpdate, UpdateUser, UserList, UserResponse,
};
use crate::errors::AppError;
use crate::infra::UserRepository;
use crate::types::{Done, Outcome};
use crate::utils::clock;

/// User service trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    async fn list_users(&self) -> Outcome<UserList>;

    async fn get_user(&self, id: i32) -> Outcome<UserResponse>;

    /// All active users sharing a biometric id; 404 when there are none.
    async fn get_users_by_bio_id(&self, bio_id: i32) -> Outcome<Vec<UserResponse>>;

    async fn create_user(&self, input: CreateUser) -> Outcome<UserResponse>;

    /// Partial update: fields absent from `input` keep their value.
    async fn update_user(&self, id: i32, input: UpdateUser) -> Outcome<UserResponse>;

    async fn update_password(&self, id: i32, input: PasswordUpdate) -> Outcome<()>;

    async fn delete_user(&self, id: i32) -> Outcome<UserResponse>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> Outcome<UserList> {
        let users = self.users.get_all().await?.into_data();

        Ok(Done::with(
            UserList::from(users),
            "Users fetched successfully",
            StatusCode::OK,
        ))
    }

    async fn get_user(&self, id: i32) -> Outcome<UserResponse> {
        let user = self.users.get_by_id(id).await?.into_data();

        Ok(Done::with(
            UserResponse::from(user),
            "User fetched successfully",
            StatusCode::OK,
        ))
    }

    async fn get_users_by_bio_id(&self, bio_id: i32) -> Outcome<Vec<UserResponse>> {
        let users = self.users.get_by_bio_id(bio_id).await?.into_data();

        if users.is_empty() {
            tracing::info!(bio_id, "No users for bio id");
            return Err(AppError::fail(
                "No users found for this Bio ID",
                StatusCode::NOT_FOUND,
            ));
        }

        Ok(Done::with(
            users.into_iter().map(UserResponse::from).collect(),
            "Users fetched successfully",
            StatusCode::OK,
        ))
    }

    async fn create_user(&self, input: CreateUser) -> Outcome<UserResponse> {
        let password = Password::new(&input.password)?;

        let draft = NewUser {
            bio_id: input.bio_id,
            user_name: input.user_name,
            password_hash: password.into_string(),
            created_by: input.created_by,
            created_at: clock::now(),
        };

        let user = self.users.create(draft).await?.into_data();
        tracing::info!(user_id = user.user_id, "User created");

        Ok(Done::with(
            UserResponse::from(user),
            "User created successfully",
            StatusCode::CREATED,
        ))
    }

    async fn update_user(&self, id: i32, input: UpdateUser) -> Outcome<UserResponse> {
        let mut user = self.users.get_by_id(id).await?.into_data();
        user.apply(input, clock::now());

        let user = self.users.update(user).await?.into_data();

        Ok(Done::with(
            UserResponse::from(user),
            "User updated successfully",
            StatusCode::OK,
        ))
    }

    async fn update_password(&self, id: i32, input: PasswordUpdate) -> Outcome<()> {
        let mut user = self.users.get_by_id(id).await?.into_data();
        let password = Password::new(&input.password)?;

        user.set_password(password.into_string(), input.updated_by, clock::now());
        self.users.update(user).await?;
        tracing::info!(user_id = id, "Password changed");

        Ok(Done::with((), "Password updated successfully", StatusCode::OK))
    }

    async fn delete_user(&self, id: i32) -> Outcome<UserResponse> {
        let mut user = self.users.get_by_id(id).await?.into_data();
        user.soft_delete(clock::now());

        let user = self.users.update(user).await?.into_data();
        tracing::info!(user_id = id, "User soft-deleted");

        Ok(Done::with(
            UserResponse::from(user),
            "User deleted successfully",
            StatusCode::OK,
        ))
    }
}

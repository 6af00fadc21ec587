//! Login and logout payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User login request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 25, message = "User name must be 1 to 25 characters"))]
    #[schema(example = "jdoe")]
    pub user_name: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Returned on successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = 1001)]
    pub bio_id: Option<i32>,
    #[schema(example = "jdoe")]
    pub user_name: String,
    /// Same timestamp as the recorded login-log row
    pub login_time: DateTime<Utc>,
}

/// Close the caller's most recent open session
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LogoutRequest {
    #[validate(range(min = 1, message = "user_id must be positive"))]
    #[schema(example = 1)]
    pub user_id: i32,
}

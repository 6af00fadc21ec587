//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::patch::nullable;
use crate::config::{RECORD_ACTIVE, RECORD_DELETED};

/// User domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: i32,
    pub bio_id: Option<i32>,
    pub user_name: String,
    pub password_hash: String,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<i32>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: i32,
}

impl User {
    /// Check if user is active (not deleted)
    pub fn is_active(&self) -> bool {
        self.is_deleted == RECORD_ACTIVE
    }

    /// Apply a partial update. Absent fields are left untouched; `bio_id`
    /// may be cleared with an explicit `null`.
    pub fn apply(&mut self, changes: UpdateUser, now: DateTime<Utc>) {
        if let Some(user_name) = changes.user_name {
            self.user_name = user_name;
        }
        if let Some(bio_id) = changes.bio_id {
            self.bio_id = bio_id;
        }
        if let Some(updated_by) = changes.updated_by {
            self.updated_by = Some(updated_by);
        }
        self.updated_at = Some(now);
    }

    /// Replace the stored password hash
    pub fn set_password(&mut self, password_hash: String, updated_by: Option<i32>, now: DateTime<Utc>) {
        self.password_hash = password_hash;
        if updated_by.is_some() {
            self.updated_by = updated_by;
        }
        self.updated_at = Some(now);
    }

    /// Soft delete the user
    pub fn soft_delete(&mut self, now: DateTime<Utc>) {
        self.is_deleted = RECORD_DELETED;
        self.updated_at = Some(now);
    }
}

/// Insert draft for a user (everything but the generated id)
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub bio_id: Option<i32>,
    pub user_name: String,
    pub password_hash: String,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// Login name (not required to be unique)
    #[validate(length(min = 1, max = 25, message = "User name must be 1 to 25 characters"))]
    #[schema(example = "jdoe", max_length = 25)]
    pub user_name: String,
    /// Biometric device identifier
    #[schema(example = 1001)]
    pub bio_id: Option<i32>,
    /// Plain text password (minimum 8 characters)
    #[serde(alias = "password_hash")]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
    pub created_by: Option<i32>,
}

/// User update data transfer object
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 25, message = "User name must be 1 to 25 characters"))]
    #[schema(example = "jdoe2")]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>, nullable)]
    pub bio_id: Option<Option<i32>>,
    pub updated_by: Option<i32>,
}

/// Password change request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PasswordUpdate {
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "NewSecurePass123!", min_length = 8)]
    pub password: String,
    pub updated_by: Option<i32>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub user_id: i32,
    #[schema(example = 1001)]
    pub bio_id: Option<i32>,
    #[schema(example = "jdoe")]
    pub user_name: String,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<i32>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: i32,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            bio_id: user.bio_id,
            user_name: user.user_name,
            created_by: user.created_by,
            created_at: user.created_at,
            updated_by: user.updated_by,
            updated_at: user.updated_at,
            is_deleted: user.is_deleted,
        }
    }
}

/// Active users plus their count
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserList {
    pub users: Vec<UserResponse>,
    pub total: usize,
}

impl From<Vec<User>> for UserList {
    fn from(users: Vec<User>) -> Self {
        let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
        Self {
            total: users.len(),
            users,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock;

    fn user() -> User {
        User {
            user_id: 7,
            bio_id: Some(42),
            user_name: "alice".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            created_by: Some(1),
            created_at: clock::now(),
            updated_by: None,
            updated_at: None,
            is_deleted: RECORD_ACTIVE,
        }
    }

    #[test]
    fn test_partial_update_keeps_absent_fields() {
        let mut user = user();
        let now = clock::now();

        user.apply(
            UpdateUser {
                user_name: Some("x".to_string()),
                ..Default::default()
            },
            now,
        );

        assert_eq!(user.user_name, "x");
        assert_eq!(user.bio_id, Some(42));
        assert_eq!(user.password_hash, "$argon2id$hash");
        assert_eq!(user.updated_at, Some(now));
    }

    #[test]
    fn test_soft_delete_flips_flag() {
        let mut user = user();
        assert!(user.is_active());

        user.soft_delete(clock::now());

        assert!(!user.is_active());
        assert_eq!(user.is_deleted, RECORD_DELETED);
        assert!(user.updated_at.is_some());
    }

    #[test]
    fn test_response_hides_password_hash() {
        let json = serde_json::to_value(UserResponse::from(user())).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["user_name"], "alice");
    }

    #[test]
    fn test_create_accepts_legacy_password_field() {
        let dto: CreateUser = serde_json::from_value(serde_json::json!({
            "user_name": "bob",
            "password_hash": "Plaintext123"
        }))
        .unwrap();

        assert_eq!(dto.password, "Plaintext123");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_long_user_name() {
        let dto = CreateUser {
            user_name: "a".repeat(26),
            bio_id: None,
            password: "Password123".to_string(),
            created_by: None,
        };
        assert!(dto.validate().is_err());
    }
}

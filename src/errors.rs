//! Centralized error handling.
//!
//! `AppError` is the failure side of every [`Outcome`](crate::types::Outcome):
//! it carries a message and a status code but never a payload. Rendering it
//! produces the failure envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::config::DEFAULT_FAILURE_MESSAGE;
use crate::types::Envelope;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Invalid username or password")]
    InvalidCredentials,

    // Resource errors
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Persistence: only the context is ever shown to the caller
    #[error("{context}")]
    Database {
        context: String,
        #[source]
        source: DbErr,
    },

    // Explicit failure with caller-chosen message and code
    #[error("{message}")]
    Rejected { message: String, code: StatusCode },

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Rejected { code, .. } => *code,
            AppError::Database { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal error");
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl Default for AppError {
    fn default() -> Self {
        AppError::Rejected {
            message: DEFAULT_FAILURE_MESSAGE.to_string(),
            code: StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        Envelope::<()>::failure(self.status(), self.user_message()).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn not_found(entity: impl Into<String>) -> Self {
        AppError::NotFound(entity.into())
    }

    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn database(context: impl Into<String>, source: DbErr) -> Self {
        AppError::Database {
            context: context.into(),
            source,
        }
    }

    pub fn fail(message: impl Into<String>, code: StatusCode) -> Self {
        AppError::Rejected {
            message: message.into(),
            code,
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

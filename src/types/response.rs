use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::outcome::{Done, Outcome};

/// Response envelope emitted by every endpoint.
///
/// `source_output` is always present and is `null` on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub response_status: bool,
    pub status_code: u16,
    pub message: String,
    pub source_output: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(done: Done<T>) -> Self {
        let (data, message, code) = done.into_parts();
        Self {
            response_status: true,
            status_code: code.as_u16(),
            message,
            source_output: Some(data),
        }
    }

    pub fn failure(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            response_status: false,
            status_code: code.as_u16(),
            message: message.into(),
            source_output: None,
        }
    }
}

impl<T> From<Outcome<T>> for Envelope<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Ok(done) => Self::success(done),
            Err(err) => Self::failure(err.status(), err.user_message()),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl<T: Serialize> IntoResponse for Done<T> {
    fn into_response(self) -> Response {
        Envelope::success(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = Envelope::success(Done::with(
            json!({"vendor_id": 1}),
            "Vendor created successfully",
            StatusCode::CREATED,
        ));

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "response_status": true,
                "status_code": 201,
                "message": "Vendor created successfully",
                "source_output": {"vendor_id": 1}
            })
        );
    }

    #[test]
    fn test_failure_envelope_keeps_null_payload() {
        let outcome: Outcome<String> = Err(AppError::not_found("User"));
        let envelope = Envelope::from(outcome);

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "response_status": false,
                "status_code": 404,
                "message": "User not found",
                "source_output": null
            })
        );
    }

    #[test]
    fn test_http_status_follows_status_code() {
        let response = Envelope::<()>::failure(StatusCode::CONFLICT, "Vendor already exists")
            .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = Done::with((), "Created", StatusCode::CREATED).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

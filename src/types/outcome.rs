//! Tagged success/failure value shared by repositories, services and routes.
//!
//! An [`Outcome`] is either a [`Done`] (payload, message, status code) or an
//! [`AppError`] (message and status code, never a payload). Both sides are
//! immutable once built.

use axum::http::StatusCode;

use crate::config::DEFAULT_SUCCESS_MESSAGE;
use crate::errors::AppError;

/// Success side of an [`Outcome`].
#[derive(Debug, Clone, PartialEq)]
pub struct Done<T> {
    data: T,
    message: String,
    code: StatusCode,
}

impl<T> Done<T> {
    /// Success with the default message (`"Success"`) and code 200.
    pub fn ok(data: T) -> Self {
        Self::with(data, DEFAULT_SUCCESS_MESSAGE, StatusCode::OK)
    }

    /// Success with an explicit message and code.
    pub fn with(data: T, message: impl Into<String>, code: StatusCode) -> Self {
        Self {
            data,
            message: message.into(),
            code,
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> StatusCode {
        self.code
    }

    pub fn into_data(self) -> T {
        self.data
    }

    pub fn into_parts(self) -> (T, String, StatusCode) {
        (self.data, self.message, self.code)
    }

    /// Transform the payload, keeping message and code.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Done<U> {
        Done {
            data: f(self.data),
            message: self.message,
            code: self.code,
        }
    }
}

/// Universal return type between repository, service and route layers.
pub type Outcome<T> = Result<Done<T>, AppError>;

/// Build a success outcome.
pub fn ok<T>(data: T, message: impl Into<String>, code: StatusCode) -> Outcome<T> {
    Ok(Done::with(data, message, code))
}

/// Build a failure outcome. It never carries a payload.
pub fn fail<T>(message: impl Into<String>, code: StatusCode) -> Outcome<T> {
    Err(AppError::fail(message, code))
}

/// Uniform read access to either side of an outcome.
pub trait OutcomeExt<T> {
    fn success(&self) -> bool;
    fn code(&self) -> StatusCode;
    fn message(&self) -> String;
    fn data(&self) -> Option<&T>;
}

impl<T> OutcomeExt<T> for Outcome<T> {
    fn success(&self) -> bool {
        self.is_ok()
    }

    fn code(&self) -> StatusCode {
        match self {
            Ok(done) => done.code(),
            Err(err) => err.status(),
        }
    }

    fn message(&self) -> String {
        match self {
            Ok(done) => done.message().to_string(),
            Err(err) => err.user_message(),
        }
    }

    fn data(&self) -> Option<&T> {
        self.as_ref().ok().map(Done::data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_defaults() {
        let done = Done::ok(5);
        assert_eq!(done.message(), "Success");
        assert_eq!(done.code(), StatusCode::OK);
        assert_eq!(*done.data(), 5);
    }

    #[test]
    fn test_ok_factory() {
        let outcome = ok("vendor", "Vendor created successfully", StatusCode::CREATED);

        assert!(outcome.success());
        assert_eq!(outcome.code(), StatusCode::CREATED);
        assert_eq!(outcome.message(), "Vendor created successfully");
        assert_eq!(outcome.data(), Some(&"vendor"));
    }

    #[test]
    fn test_fail_has_no_payload() {
        let outcome: Outcome<i32> = fail("Vendor not found", StatusCode::NOT_FOUND);

        assert!(!outcome.success());
        assert_eq!(outcome.code(), StatusCode::NOT_FOUND);
        assert_eq!(outcome.message(), "Vendor not found");
        assert!(outcome.data().is_none());
    }

    #[test]
    fn test_default_failure() {
        let outcome: Outcome<()> = Err(AppError::default());
        assert_eq!(outcome.code(), StatusCode::BAD_REQUEST);
        assert_eq!(outcome.message(), "Error");
    }

    #[test]
    fn test_map_keeps_message_and_code() {
        let done = Done::with(2, "Doubled", StatusCode::ACCEPTED).map(|n| n * 2);
        assert_eq!(done.into_parts(), (4, "Doubled".to_string(), StatusCode::ACCEPTED));
    }
}

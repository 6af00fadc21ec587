//! Outermost failure boundary.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::config::UNEXPECTED_ERROR_MESSAGE;
use crate::types::Envelope;

/// Convert a handler panic into a generic 500 envelope.
///
/// The panic payload is logged and never sent to the caller.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %detail, "Unhandled panic while serving request");

    Envelope::<()>::failure(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR_MESSAGE)
        .into_response()
}

//! Per-request tracing context.

use axum::extract::Request;
use tracing::Span;

use crate::config::REQUEST_ID_HEADER;

/// Span for one request, carrying method, path and the request id set by
/// `SetRequestIdLayer`.
pub fn make_request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}

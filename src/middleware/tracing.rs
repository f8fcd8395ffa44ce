// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Builds one span per HTTP request carrying the propagated x-request-id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use axum::extract::Request;
use tracing::{field, info_span, Span};

/// Header carrying the request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create a tracing span for an HTTP request
///
/// Used as the `TraceLayer` span factory. The request ID has already been set
/// by `SetRequestIdLayer`, so every log line inside the handler is correlated.
pub fn create_request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
        status_code = field::Empty,
    )
}

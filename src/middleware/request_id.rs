// ABOUTME: Copies the request correlation ID into JSON error bodies
// ABOUTME: Rewrites responses carrying an ErrorResponse extension after the handler runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use super::tracing::REQUEST_ID_HEADER;
use crate::errors::ErrorResponse;
use axum::body::Body;
use axum::extract::Request;
use axum::http::header::CONTENT_LENGTH;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

/// Fill `error.request_id` in error bodies produced by `AppError`
///
/// Must run inside `SetRequestIdLayer` so the header is already present.
/// Responses without an `ErrorResponse` extension pass through untouched.
pub async fn stamp_error_request_id(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);

    let response = next.run(request).await;

    let Some(request_id) = request_id else {
        return response;
    };
    let Some(mut error_body) = response.extensions().get::<ErrorResponse>().cloned() else {
        return response;
    };
    error_body.error.request_id = Some(request_id);

    let (mut parts, original) = response.into_parts();
    match serde_json::to_vec(&error_body) {
        Ok(bytes) => {
            parts.headers.remove(CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            warn!(error = %e, "Failed to re-encode error body with request ID");
            Response::from_parts(parts, original)
        }
    }
}

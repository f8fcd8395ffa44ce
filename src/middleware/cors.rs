// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for the admin web client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use crate::config::environment::HttpConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS settings for the API
///
/// `CORS_ALLOWED_ORIGINS` is either `*` or a comma-separated origin list.
/// Entries that are not valid header values are ignored; if none remain,
/// any origin is allowed.
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="https://admin.example.com,https://booking.example.com"
/// ```
pub fn setup_cors(config: &HttpConfig) -> CorsLayer {
    let allowed = config.cors_allowed_origins.trim();
    let allow_origin = if allowed.is_empty() || allowed == "*" {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-request-id"),
        ])
        .expose_headers([HeaderName::from_static("x-request-id")])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
}

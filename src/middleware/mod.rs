// ABOUTME: HTTP middleware for the booking administration server
// ABOUTME: CORS configuration, request tracing, and request IDs on error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

/// CORS middleware configuration
pub mod cors;
/// Request ID stamping for JSON error bodies
pub mod request_id;
/// Request spans and request ID header handling
pub mod tracing;

pub use cors::setup_cors;
pub use request_id::stamp_error_request_id;
pub use tracing::{create_request_span, REQUEST_ID_HEADER};

// ABOUTME: Unified error handling with standard error codes and HTTP response mapping
// ABOUTME: Defines AppError, ErrorCode, and the JSON error body returned by every route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

//! # Unified Error Handling System
//!
//! Centralized error handling for the booking administration server. It
//! defines standard error codes, the HTTP status each code maps to, and the
//! JSON body returned to clients, so every module reports failures the same way.

/// Availability engine errors (invalid dates, unknown staff or services)
pub mod availability;
/// Database errors with `sqlx` conversions
pub mod database;

pub use availability::AvailabilityError;
pub use database::DatabaseError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,

    // Internal Errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::ValueOutOfRange => 400,

            // 404 Not Found
            Self::ResourceNotFound => 404,

            // 409 Conflict
            Self::ResourceAlreadyExists => 409,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::StorageError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::InternalError => "An internal server error occurred",
            Self::DatabaseError => "Database operation failed",
            Self::StorageError => "Storage operation failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured details
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Add structured details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field missing from the request
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{field} is required"),
        )
        .with_details(serde_json::json!({ "field": field }))
    }

    /// Value has the wrong shape (dates, times, weekdays)
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
///
/// A copy is stored in the response extensions so outer middleware can
/// stamp the request ID into the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an HTTP error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Request ID, filled in by the request ID middleware
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Additional structured details
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                request_id: None,
                details: error.details,
            },
        }
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use super::{AppError, ErrorResponse};
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use http::StatusCode;
    use tracing::{debug, error};

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            if status.is_server_error() {
                error!(code = ?self.code, error = %self, "Request failed");
            } else {
                debug!(code = ?self.code, error = %self, "Request rejected");
            }

            let body = ErrorResponse::from(self);
            let mut response = (status, Json(body.clone())).into_response();
            response.extensions_mut().insert(body);
            response
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidFormat.http_status(), 400);
        assert_eq!(ErrorCode::MissingRequiredField.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::DatabaseError.http_status(), 500);
    }

    #[test]
    fn test_missing_field_carries_field_name() {
        let error = AppError::missing_field("date");

        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.message, "date is required");
        assert_eq!(error.details["field"], "date");
    }

    #[test]
    fn test_error_response_serialization() {
        let mut response = ErrorResponse::from(AppError::invalid_format("bad date"));

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("INVALID_FORMAT"));
        assert!(!json.contains("request_id"));
        assert!(!json.contains("details"));

        response.error.request_id = Some("req-123".to_owned());
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("req-123"));
    }
}

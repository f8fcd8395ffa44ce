// ABOUTME: Error types for staff and service availability queries
// ABOUTME: Separates client mistakes (bad dates, unknown ids) from storage failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use super::{AppError, DatabaseError, ErrorCode};
use thiserror::Error;

/// Failures reported by the availability engines
#[derive(Debug, Error)]
pub enum AvailabilityError {
    /// Requested date is not a `YYYY-MM-DD` calendar day
    #[error("invalid date format '{date}', use YYYY-MM-DD")]
    InvalidDateFormat {
        /// Date exactly as received
        date: String,
    },

    /// No staff member with this identifier exists
    #[error("staff member {staff_id} not found")]
    StaffNotFound {
        /// Requested staff identifier
        staff_id: String,
    },

    /// No service with this identifier exists
    #[error("service {service_id} not found")]
    ServiceNotFound {
        /// Requested service identifier
        service_id: String,
    },

    /// The schedule store failed
    #[error(transparent)]
    Storage(#[from] DatabaseError),
}

impl AvailabilityError {
    /// Build an invalid date error for the given input
    pub fn invalid_date(date: impl Into<String>) -> Self {
        Self::InvalidDateFormat { date: date.into() }
    }

    /// Whether the failure is the caller's fault rather than the server's
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

impl From<AvailabilityError> for AppError {
    fn from(error: AvailabilityError) -> Self {
        match error {
            AvailabilityError::InvalidDateFormat { ref date } => {
                let details = serde_json::json!({ "date": date, "expected": "YYYY-MM-DD" });
                Self::new(ErrorCode::InvalidFormat, error.to_string()).with_details(details)
            }
            AvailabilityError::StaffNotFound { .. } | AvailabilityError::ServiceNotFound { .. } => {
                Self::new(ErrorCode::ResourceNotFound, error.to_string())
            }
            AvailabilityError::Storage(db_error) => db_error.into(),
        }
    }
}

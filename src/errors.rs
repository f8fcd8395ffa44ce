// ABOUTME: Error handling re-exports from booking-core for the server crate
// ABOUTME: Keeps `crate::errors::AppError` paths stable across the codebase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

pub use booking_core::errors::{
    AppError, AppResult, AvailabilityError, DatabaseError, ErrorCode, ErrorResponse,
    ErrorResponseDetails,
};

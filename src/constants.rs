// ABOUTME: System-wide constants for the booking administration server
// ABOUTME: Environment variable names, defaults, and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

//! # Constants Module
//!
//! Environment variable names and the defaults applied when they are unset.
//! Slot-related defaults live in `booking_core::constants` so tests and the
//! engines share them.

pub use booking_core::constants::{formats, slots};

/// Service identity used in logs
pub mod service_names {
    /// Default service name
    pub const BOOKING_ADMIN_SERVER: &str = "booking-admin-server";
}

/// Environment variable names read at startup
pub mod env_vars {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Legacy HTTP port variable, consulted when `HTTP_PORT` is unset
    pub const SERVER_PORT: &str = "SERVER_PORT";
    /// HTTP bind address
    pub const HOST: &str = "HOST";
    /// Database URL (`sqlite:<path>` or `sqlite::memory:`)
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Legacy database file path, consulted when `DATABASE_URL` is unset
    pub const DB_PATH: &str = "DB_PATH";
    /// Slot length in minutes
    pub const SLOT_INTERVAL_MINUTES: &str = "SLOT_INTERVAL_MINUTES";
    /// Concurrent staff lookups per service availability request
    pub const AVAILABILITY_MAX_CONCURRENCY: &str = "AVAILABILITY_MAX_CONCURRENCY";
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Comma-separated CORS origins or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Defaults applied when an environment variable is unset
pub mod defaults {
    /// HTTP listen port
    pub const HTTP_PORT: u16 = 8080;
    /// HTTP bind address
    pub const HOST: &str = "0.0.0.0";
    /// Database file path
    pub const DATABASE_PATH: &str = "./api.db";
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

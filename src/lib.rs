// ABOUTME: Main library entry point for the booking administration server
// ABOUTME: Staff and service administration plus staff/service availability computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

#![deny(unsafe_code)]

//! # Booking Admin Server
//!
//! HTTP backend for administering staff, services, weekly schedules and
//! holidays, and for reporting bookable time slots.
//!
//! ## Architecture
//!
//! - **Availability**: slot generation, per-staff resolution, and per-service
//!   aggregation over a [`availability::ScheduleStore`]
//! - **Database**: `SQLite` managers for staff, services, schedules, holidays,
//!   and staff/service assignments
//! - **Routes**: thin axum handlers delegating to the managers and engines
//! - **Config**: environment-only configuration with CLI overrides
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use booking_admin_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("{}", config.summary());
//!     Ok(())
//! }
//! ```

/// Slot generation, per-staff availability, and per-service aggregation
pub mod availability;

/// Environment configuration
pub mod config;

/// Application constants and environment variable names
pub mod constants;

/// `SQLite` persistence for staff, services, schedules, and assignments
pub mod database;

/// Unified error handling (re-exported from `booking-core`)
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request tracing)
pub mod middleware;

/// Domain models (re-exported from `booking-core`)
pub mod models;

/// Shared server resources handed to every route
pub mod resources;

/// HTTP route handlers organized by domain
pub mod routes;

/// Router assembly and HTTP serving
pub mod server;

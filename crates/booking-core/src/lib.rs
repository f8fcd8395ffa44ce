// ABOUTME: Core types and constants for the booking administration server
// ABOUTME: Foundation crate with error handling, calendar primitives, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

#![deny(unsafe_code)]

//! # Booking Core
//!
//! Foundation crate providing shared types for the booking administration
//! backend. It changes infrequently so the server crate benefits from
//! incremental compilation.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **models**: Staff, services, schedules, holidays, and the staff/service junction
//! - **constants**: Wire formats and slot defaults

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (Staff, Service, `ScheduleEntry`, Holiday, `TimeOfDay`, ...)
pub mod models;

/// Wire formats and defaults shared by the server and its tests
pub mod constants;

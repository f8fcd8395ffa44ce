// ABOUTME: Domain model re-exports from booking-core for the server crate
// ABOUTME: Staff, services, schedule entries, holidays, and calendar primitives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

pub use booking_core::models::*;

// ABOUTME: Availability computation for staff members and services
// ABOUTME: Slot generation, per-staff resolution, and cross-staff aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

//! # Availability
//!
//! Read-only computation of bookable slots. Data flows from a
//! [`ScheduleStore`] through [`AvailabilityEngine`] (one staff member, one
//! date) and, for services, through [`AggregationEngine`], which unions the
//! per-staff results of every qualified staff member.

/// Cross-staff union for service queries
pub mod aggregation;
/// Per-staff slot resolution
pub mod engine;
/// Time window discretization
pub mod slots;
/// Storage seam consumed by the engines
pub mod store;

pub use aggregation::AggregationEngine;
pub use engine::{resolve_slots, AvailabilityEngine};
pub use slots::{generate_slots, generate_slots_from_str};
pub use store::{ReplaceOutcome, ScheduleStore};

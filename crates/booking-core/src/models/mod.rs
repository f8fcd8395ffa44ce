// ABOUTME: Domain models shared by the storage layer, engines, and HTTP routes
// ABOUTME: Re-exports staff, service, schedule, and calendar types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

/// Time of day, weekday, and calendar date primitives
pub mod calendar;
/// Weekly schedules, holidays, and qualifications
pub mod schedule;
/// Service catalog records
pub mod service;
/// Staff records
pub mod staff;

pub use calendar::{
    format_calendar_date, parse_calendar_date, CalendarParseError, TimeOfDay, Weekday,
};
pub use schedule::{AvailabilityData, Holiday, ScheduleEntry, StaffServiceAssignment};
pub use service::{CreateServiceRequest, Service, UpdateServiceRequest};
pub use staff::{CreateStaffRequest, Staff, UpdateStaffRequest};

use serde::{Deserialize, Deserializer};

/// Deserialize an explicit JSON `null` as the type's default value
///
/// Pair with `#[serde(default)]` so absent and `null` fields behave the same.
///
/// # Errors
///
/// Returns the deserializer's error when the value has the wrong type
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

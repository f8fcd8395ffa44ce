// ABOUTME: Resolves one staff member's bookable slots on a calendar date
// ABOUTME: Combines holidays and weekly schedule entries with the slot generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use super::slots::generate_slots;
use super::store::ScheduleStore;
use crate::errors::AvailabilityError;
use crate::models::{parse_calendar_date, AvailabilityData, TimeOfDay, Weekday};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

/// Per-staff availability over a shared [`ScheduleStore`]
#[derive(Clone)]
pub struct AvailabilityEngine {
    store: Arc<dyn ScheduleStore>,
    interval_minutes: u32,
}

impl AvailabilityEngine {
    /// Create an engine producing slots of `interval_minutes`
    #[must_use]
    pub fn new(store: Arc<dyn ScheduleStore>, interval_minutes: u32) -> Self {
        Self {
            store,
            interval_minutes,
        }
    }

    /// Slots for a staff member on a `YYYY-MM-DD` date
    ///
    /// # Errors
    ///
    /// - `InvalidDateFormat` when `date` is not a strict `YYYY-MM-DD` day
    /// - `StaffNotFound` when the staff member does not exist
    /// - `Storage` when the store fails
    pub async fn staff_slots(
        &self,
        staff_id: &str,
        date: &str,
    ) -> Result<Vec<TimeOfDay>, AvailabilityError> {
        let date = parse_calendar_date(date).map_err(|_| AvailabilityError::invalid_date(date))?;
        self.slots_on(staff_id, date).await
    }

    /// Slots for a staff member on an already validated date
    ///
    /// # Errors
    ///
    /// Returns `StaffNotFound` for unknown staff and `Storage` when the store fails
    pub async fn slots_on(
        &self,
        staff_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<TimeOfDay>, AvailabilityError> {
        let data = self
            .store
            .availability_data(staff_id)
            .await?
            .ok_or_else(|| AvailabilityError::StaffNotFound {
                staff_id: staff_id.to_owned(),
            })?;

        let slots = resolve_slots(&data, date, self.interval_minutes);
        debug!(
            staff.id = %staff_id,
            date = %date,
            slots.count = slots.len(),
            "Resolved staff availability"
        );
        Ok(slots)
    }
}

/// Slots a staff member offers on `date` given their schedule and holidays
///
/// A holiday blocks the whole day. Otherwise every entry recurring on the
/// date's weekday contributes its slots, concatenated in stored order.
#[must_use]
pub fn resolve_slots(
    data: &AvailabilityData,
    date: NaiveDate,
    interval_minutes: u32,
) -> Vec<TimeOfDay> {
    if data.is_holiday(date) {
        return Vec::new();
    }

    data.entries_on(Weekday::of(date))
        .flat_map(|entry| generate_slots(entry.start, entry.end, interval_minutes))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::ScheduleEntry;
    use std::collections::BTreeSet;

    fn entry(day: Weekday, start: &str, end: &str) -> ScheduleEntry {
        ScheduleEntry::new(day, start.parse().unwrap(), end.parse().unwrap())
    }

    fn date(s: &str) -> NaiveDate {
        parse_calendar_date(s).unwrap()
    }

    #[test]
    fn test_holiday_blocks_scheduled_day() {
        let data = AvailabilityData {
            entries: vec![entry(Weekday::Thursday, "09:00", "17:00")],
            holidays: BTreeSet::from([date("2025-12-25")]),
        };

        assert!(resolve_slots(&data, date("2025-12-25"), 30).is_empty());
        assert_eq!(resolve_slots(&data, date("2026-01-01"), 30).len(), 16);
    }

    #[test]
    fn test_multiple_shifts_concatenate_in_stored_order() {
        let data = AvailabilityData {
            entries: vec![
                entry(Weekday::Monday, "14:00", "15:00"),
                entry(Weekday::Monday, "09:00", "10:00"),
            ],
            holidays: BTreeSet::new(),
        };

        let slots: Vec<String> = resolve_slots(&data, date("2025-12-22"), 30)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(slots, ["14:00", "14:30", "09:00", "09:30"]);
    }
}

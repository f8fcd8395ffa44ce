// ABOUTME: Discretizes a time-of-day window into fixed-length bookable slots
// ABOUTME: Pure functions over TimeOfDay with a string-level entry point for raw input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use crate::models::TimeOfDay;

/// Slot start times in `[start, end)` stepping by `interval_minutes`
///
/// A slot is included when it starts before `end`, even if a full interval
/// does not fit before `end`. Returns an empty list when `start >= end` or
/// when `interval_minutes` is zero.
#[must_use]
pub fn generate_slots(start: TimeOfDay, end: TimeOfDay, interval_minutes: u32) -> Vec<TimeOfDay> {
    if interval_minutes == 0 || start >= end {
        return Vec::new();
    }

    let end_minutes = end.minutes_since_midnight();
    (start.minutes_since_midnight()..end_minutes)
        .step_by(interval_minutes as usize)
        .filter_map(TimeOfDay::from_minutes)
        .collect()
}

/// Like [`generate_slots`] but for raw `HH:MM` strings
///
/// Unparseable bounds yield an empty list rather than an error.
#[must_use]
pub fn generate_slots_from_str(start: &str, end: &str, interval_minutes: u32) -> Vec<TimeOfDay> {
    match (start.parse::<TimeOfDay>(), end.parse::<TimeOfDay>()) {
        (Ok(start), Ok(end)) => generate_slots(start, end, interval_minutes),
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn render(slots: &[TimeOfDay]) -> Vec<String> {
        slots.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_working_day_yields_sixteen_half_hours() {
        let slots = generate_slots_from_str("09:00", "17:00", 30);

        assert_eq!(slots.len(), 16);
        assert_eq!(slots.first().unwrap().to_string(), "09:00");
        assert_eq!(slots.last().unwrap().to_string(), "16:30");
        assert!(!render(&slots).contains(&"17:00".to_owned()));
    }

    #[test]
    fn test_empty_and_inverted_windows() {
        assert!(generate_slots_from_str("09:00", "09:00", 30).is_empty());
        assert!(generate_slots_from_str("17:00", "09:00", 30).is_empty());
    }

    #[test]
    fn test_final_partial_slot_is_kept() {
        let slots = generate_slots_from_str("09:00", "10:10", 30);
        assert_eq!(render(&slots), ["09:00", "09:30", "10:00"]);
    }

    #[test]
    fn test_zero_interval_is_empty() {
        assert!(generate_slots_from_str("09:00", "17:00", 0).is_empty());
    }

    #[test]
    fn test_unparseable_bounds_are_empty() {
        assert!(generate_slots_from_str("nine", "17:00", 30).is_empty());
        assert!(generate_slots_from_str("09:00", "25:00", 30).is_empty());
    }

    #[test]
    fn test_window_reaching_end_of_day() {
        let slots = generate_slots_from_str("23:00", "23:59", 30);
        assert_eq!(render(&slots), ["23:00", "23:30"]);
    }

    #[test]
    fn test_interval_longer_than_window() {
        let slots = generate_slots_from_str("09:00", "09:15", 60);
        assert_eq!(render(&slots), ["09:00"]);
    }
}

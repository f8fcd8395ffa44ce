// ABOUTME: Weekly schedule entries, holiday exceptions, and staff-service assignments
// ABOUTME: Typed inputs consumed read-only by the availability engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use super::calendar::{TimeOfDay, Weekday};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A recurring weekly availability window for one staff member
///
/// Serialized as `{ "day", "start", "end" }` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Weekday the window recurs on
    #[serde(rename = "day")]
    pub day_of_week: Weekday,
    /// First bookable time
    pub start: TimeOfDay,
    /// Exclusive end of the window
    pub end: TimeOfDay,
}

impl ScheduleEntry {
    /// Create an entry without checking ordering
    #[must_use]
    pub const fn new(day_of_week: Weekday, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            day_of_week,
            start,
            end,
        }
    }

    /// Whether the window contains at least one minute
    #[must_use]
    pub fn is_well_ordered(&self) -> bool {
        self.start < self.end
    }
}

/// A calendar day on which a staff member is fully unavailable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Owning staff member
    pub staff_id: String,
    /// Blocked day
    pub date: NaiveDate,
    /// Free-form reason
    #[serde(default)]
    pub reason: String,
}

/// Qualification of one staff member to perform one service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaffServiceAssignment {
    /// Qualified staff member
    pub staff_id: String,
    /// Service they may perform
    pub service_id: String,
}

/// Everything needed to resolve one staff member's slots on any date
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityData {
    /// Schedule entries in stored order
    pub entries: Vec<ScheduleEntry>,
    /// Blocked calendar days
    pub holidays: BTreeSet<NaiveDate>,
}

impl AvailabilityData {
    /// Whether the given day is blocked by a holiday
    #[must_use]
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Entries recurring on the given weekday, in stored order
    pub fn entries_on(&self, weekday: Weekday) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.day_of_week == weekday)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_entry_wire_shape() {
        let entry: ScheduleEntry =
            serde_json::from_str(r#"{"day":"Monday","start":"09:00","end":"12:00"}"#).unwrap();

        assert_eq!(entry.day_of_week, Weekday::Monday);
        assert!(entry.is_well_ordered());

        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["day"], "Monday");
        assert_eq!(json["end"], "12:00");
    }

    #[test]
    fn test_schedule_entry_rejects_malformed_time() {
        let parsed =
            serde_json::from_str::<ScheduleEntry>(r#"{"day":"Monday","start":"9","end":"12:00"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_entries_on_keeps_stored_order() {
        let t = |s: &str| s.parse::<TimeOfDay>().unwrap();
        let data = AvailabilityData {
            entries: vec![
                ScheduleEntry::new(Weekday::Monday, t("14:00"), t("15:00")),
                ScheduleEntry::new(Weekday::Tuesday, t("09:00"), t("10:00")),
                ScheduleEntry::new(Weekday::Monday, t("09:00"), t("10:00")),
            ],
            holidays: BTreeSet::new(),
        };

        let starts: Vec<_> = data
            .entries_on(Weekday::Monday)
            .map(|entry| entry.start.to_string())
            .collect();
        assert_eq!(starts, ["14:00", "09:00"]);
    }
}

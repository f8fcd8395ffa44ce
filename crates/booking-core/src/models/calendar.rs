// ABOUTME: Calendar primitives for availability math: time of day, weekday, calendar date
// ABOUTME: Parses and renders the HH:MM and YYYY-MM-DD wire formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use crate::constants::{formats, slots::MINUTES_PER_DAY};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday as ChronoWeekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A value could not be parsed from its wire format
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarParseError {
    /// Not a 24-hour `HH:MM` time
    #[error("invalid time of day '{0}', use HH:MM")]
    TimeOfDay(String),
    /// Not a weekday name
    #[error("invalid day of week '{0}'")]
    Weekday(String),
    /// Not a `YYYY-MM-DD` calendar day
    #[error("invalid date '{0}', use YYYY-MM-DD")]
    Date(String),
}

/// Minute-precision time of day in a single implicit local calendar
///
/// Ordering is chronological, which matches the lexicographic order of the
/// zero-padded `HH:MM` rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// Build from hour and minute; `None` outside `00:00..=23:59`
    #[must_use]
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Self::from_minutes(hour * 60 + minute)
        } else {
            None
        }
    }

    /// Build from minutes since midnight; `None` at or past the end of the day
    #[must_use]
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            u16::try_from(minutes).ok().map(|minutes| Self { minutes })
        } else {
            None
        }
    }

    /// Minutes elapsed since midnight
    #[must_use]
    pub const fn minutes_since_midnight(self) -> u32 {
        self.minutes as u32
    }

    /// Hour component (0-23)
    #[must_use]
    pub const fn hour(self) -> u32 {
        self.minutes_since_midnight() / 60
    }

    /// Minute component (0-59)
    #[must_use]
    pub const fn minute(self) -> u32 {
        self.minutes_since_midnight() % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = CalendarParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let well_shaped = bytes.len() == 5
            && bytes.iter().enumerate().all(|(i, b)| match i {
                2 => *b == b':',
                _ => b.is_ascii_digit(),
            });

        if !well_shaped {
            return Err(CalendarParseError::TimeOfDay(s.to_owned()));
        }

        NaiveTime::parse_from_str(s, formats::TIME_OF_DAY)
            .ok()
            .and_then(|time| Self::from_hm(time.hour(), time.minute()))
            .ok_or_else(|| CalendarParseError::TimeOfDay(s.to_owned()))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = CalendarParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// Day of the week a schedule entry recurs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Weekday {
    /// All weekdays starting from Monday
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Weekday a calendar date falls on (proleptic Gregorian)
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }
}

impl FromStr for Weekday {
    type Err = CalendarParseError;

    /// Accepts full names and three-letter abbreviations, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" => Ok(Self::Monday),
            "tuesday" | "tue" => Ok(Self::Tuesday),
            "wednesday" | "wed" => Ok(Self::Wednesday),
            "thursday" | "thu" => Ok(Self::Thursday),
            "friday" | "fri" => Ok(Self::Friday),
            "saturday" | "sat" => Ok(Self::Saturday),
            "sunday" | "sun" => Ok(Self::Sunday),
            _ => Err(CalendarParseError::Weekday(s.to_owned())),
        }
    }
}

impl From<ChronoWeekday> for Weekday {
    fn from(value: ChronoWeekday) -> Self {
        match value {
            ChronoWeekday::Mon => Self::Monday,
            ChronoWeekday::Tue => Self::Tuesday,
            ChronoWeekday::Wed => Self::Wednesday,
            ChronoWeekday::Thu => Self::Thursday,
            ChronoWeekday::Fri => Self::Friday,
            ChronoWeekday::Sat => Self::Saturday,
            ChronoWeekday::Sun => Self::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Weekday {
    type Error = CalendarParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Weekday> for String {
    fn from(value: Weekday) -> Self {
        value.as_str().to_owned()
    }
}

/// Parse a strict `YYYY-MM-DD` calendar date
///
/// The shape is checked before calendar validity: four-digit year, two-digit
/// month and day, dash separators. `2025-1-5` and `2025-02-30` are both rejected.
///
/// # Errors
///
/// Returns `CalendarParseError::Date` when the input is not a real calendar day
/// in that exact shape.
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate, CalendarParseError> {
    let bytes = input.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_shaped {
        return Err(CalendarParseError::Date(input.to_owned()));
    }

    NaiveDate::parse_from_str(input, formats::CALENDAR_DATE)
        .map_err(|_| CalendarParseError::Date(input.to_owned()))
}

/// Render a calendar date as `YYYY-MM-DD`
#[must_use]
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(formats::CALENDAR_DATE).to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_round_trips_zero_padded() {
        let time: TimeOfDay = "09:05".parse().unwrap();

        assert_eq!(time.minutes_since_midnight(), 9 * 60 + 5);
        assert_eq!(time.to_string(), "09:05");
    }

    #[test]
    fn test_time_of_day_rejects_out_of_range_and_junk() {
        for input in ["24:00", "12:60", "noon", "", "09:00:00", "9am"] {
            assert!(input.parse::<TimeOfDay>().is_err(), "accepted {input}");
        }
    }

    #[test]
    fn test_time_of_day_requires_zero_padding() {
        for input in ["9:5", "9:05", "09:5", " 09:00", "09:00 ", "0９:00"] {
            assert!(input.parse::<TimeOfDay>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_time_of_day_orders_chronologically() {
        let early: TimeOfDay = "09:30".parse().unwrap();
        let late: TimeOfDay = "10:00".parse().unwrap();

        assert!(early < late);
        assert!(early.to_string() < late.to_string());
    }

    #[test]
    fn test_time_of_day_serde_uses_string_form() {
        let time = TimeOfDay::from_hm(16, 30).unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"16:30\"");

        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, time);
        assert!(serde_json::from_str::<TimeOfDay>("\"25:00\"").is_err());
    }

    #[test]
    fn test_weekday_parses_names_and_abbreviations() {
        assert_eq!("Monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("sun".parse::<Weekday>().unwrap(), Weekday::Sunday);
        assert_eq!(" FRIDAY ".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert!("Funday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_weekday_of_known_dates() {
        let monday = NaiveDate::from_ymd_opt(2025, 12, 22).unwrap();
        let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();

        assert_eq!(Weekday::of(monday), Weekday::Monday);
        assert_eq!(Weekday::of(leap_day), Weekday::Thursday);
    }

    #[test]
    fn test_parse_calendar_date_is_strict() {
        assert!(parse_calendar_date("2025-12-25").is_ok());
        assert!(parse_calendar_date("2024-02-29").is_ok());

        for input in [
            "2025-1-5",
            "2025/12/25",
            "25-12-2025",
            "2025-02-30",
            "2023-02-29",
            "2025-13-01",
            "2025-12-25T10:00",
            "",
            "tomorrow",
        ] {
            assert!(parse_calendar_date(input).is_err(), "accepted {input}");
        }
    }
}

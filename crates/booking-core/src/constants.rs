// ABOUTME: Wire format strings and slot defaults shared across the workspace
// ABOUTME: Keeps HH:MM and YYYY-MM-DD formats in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

/// Time and date wire formats
pub mod formats {
    /// 24-hour time of day, zero padded (`09:30`)
    pub const TIME_OF_DAY: &str = "%H:%M";

    /// Calendar date (`2025-12-25`)
    pub const CALENDAR_DATE: &str = "%Y-%m-%d";
}

/// Slot generation defaults
pub mod slots {
    /// Default slot size in minutes
    pub const DEFAULT_INTERVAL_MINUTES: u32 = 30;

    /// Minutes in one calendar day
    pub const MINUTES_PER_DAY: u32 = 24 * 60;

    /// Default number of staff lookups in flight during service aggregation
    pub const DEFAULT_MAX_CONCURRENCY: usize = 8;
}

// ABOUTME: Database operations for weekly staff schedules and holiday exceptions
// ABOUTME: Schedule replacement is a single delete-then-insert transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use super::transactions::TransactionGuard;
use crate::availability::ReplaceOutcome;
use crate::errors::DatabaseError;
use crate::models::{
    format_calendar_date, parse_calendar_date, Holiday, ScheduleEntry, TimeOfDay, Weekday,
};
use chrono::NaiveDate;
use sqlx::{sqlite::SqliteRow, Executor, Row, Sqlite, SqlitePool};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Schedule and holiday database operations manager
pub struct ScheduleManager {
    pool: SqlitePool,
}

impl ScheduleManager {
    /// Create a new schedule manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// A staff member's schedule entries in stored order
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn schedule(&self, staff_id: &str) -> Result<Vec<ScheduleEntry>, DatabaseError> {
        fetch_schedule(&self.pool, staff_id).await
    }

    /// Replace a staff member's whole schedule in one transaction
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails; nothing is changed in that case
    pub async fn replace_schedule(
        &self,
        staff_id: &str,
        entries: &[ScheduleEntry],
    ) -> Result<ReplaceOutcome, DatabaseError> {
        let mut guard = TransactionGuard::begin(&self.pool).await?;

        if !staff_exists(guard.executor()?, staff_id).await? {
            guard.rollback().await?;
            return Ok(ReplaceOutcome::StaffNotFound);
        }

        sqlx::query("DELETE FROM staff_schedule WHERE staff_id = $1")
            .bind(staff_id)
            .execute(guard.executor()?)
            .await?;

        for (position, entry) in entries.iter().enumerate() {
            sqlx::query(
                r"
                INSERT INTO staff_schedule (staff_id, position, day_of_week, start_time, end_time)
                VALUES ($1, $2, $3, $4, $5)
                ",
            )
            .bind(staff_id)
            .bind(i64::try_from(position).unwrap_or(i64::MAX))
            .bind(entry.day_of_week.as_str())
            .bind(entry.start.to_string())
            .bind(entry.end.to_string())
            .execute(guard.executor()?)
            .await?;
        }

        guard.commit().await?;
        debug!(staff.id = %staff_id, entries = entries.len(), "Replaced staff schedule");
        Ok(ReplaceOutcome::Replaced)
    }

    /// Record a holiday, updating the reason if the date is already blocked
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` if the staff member does not exist
    pub async fn add_holiday(&self, holiday: &Holiday) -> Result<(), DatabaseError> {
        sqlx::query(
            r"
            INSERT INTO staff_holidays (staff_id, date, reason)
            VALUES ($1, $2, $3)
            ON CONFLICT (staff_id, date) DO UPDATE SET reason = excluded.reason
            ",
        )
        .bind(&holiday.staff_id)
        .bind(format_calendar_date(holiday.date))
        .bind(&holiday.reason)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// A staff member's holidays ordered by date
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn holidays(&self, staff_id: &str) -> Result<Vec<Holiday>, DatabaseError> {
        let rows = sqlx::query(
            "SELECT staff_id, date, reason FROM staff_holidays WHERE staff_id = $1 ORDER BY date",
        )
        .bind(staff_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().filter_map(row_to_holiday).collect())
    }
}

/// Whether a staff row exists
pub(crate) async fn staff_exists<'e, E>(executor: E, staff_id: &str) -> Result<bool, DatabaseError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query("SELECT 1 FROM staff WHERE id = $1")
        .bind(staff_id)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}

/// Decoded schedule entries for a staff member; undecodable rows are skipped
pub(crate) async fn fetch_schedule<'e, E>(
    executor: E,
    staff_id: &str,
) -> Result<Vec<ScheduleEntry>, DatabaseError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query(
        r"
        SELECT id, day_of_week, start_time, end_time
        FROM staff_schedule
        WHERE staff_id = $1
        ORDER BY position, id
        ",
    )
    .bind(staff_id)
    .fetch_all(executor)
    .await?;

    Ok(rows
        .iter()
        .filter_map(|row| match row_to_entry(row) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(staff.id = %staff_id, error = %e, "Skipping undecodable schedule entry");
                None
            }
        })
        .collect())
}

/// Holiday dates for a staff member; undecodable rows are skipped
pub(crate) async fn fetch_holiday_dates<'e, E>(
    executor: E,
    staff_id: &str,
) -> Result<BTreeSet<NaiveDate>, DatabaseError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query("SELECT staff_id, date, reason FROM staff_holidays WHERE staff_id = $1")
        .bind(staff_id)
        .fetch_all(executor)
        .await?;

    Ok(rows
        .iter()
        .filter_map(row_to_holiday)
        .map(|holiday| holiday.date)
        .collect())
}

fn row_to_entry(row: &SqliteRow) -> Result<ScheduleEntry, DatabaseError> {
    let invalid = |column: &'static str, reason: String| DatabaseError::InvalidData {
        table: "staff_schedule",
        column,
        reason,
    };

    let day: String = row.get("day_of_week");
    let start: String = row.get("start_time");
    let end: String = row.get("end_time");

    let day_of_week = day
        .parse::<Weekday>()
        .map_err(|e| invalid("day_of_week", e.to_string()))?;
    let start = start
        .parse::<TimeOfDay>()
        .map_err(|e| invalid("start_time", e.to_string()))?;
    let end = end
        .parse::<TimeOfDay>()
        .map_err(|e| invalid("end_time", e.to_string()))?;

    Ok(ScheduleEntry::new(day_of_week, start, end))
}

fn row_to_holiday(row: &SqliteRow) -> Option<Holiday> {
    let staff_id: String = row.get("staff_id");
    let date: String = row.get("date");

    match parse_calendar_date(&date) {
        Ok(date) => Some(Holiday {
            staff_id,
            date,
            reason: row.get("reason"),
        }),
        Err(e) => {
            warn!(staff.id = %staff_id, error = %e, "Skipping undecodable holiday");
            None
        }
    }
}

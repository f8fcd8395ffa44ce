// ABOUTME: SQLite implementation of the availability ScheduleStore
// ABOUTME: Reads each staff member's schedule and holidays inside one read transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use super::assignments::{fetch_assignments_for_service, service_exists};
use super::schedules::{fetch_holiday_dates, fetch_schedule, staff_exists};
use super::transactions::TransactionGuard;
use super::Database;
use crate::availability::{ReplaceOutcome, ScheduleStore};
use crate::errors::DatabaseError;
use crate::models::{AvailabilityData, ScheduleEntry};
use async_trait::async_trait;

/// [`ScheduleStore`] over the `SQLite` schema
#[derive(Clone)]
pub struct SqliteScheduleStore {
    database: Database,
}

impl SqliteScheduleStore {
    /// Create a store sharing the database pool
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            database: database.clone(),
        }
    }
}

#[async_trait]
impl ScheduleStore for SqliteScheduleStore {
    async fn availability_data(
        &self,
        staff_id: &str,
    ) -> Result<Option<AvailabilityData>, DatabaseError> {
        let mut guard = TransactionGuard::begin(self.database.pool()).await?;

        if !staff_exists(guard.executor()?, staff_id).await? {
            guard.rollback().await?;
            return Ok(None);
        }

        let entries = fetch_schedule(guard.executor()?, staff_id).await?;
        let holidays = fetch_holiday_dates(guard.executor()?, staff_id).await?;
        guard.commit().await?;

        Ok(Some(AvailabilityData { entries, holidays }))
    }

    async fn qualified_staff(
        &self,
        service_id: &str,
    ) -> Result<Option<Vec<String>>, DatabaseError> {
        let mut guard = TransactionGuard::begin(self.database.pool()).await?;

        if !service_exists(guard.executor()?, service_id).await? {
            guard.rollback().await?;
            return Ok(None);
        }

        let assignments = fetch_assignments_for_service(guard.executor()?, service_id).await?;
        guard.commit().await?;

        Ok(Some(
            assignments
                .into_iter()
                .map(|assignment| assignment.staff_id)
                .collect(),
        ))
    }

    async fn replace_schedule(
        &self,
        staff_id: &str,
        entries: &[ScheduleEntry],
    ) -> Result<ReplaceOutcome, DatabaseError> {
        self.database
            .schedules()
            .replace_schedule(staff_id, entries)
            .await
    }

    async fn replace_assignments(
        &self,
        staff_id: &str,
        service_ids: &[String],
    ) -> Result<ReplaceOutcome, DatabaseError> {
        self.database
            .assignments()
            .replace_assignments(staff_id, service_ids)
            .await
    }
}

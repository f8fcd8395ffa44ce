// ABOUTME: Database operations for the staff/service qualification junction
// ABOUTME: Assignment replacement is a single delete-then-insert transaction per staff member
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use super::schedules::staff_exists;
use super::transactions::TransactionGuard;
use crate::availability::ReplaceOutcome;
use crate::errors::DatabaseError;
use crate::models::StaffServiceAssignment;
use sqlx::{Executor, Row, Sqlite, SqlitePool};
use std::collections::HashSet;
use tracing::debug;

/// Staff/service assignment database operations manager
pub struct AssignmentManager {
    pool: SqlitePool,
}

impl AssignmentManager {
    /// Create a new assignment manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Replace the services a staff member is qualified for
    ///
    /// Duplicate ids are collapsed. Nothing changes unless the staff member and
    /// every listed service exist.
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails; nothing is changed in that case
    pub async fn replace_assignments(
        &self,
        staff_id: &str,
        service_ids: &[String],
    ) -> Result<ReplaceOutcome, DatabaseError> {
        let mut guard = TransactionGuard::begin(&self.pool).await?;

        if !staff_exists(guard.executor()?, staff_id).await? {
            guard.rollback().await?;
            return Ok(ReplaceOutcome::StaffNotFound);
        }

        let mut seen = HashSet::new();
        let unique: Vec<&String> = service_ids.iter().filter(|id| seen.insert(*id)).collect();

        for service_id in &unique {
            if !service_exists(guard.executor()?, service_id).await? {
                guard.rollback().await?;
                return Ok(ReplaceOutcome::UnknownService {
                    service_id: (*service_id).clone(),
                });
            }
        }

        sqlx::query("DELETE FROM staff_services WHERE staff_id = $1")
            .bind(staff_id)
            .execute(guard.executor()?)
            .await?;

        for service_id in &unique {
            sqlx::query("INSERT INTO staff_services (staff_id, service_id) VALUES ($1, $2)")
                .bind(staff_id)
                .bind(*service_id)
                .execute(guard.executor()?)
                .await?;
        }

        guard.commit().await?;
        debug!(staff.id = %staff_id, services = unique.len(), "Replaced staff service assignments");
        Ok(ReplaceOutcome::Replaced)
    }
}

/// Whether a service row exists
pub(crate) async fn service_exists<'e, E>(
    executor: E,
    service_id: &str,
) -> Result<bool, DatabaseError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query("SELECT 1 FROM services WHERE id = $1")
        .bind(service_id)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}

/// Assignments for a service in insertion order
pub(crate) async fn fetch_assignments_for_service<'e, E>(
    executor: E,
    service_id: &str,
) -> Result<Vec<StaffServiceAssignment>, DatabaseError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query(
        "SELECT staff_id, service_id FROM staff_services WHERE service_id = $1 ORDER BY id",
    )
    .bind(service_id)
    .fetch_all(executor)
    .await?;

    Ok(rows
        .iter()
        .map(|row| StaffServiceAssignment {
            staff_id: row.get("staff_id"),
            service_id: row.get("service_id"),
        })
        .collect())
}

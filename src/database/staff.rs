// ABOUTME: Database operations for staff records
// ABOUTME: CRUD over the staff table; deletes cascade to schedules, holidays, and assignments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use crate::errors::{AppError, AppResult, DatabaseError, ErrorCode};
use crate::models::Staff;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Staff database operations manager
pub struct StaffManager {
    pool: SqlitePool,
}

impl StaffManager {
    /// Create a new staff manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new staff member
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the id is taken, or a database error
    pub async fn create(&self, staff: &Staff) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO staff (id, name, email, phone, role)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&staff.id)
        .bind(&staff.name)
        .bind(&staff.email)
        .bind(&staff.phone)
        .bind(&staff.role)
        .execute(&self.pool)
        .await
        .map_err(|e| match DatabaseError::from(e) {
            DatabaseError::ConstraintViolation { .. } => AppError::new(
                ErrorCode::ResourceAlreadyExists,
                format!("Staff member {} already exists", staff.id),
            ),
            other => AppError::database(format!("Failed to create staff member: {other}")),
        })?;

        Ok(())
    }

    /// Get a staff member by ID
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get(&self, staff_id: &str) -> AppResult<Option<Staff>> {
        let row = sqlx::query("SELECT id, name, email, phone, role FROM staff WHERE id = $1")
            .bind(staff_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get staff member: {e}")))?;

        Ok(row.as_ref().map(row_to_staff))
    }

    /// List all staff ordered by name
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list(&self) -> AppResult<Vec<Staff>> {
        let rows = sqlx::query("SELECT id, name, email, phone, role FROM staff ORDER BY name, id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list staff: {e}")))?;

        Ok(rows.iter().map(row_to_staff).collect())
    }

    /// Overwrite all mutable fields of a staff member
    ///
    /// Returns `false` if no staff member has this ID.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn update(&self, staff: &Staff) -> AppResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE staff SET name = $1, email = $2, phone = $3, role = $4
            WHERE id = $5
            ",
        )
        .bind(&staff.name)
        .bind(&staff.email)
        .bind(&staff.phone)
        .bind(&staff.role)
        .bind(&staff.id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update staff member: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a staff member and everything that references them
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn delete(&self, staff_id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM staff WHERE id = $1")
            .bind(staff_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete staff member: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Staff qualified for a service, ordered by name
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_for_service(&self, service_id: &str) -> AppResult<Vec<Staff>> {
        let rows = sqlx::query(
            r"
            SELECT s.id, s.name, s.email, s.phone, s.role
            FROM staff s
            JOIN staff_services ss ON ss.staff_id = s.id
            WHERE ss.service_id = $1
            ORDER BY s.name, s.id
            ",
        )
        .bind(service_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list staff for service: {e}")))?;

        Ok(rows.iter().map(row_to_staff).collect())
    }
}

fn row_to_staff(row: &SqliteRow) -> Staff {
    Staff {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        phone: row.get("phone"),
        role: row.get("role"),
    }
}

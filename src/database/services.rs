// ABOUTME: Database operations for the bookable service catalog
// ABOUTME: CRUD over the services table plus category listing and per-staff lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use crate::errors::{AppError, AppResult};
use crate::models::Service;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const SERVICE_COLUMNS: &str = "id, name, description, category, price, created_at, updated_at";

/// Service catalog database operations manager
pub struct ServiceManager {
    pool: SqlitePool,
}

impl ServiceManager {
    /// Create a new service manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new service
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn create(&self, service: &Service) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO services (id, name, description, category, price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(&service.id)
        .bind(&service.name)
        .bind(&service.description)
        .bind(&service.category)
        .bind(service.price)
        .bind(service.created_at.to_rfc3339())
        .bind(service.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create service: {e}")))?;

        Ok(())
    }

    /// Get a service by ID
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails or a stored timestamp is corrupt
    pub async fn get(&self, service_id: &str) -> AppResult<Option<Service>> {
        let row = sqlx::query(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services WHERE id = $1"
        ))
        .bind(service_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get service: {e}")))?;

        row.map(|r| row_to_service(&r)).transpose()
    }

    /// List all services ordered by category then name
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list(&self) -> AppResult<Vec<Service>> {
        let rows = sqlx::query(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services ORDER BY category, name, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list services: {e}")))?;

        rows.iter().map(row_to_service).collect()
    }

    /// Distinct non-empty categories in alphabetical order
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn categories(&self) -> AppResult<Vec<String>> {
        let rows = sqlx::query(
            "SELECT DISTINCT category FROM services WHERE category != '' ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list service categories: {e}")))?;

        Ok(rows.iter().map(|row| row.get("category")).collect())
    }

    /// Overwrite all mutable fields of a service
    ///
    /// Returns `false` if no service has this ID.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn update(&self, service: &Service) -> AppResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE services
            SET name = $1, description = $2, category = $3, price = $4, updated_at = $5
            WHERE id = $6
            ",
        )
        .bind(&service.name)
        .bind(&service.description)
        .bind(&service.category)
        .bind(service.price)
        .bind(service.updated_at.to_rfc3339())
        .bind(&service.id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update service: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a service and its staff assignments
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn delete(&self, service_id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(service_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete service: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Services a staff member is qualified for, ordered by name
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_for_staff(&self, staff_id: &str) -> AppResult<Vec<Service>> {
        let rows = sqlx::query(
            r"
            SELECT s.id, s.name, s.description, s.category, s.price, s.created_at, s.updated_at
            FROM services s
            JOIN staff_services ss ON ss.service_id = s.id
            WHERE ss.staff_id = $1
            ORDER BY s.name, s.id
            ",
        )
        .bind(staff_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list services for staff: {e}")))?;

        rows.iter().map(row_to_service).collect()
    }
}

fn parse_timestamp(value: &str, column: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::internal(format!("Invalid services.{column} timestamp: {e}")))
}

fn row_to_service(row: &SqliteRow) -> AppResult<Service> {
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");

    Ok(Service {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        category: row.get("category"),
        price: row.get("price"),
        created_at: parse_timestamp(&created_at, "created_at")?,
        updated_at: parse_timestamp(&updated_at, "updated_at")?,
    })
}

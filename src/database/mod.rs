// ABOUTME: SQLite database management for the booking administration server
// ABOUTME: Connection setup, schema migrations, and accessors for the per-table managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

//! # Database Management
//!
//! Owns the `SQLite` pool and the schema. Each table family has a small
//! manager (`StaffManager`, `ServiceManager`, `ScheduleManager`,
//! `AssignmentManager`) that borrows a clone of the pool.

/// Staff/service qualification junction
pub mod assignments;
/// `ScheduleStore` implementation over the managers
pub mod schedule_store;
/// Weekly schedules and holidays
pub mod schedules;
/// Service catalog
pub mod services;
/// Staff records
pub mod staff;
/// RAII transaction guard
pub mod transactions;

pub use assignments::AssignmentManager;
pub use schedule_store::SqliteScheduleStore;
pub use schedules::ScheduleManager;
pub use services::ServiceManager;
pub use staff::StaffManager;

use crate::config::environment::DatabaseUrl;
use crate::errors::DatabaseError;
use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

/// Database manager for staff, services, schedules, and assignments
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the database and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be opened or migrations fail
    pub async fn new(database_url: &DatabaseUrl) -> Result<Self> {
        let pool = match database_url {
            // Every pooled connection to `:memory:` would open a separate database,
            // so the pool is pinned to a single connection that never expires
            DatabaseUrl::Memory => SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true))
                .await
                .context("Failed to open in-memory database")?,
            DatabaseUrl::SQLite { path } => {
                let options = SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .journal_mode(SqliteJournalMode::Wal)
                    .foreign_keys(true);
                SqlitePoolOptions::new()
                    .connect_with(options)
                    .await
                    .with_context(|| format!("Failed to open database {}", path.display()))?
            }
        };

        let db = Self { pool };
        db.migrate().await?;
        info!(database = %database_url, "Database ready");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Staff record manager
    #[must_use]
    pub fn staff(&self) -> StaffManager {
        StaffManager::new(self.pool.clone())
    }

    /// Service catalog manager
    #[must_use]
    pub fn services(&self) -> ServiceManager {
        ServiceManager::new(self.pool.clone())
    }

    /// Schedule and holiday manager
    #[must_use]
    pub fn schedules(&self) -> ScheduleManager {
        ScheduleManager::new(self.pool.clone())
    }

    /// Staff/service assignment manager
    #[must_use]
    pub fn assignments(&self) -> AssignmentManager {
        AssignmentManager::new(self.pool.clone())
    }

    /// Check the database answers a trivial query
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any `CREATE` statement fails
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_staff().await?;
        self.migrate_services().await?;
        self.migrate_schedules().await?;
        self.migrate_assignments().await?;
        Ok(())
    }

    async fn migrate_staff(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS staff (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL DEFAULT '',
                role TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create staff table")?;

        Ok(())
    }

    async fn migrate_services(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS services (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                category TEXT NOT NULL DEFAULT '',
                price REAL NOT NULL DEFAULT 0 CHECK (price >= 0),
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create services table")?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_services_category ON services(category)")
            .execute(&self.pool)
            .await
            .context("Failed to create services category index")?;

        Ok(())
    }

    async fn migrate_schedules(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS staff_schedule (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                staff_id TEXT NOT NULL REFERENCES staff(id) ON DELETE CASCADE,
                position INTEGER NOT NULL,
                day_of_week TEXT NOT NULL,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create staff_schedule table")?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_staff_schedule_staff ON staff_schedule(staff_id, position)",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create staff_schedule index")?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS staff_holidays (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                staff_id TEXT NOT NULL REFERENCES staff(id) ON DELETE CASCADE,
                date TEXT NOT NULL,
                reason TEXT NOT NULL DEFAULT '',
                UNIQUE (staff_id, date)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create staff_holidays table")?;

        Ok(())
    }

    async fn migrate_assignments(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS staff_services (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                staff_id TEXT NOT NULL REFERENCES staff(id) ON DELETE CASCADE,
                service_id TEXT NOT NULL REFERENCES services(id) ON DELETE CASCADE,
                UNIQUE (staff_id, service_id)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create staff_services table")?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_staff_services_service ON staff_services(service_id)",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create staff_services index")?;

        Ok(())
    }
}

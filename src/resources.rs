// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Built once at startup so handlers never construct engines or pools themselves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use crate::availability::{AggregationEngine, AvailabilityEngine, ScheduleStore};
use crate::config::environment::ServerConfig;
use crate::database::{Database, SqliteScheduleStore};
use std::sync::Arc;

/// Database, configuration, and availability engines shared across handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Database handle for administrative CRUD
    pub database: Database,
    /// Schedule store the engines read from
    pub store: Arc<dyn ScheduleStore>,
    /// Per-staff availability
    pub availability: AvailabilityEngine,
    /// Per-service availability
    pub aggregation: AggregationEngine,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wire engines over the `SQLite` schedule store
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        let store: Arc<dyn ScheduleStore> = Arc::new(SqliteScheduleStore::new(&database));
        Self::with_store(database, store, config)
    }

    /// Wire engines over an arbitrary schedule store
    #[must_use]
    pub fn with_store(
        database: Database,
        store: Arc<dyn ScheduleStore>,
        config: Arc<ServerConfig>,
    ) -> Self {
        let availability = AvailabilityEngine::new(
            Arc::clone(&store),
            config.availability.slot_interval_minutes,
        );
        let aggregation = AggregationEngine::new(
            Arc::clone(&store),
            availability.clone(),
            config.availability.max_concurrency,
        );

        Self {
            database,
            store,
            availability,
            aggregation,
            config,
        }
    }
}

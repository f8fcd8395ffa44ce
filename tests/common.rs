// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory databases, server resources, and seed helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `booking_admin_server`

use anyhow::Result;
use booking_admin_server::{
    availability::ScheduleStore,
    config::environment::{DatabaseUrl, ServerConfig},
    database::Database,
    models::{CreateServiceRequest, ScheduleEntry, Service, Staff, TimeOfDay, Weekday},
    resources::ServerResources,
};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Standard in-memory test database
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Database::new(&DatabaseUrl::Memory).await
}

/// Server resources over a fresh in-memory database
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(
        database,
        Arc::new(ServerConfig::default()),
    )))
}

/// Server resources whose engines read from the given store
pub async fn create_test_resources_with_store(
    store: Arc<dyn ScheduleStore>,
) -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::with_store(
        database,
        store,
        Arc::new(ServerConfig::default()),
    )))
}

/// Build an `HH:MM` time, panicking on bad input
pub fn time(value: &str) -> TimeOfDay {
    value.parse().expect("valid HH:MM")
}

/// Build a schedule entry from wire strings
pub fn entry(day: Weekday, start: &str, end: &str) -> ScheduleEntry {
    ScheduleEntry::new(day, time(start), time(end))
}

/// Render slots as `HH:MM` strings for assertions
pub fn render(slots: &[TimeOfDay]) -> Vec<String> {
    slots.iter().map(ToString::to_string).collect()
}

/// Insert a staff member with a fixed id
pub async fn seed_staff(database: &Database, id: &str, name: &str) -> Result<Staff> {
    let staff = Staff {
        id: id.to_owned(),
        name: name.to_owned(),
        email: format!("{id}@example.com"),
        phone: String::new(),
        role: "stylist".to_owned(),
    };
    database.staff().create(&staff).await?;
    Ok(staff)
}

/// Insert a service with a generated id
pub async fn seed_service(database: &Database, name: &str, category: &str) -> Result<Service> {
    let service = CreateServiceRequest {
        name: name.to_owned(),
        description: String::new(),
        category: category.to_owned(),
        price: 40.0,
    }
    .into_service();
    database.services().create(&service).await?;
    Ok(service)
}

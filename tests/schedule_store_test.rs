// ABOUTME: Integration tests for the SQLite schedule store
// ABOUTME: Checks atomic schedule replacement under concurrent readers and assignment rollback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use booking_admin_server::availability::{AvailabilityEngine, ReplaceOutcome, ScheduleStore};
use booking_admin_server::config::environment::DatabaseUrl;
use booking_admin_server::database::{Database, SqliteScheduleStore};
use booking_admin_server::models::{parse_calendar_date, Holiday, ScheduleEntry, Weekday};
use common::{create_test_database, entry, init_test_logging, render, seed_service, seed_staff};
use std::sync::Arc;
use tempfile::TempDir;

const MONDAY: &str = "2025-12-22";

#[tokio::test]
async fn test_availability_data_for_unknown_staff_is_none() {
    let database = create_test_database().await.unwrap();
    let store = SqliteScheduleStore::new(&database);

    assert!(store.availability_data("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn test_replace_schedule_round_trips_in_order() {
    let database = create_test_database().await.unwrap();
    seed_staff(&database, "alice", "Alice").await.unwrap();
    let store = SqliteScheduleStore::new(&database);

    let entries = vec![
        entry(Weekday::Wednesday, "13:00", "17:00"),
        entry(Weekday::Monday, "09:00", "12:00"),
        entry(Weekday::Monday, "07:00", "08:00"),
    ];
    let outcome = store.replace_schedule("alice", &entries).await.unwrap();
    assert_eq!(outcome, ReplaceOutcome::Replaced);

    let data = store.availability_data("alice").await.unwrap().unwrap();
    assert_eq!(data.entries, entries);
    assert_eq!(database.schedules().schedule("alice").await.unwrap(), entries);

    // A second replace discards everything from the first
    store
        .replace_schedule("alice", &[entry(Weekday::Friday, "10:00", "11:00")])
        .await
        .unwrap();
    let data = store.availability_data("alice").await.unwrap().unwrap();
    assert_eq!(data.entries.len(), 1);
    assert_eq!(data.entries[0].day_of_week, Weekday::Friday);
}

#[tokio::test]
async fn test_replace_schedule_for_unknown_staff_changes_nothing() {
    let database = create_test_database().await.unwrap();
    let store = SqliteScheduleStore::new(&database);

    let outcome = store
        .replace_schedule("ghost", &[entry(Weekday::Monday, "09:00", "10:00")])
        .await
        .unwrap();

    assert_eq!(outcome, ReplaceOutcome::StaffNotFound);
    assert!(database.schedules().schedule("ghost").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_holiday_upsert_keeps_one_row_per_date() {
    let database = create_test_database().await.unwrap();
    seed_staff(&database, "alice", "Alice").await.unwrap();
    let date = parse_calendar_date("2025-12-25").unwrap();

    for reason in ["Christmas", "Closed"] {
        database
            .schedules()
            .add_holiday(&Holiday {
                staff_id: "alice".into(),
                date,
                reason: reason.into(),
            })
            .await
            .unwrap();
    }

    let holidays = database.schedules().holidays("alice").await.unwrap();
    assert_eq!(holidays.len(), 1);
    assert_eq!(holidays[0].reason, "Closed");

    let data = SqliteScheduleStore::new(&database)
        .availability_data("alice")
        .await
        .unwrap()
        .unwrap();
    assert!(data.is_holiday(date));
}

#[tokio::test]
async fn test_assignment_with_unknown_service_rolls_back() {
    let database = create_test_database().await.unwrap();
    seed_staff(&database, "alice", "Alice").await.unwrap();
    let cut = seed_service(&database, "Haircut", "hair").await.unwrap();
    let color = seed_service(&database, "Color", "hair").await.unwrap();
    let store = SqliteScheduleStore::new(&database);

    store
        .replace_assignments("alice", &[cut.id.clone()])
        .await
        .unwrap();

    let outcome = store
        .replace_assignments("alice", &[color.id.clone(), "no-such-service".to_owned()])
        .await
        .unwrap();

    assert_eq!(
        outcome,
        ReplaceOutcome::UnknownService {
            service_id: "no-such-service".into()
        }
    );
    let services = database.services().list_for_staff("alice").await.unwrap();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].id, cut.id);
    assert_eq!(
        store.qualified_staff(&color.id).await.unwrap(),
        Some(Vec::new())
    );
}

#[tokio::test]
async fn test_duplicate_service_ids_collapse() {
    let database = create_test_database().await.unwrap();
    seed_staff(&database, "alice", "Alice").await.unwrap();
    let cut = seed_service(&database, "Haircut", "hair").await.unwrap();
    let store = SqliteScheduleStore::new(&database);

    let outcome = store
        .replace_assignments("alice", &[cut.id.clone(), cut.id.clone()])
        .await
        .unwrap();

    assert_eq!(outcome, ReplaceOutcome::Replaced);
    assert_eq!(
        store.qualified_staff(&cut.id).await.unwrap(),
        Some(vec!["alice".to_owned()])
    );
}

#[tokio::test]
async fn test_deleting_staff_cascades_to_schedule_and_assignments() {
    let database = create_test_database().await.unwrap();
    seed_staff(&database, "alice", "Alice").await.unwrap();
    let cut = seed_service(&database, "Haircut", "hair").await.unwrap();
    let store = SqliteScheduleStore::new(&database);
    store
        .replace_schedule("alice", &[entry(Weekday::Monday, "09:00", "10:00")])
        .await
        .unwrap();
    store
        .replace_assignments("alice", &[cut.id.clone()])
        .await
        .unwrap();

    assert!(database.staff().delete("alice").await.unwrap());

    assert!(store.availability_data("alice").await.unwrap().is_none());
    assert!(database.schedules().schedule("alice").await.unwrap().is_empty());
    assert_eq!(store.qualified_staff(&cut.id).await.unwrap(), Some(Vec::new()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_readers_never_observe_partial_schedule() {
    init_test_logging();
    let temp_dir = TempDir::new().unwrap();
    let database = Database::new(&DatabaseUrl::SQLite {
        path: temp_dir.path().join("atomicity.db"),
    })
    .await
    .unwrap();
    seed_staff(&database, "alice", "Alice").await.unwrap();

    let store: Arc<dyn ScheduleStore> = Arc::new(SqliteScheduleStore::new(&database));
    let morning: Vec<ScheduleEntry> = vec![
        entry(Weekday::Monday, "09:00", "10:00"),
        entry(Weekday::Monday, "13:00", "14:00"),
    ];
    let late: Vec<ScheduleEntry> = vec![entry(Weekday::Monday, "18:00", "19:00")];
    let morning_slots = vec!["09:00", "09:30", "13:00", "13:30"];
    let late_slots = vec!["18:00", "18:30"];

    store.replace_schedule("alice", &morning).await.unwrap();
    let engine = AvailabilityEngine::new(Arc::clone(&store), 30);

    let writer = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            for round in 0..40 {
                let next = if round % 2 == 0 { &late } else { &morning };
                store.replace_schedule("alice", next).await.unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            let morning_slots = morning_slots.clone();
            let late_slots = late_slots.clone();
            tokio::spawn(async move {
                for _ in 0..50 {
                    let slots = render(&engine.staff_slots("alice", MONDAY).await.unwrap());
                    assert!(
                        slots == morning_slots || slots == late_slots,
                        "observed a mixed schedule: {slots:?}"
                    );
                }
            })
        })
        .collect();

    writer.await.unwrap();
    for reader in readers {
        reader.await.unwrap();
    }
}

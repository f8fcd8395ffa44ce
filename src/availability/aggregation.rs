// ABOUTME: Union of bookable slots across all staff qualified for a service
// ABOUTME: Fans out per-staff lookups with bounded concurrency and isolates per-staff failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use super::engine::AvailabilityEngine;
use super::store::ScheduleStore;
use crate::errors::AvailabilityError;
use crate::models::{parse_calendar_date, TimeOfDay};
use futures_util::{future, stream, StreamExt};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Service-level availability built on [`AvailabilityEngine`]
#[derive(Clone)]
pub struct AggregationEngine {
    store: Arc<dyn ScheduleStore>,
    staff_engine: AvailabilityEngine,
    max_concurrency: usize,
}

impl AggregationEngine {
    /// Create an aggregation engine running at most `max_concurrency` staff lookups at once
    #[must_use]
    pub fn new(
        store: Arc<dyn ScheduleStore>,
        staff_engine: AvailabilityEngine,
        max_concurrency: usize,
    ) -> Self {
        Self {
            store,
            staff_engine,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Sorted, duplicate-free slots offered by any staff qualified for the service
    ///
    /// A failure resolving one staff member is logged and that staff member's
    /// slots are left out; the rest of the result is still returned.
    ///
    /// # Errors
    ///
    /// - `InvalidDateFormat` when `date` is not a strict `YYYY-MM-DD` day
    /// - `ServiceNotFound` when the service does not exist
    /// - `Storage` when the qualified staff list cannot be read
    pub async fn service_slots(
        &self,
        service_id: &str,
        date: &str,
    ) -> Result<Vec<TimeOfDay>, AvailabilityError> {
        let day = parse_calendar_date(date).map_err(|_| AvailabilityError::invalid_date(date))?;

        let staff_ids = self
            .store
            .qualified_staff(service_id)
            .await?
            .ok_or_else(|| AvailabilityError::ServiceNotFound {
                service_id: service_id.to_owned(),
            })?;
        let staff_count = staff_ids.len();

        let staff_engine = &self.staff_engine;
        let slots = stream::iter(staff_ids)
            .map(|staff_id| async move {
                let result = staff_engine.slots_on(&staff_id, day).await;
                (staff_id, result)
            })
            .buffer_unordered(self.max_concurrency)
            .fold(BTreeSet::new(), |mut merged, (staff_id, result)| {
                match result {
                    Ok(slots) => merged.extend(slots),
                    Err(e) => warn!(
                        service.id = %service_id,
                        staff.id = %staff_id,
                        date = %day,
                        error = %e,
                        "Skipping staff member in service availability"
                    ),
                }
                future::ready(merged)
            })
            .await;

        debug!(
            service.id = %service_id,
            date = %day,
            staff.count = staff_count,
            slots.count = slots.len(),
            "Aggregated service availability"
        );
        Ok(slots.into_iter().collect())
    }
}

// ABOUTME: Storage seam for the availability engines
// ABOUTME: Supplies schedules, holidays, and qualifications; replaces schedules atomically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use crate::errors::DatabaseError;
use crate::models::{AvailabilityData, ScheduleEntry};
use async_trait::async_trait;

/// Result of an atomic replace operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// Old rows were deleted and the new set inserted
    Replaced,
    /// The staff member does not exist; nothing changed
    StaffNotFound,
    /// A referenced service does not exist; nothing changed
    UnknownService {
        /// First unknown service identifier
        service_id: String,
    },
}

/// Read and replace access to the data availability is computed from
///
/// Implementations must make both replace operations atomic: a concurrent
/// `availability_data` call observes either the full old set or the full new
/// set, never a mix.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Schedule entries (in stored order) and holidays for one staff member
    ///
    /// Returns `None` when the staff member does not exist.
    async fn availability_data(
        &self,
        staff_id: &str,
    ) -> Result<Option<AvailabilityData>, DatabaseError>;

    /// Identifiers of staff qualified to perform a service
    ///
    /// Returns `None` when the service does not exist.
    async fn qualified_staff(&self, service_id: &str)
        -> Result<Option<Vec<String>>, DatabaseError>;

    /// Replace a staff member's whole weekly schedule
    async fn replace_schedule(
        &self,
        staff_id: &str,
        entries: &[ScheduleEntry],
    ) -> Result<ReplaceOutcome, DatabaseError>;

    /// Replace the set of services a staff member is qualified for
    async fn replace_assignments(
        &self,
        staff_id: &str,
        service_ids: &[String],
    ) -> Result<ReplaceOutcome, DatabaseError>;
}

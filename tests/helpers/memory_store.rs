// ABOUTME: In-memory ScheduleStore for engine tests without SQLite
// ABOUTME: Supports injecting storage failures for chosen staff members

use async_trait::async_trait;
use booking_admin_server::availability::{ReplaceOutcome, ScheduleStore};
use booking_admin_server::errors::DatabaseError;
use booking_admin_server::models::{AvailabilityData, ScheduleEntry};
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

#[derive(Default)]
struct State {
    staff: HashMap<String, AvailabilityData>,
    services: HashMap<String, Vec<String>>,
    failing_staff: HashSet<String>,
}

/// Schedule store backed by hash maps
#[derive(Default)]
pub struct InMemoryScheduleStore {
    state: RwLock<State>,
    reads: AtomicUsize,
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a staff member with the given schedule
    pub fn with_staff(self, staff_id: &str, entries: Vec<ScheduleEntry>) -> Self {
        self.state.write().unwrap().staff.insert(
            staff_id.to_owned(),
            AvailabilityData {
                entries,
                holidays: BTreeSet::new(),
            },
        );
        self
    }

    /// Block a day for a registered staff member
    pub fn with_holiday(self, staff_id: &str, date: NaiveDate) -> Self {
        if let Some(data) = self.state.write().unwrap().staff.get_mut(staff_id) {
            data.holidays.insert(date);
        }
        self
    }

    /// Register a service performed by the given staff
    pub fn with_service(self, service_id: &str, staff_ids: &[&str]) -> Self {
        self.state.write().unwrap().services.insert(
            service_id.to_owned(),
            staff_ids.iter().map(|id| (*id).to_owned()).collect(),
        );
        self
    }

    /// Make every read of this staff member fail
    pub fn with_failing_staff(self, staff_id: &str) -> Self {
        self.state
            .write()
            .unwrap()
            .failing_staff
            .insert(staff_id.to_owned());
        self
    }

    /// Number of `availability_data` calls served
    #[allow(dead_code)]
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScheduleStore for InMemoryScheduleStore {
    async fn availability_data(
        &self,
        staff_id: &str,
    ) -> Result<Option<AvailabilityData>, DatabaseError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let state = self.state.read().unwrap();
        if state.failing_staff.contains(staff_id) {
            return Err(DatabaseError::query(format!(
                "simulated failure reading {staff_id}"
            )));
        }
        Ok(state.staff.get(staff_id).cloned())
    }

    async fn qualified_staff(
        &self,
        service_id: &str,
    ) -> Result<Option<Vec<String>>, DatabaseError> {
        Ok(self.state.read().unwrap().services.get(service_id).cloned())
    }

    async fn replace_schedule(
        &self,
        staff_id: &str,
        entries: &[ScheduleEntry],
    ) -> Result<ReplaceOutcome, DatabaseError> {
        let mut state = self.state.write().unwrap();
        match state.staff.get_mut(staff_id) {
            Some(data) => {
                data.entries = entries.to_vec();
                Ok(ReplaceOutcome::Replaced)
            }
            None => Ok(ReplaceOutcome::StaffNotFound),
        }
    }

    async fn replace_assignments(
        &self,
        staff_id: &str,
        service_ids: &[String],
    ) -> Result<ReplaceOutcome, DatabaseError> {
        let mut state = self.state.write().unwrap();
        if !state.staff.contains_key(staff_id) {
            return Ok(ReplaceOutcome::StaffNotFound);
        }
        if let Some(unknown) = service_ids.iter().find(|id| !state.services.contains_key(*id)) {
            return Ok(ReplaceOutcome::UnknownService {
                service_id: unknown.clone(),
            });
        }
        for staff in state.services.values_mut() {
            staff.retain(|id| id != staff_id);
        }
        for service_id in service_ids {
            if let Some(staff) = state.services.get_mut(service_id) {
                staff.push(staff_id.to_owned());
            }
        }
        Ok(ReplaceOutcome::Replaced)
    }
}

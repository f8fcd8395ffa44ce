// ABOUTME: Staff administration route handlers
// ABOUTME: Staff CRUD plus weekly schedules, holidays, and service qualifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

//! Staff administration routes
//!
//! Schedule and qualification writes go through the [`ScheduleStore`] so the
//! availability engines always observe either the old or the new state.
//!
//! [`ScheduleStore`]: crate::availability::ScheduleStore

use super::extractors::JsonBody;
use crate::availability::ReplaceOutcome;
use crate::errors::{AppError, AppResult};
use crate::models::{
    null_as_default, parse_calendar_date, CreateStaffRequest, Holiday, ScheduleEntry, Staff,
    TimeOfDay, UpdateStaffRequest, Weekday,
};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// One schedule entry as submitted by the admin client
///
/// Fields are optional so a missing value is reported by name as
/// `MISSING_REQUIRED_FIELD`.
#[derive(Debug, Default, Deserialize)]
pub struct ScheduleEntryBody {
    /// Weekday name (`Monday` or `Mon`, case-insensitive)
    pub day: Option<String>,
    /// Window start as `HH:MM`
    pub start: Option<String>,
    /// Window end as `HH:MM`
    pub end: Option<String>,
}

impl ScheduleEntryBody {
    fn into_entry(self, index: usize) -> AppResult<ScheduleEntry> {
        let day = self.day.ok_or_else(|| AppError::missing_field("day"))?;
        let start = self.start.ok_or_else(|| AppError::missing_field("start"))?;
        let end = self.end.ok_or_else(|| AppError::missing_field("end"))?;

        let day_of_week: Weekday = day
            .parse()
            .map_err(|e| AppError::invalid_format(format!("Entry {index}: {e}")))?;
        let start: TimeOfDay = start
            .parse()
            .map_err(|e| AppError::invalid_format(format!("Entry {index}: {e}")))?;
        let end: TimeOfDay = end
            .parse()
            .map_err(|e| AppError::invalid_format(format!("Entry {index}: {e}")))?;

        let entry = ScheduleEntry::new(day_of_week, start, end);
        if !entry.is_well_ordered() {
            return Err(AppError::invalid_input(format!(
                "Entry {index}: start {start} must be before end {end}"
            )));
        }
        Ok(entry)
    }
}

/// Holiday submission
#[derive(Debug, Default, Deserialize)]
pub struct HolidayBody {
    /// Blocked day as `YYYY-MM-DD`
    pub date: Option<String>,
    /// Optional reason
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason: String,
}

/// Replacement set of service qualifications
#[derive(Debug, Default, Deserialize)]
pub struct AssignServicesBody {
    /// Service identifiers the staff member can perform
    pub services: Option<Vec<String>>,
}

/// Staff routes implementation
pub struct StaffRoutes;

impl StaffRoutes {
    /// Create all staff administration routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/v1/staff",
                get(Self::handle_list_staff).post(Self::handle_create_staff),
            )
            .route(
                "/api/v1/staff/:staff_id",
                get(Self::handle_get_staff)
                    .patch(Self::handle_update_staff)
                    .delete(Self::handle_delete_staff),
            )
            .route(
                "/api/v1/staff/:staff_id/services",
                get(Self::handle_get_services).post(Self::handle_assign_services),
            )
            .route(
                "/api/v1/staff/:staff_id/schedule",
                get(Self::handle_get_schedule).post(Self::handle_set_schedule),
            )
            .route(
                "/api/v1/staff/:staff_id/holidays",
                get(Self::handle_list_holidays).post(Self::handle_add_holiday),
            )
            .with_state(resources)
    }

    async fn require_staff(resources: &ServerResources, staff_id: &str) -> AppResult<Staff> {
        resources
            .database
            .staff()
            .get(staff_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Staff member {staff_id}")))
    }

    async fn handle_list_staff(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let staff = resources.database.staff().list().await?;
        Ok((StatusCode::OK, Json(staff)).into_response())
    }

    async fn handle_create_staff(
        State(resources): State<Arc<ServerResources>>,
        JsonBody(request): JsonBody<CreateStaffRequest>,
    ) -> Result<Response, AppError> {
        if request.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        if request.email.trim().is_empty() {
            return Err(AppError::missing_field("email"));
        }

        let staff = request.into_staff();
        resources.database.staff().create(&staff).await?;
        info!(staff.id = %staff.id, "Created staff member");

        Ok((StatusCode::CREATED, Json(staff)).into_response())
    }

    async fn handle_get_staff(
        State(resources): State<Arc<ServerResources>>,
        Path(staff_id): Path<String>,
    ) -> Result<Response, AppError> {
        let staff = Self::require_staff(&resources, &staff_id).await?;
        Ok((StatusCode::OK, Json(staff)).into_response())
    }

    async fn handle_update_staff(
        State(resources): State<Arc<ServerResources>>,
        Path(staff_id): Path<String>,
        JsonBody(request): JsonBody<UpdateStaffRequest>,
    ) -> Result<Response, AppError> {
        if request.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::invalid_input("name cannot be empty"));
        }
        if request.email.as_deref().is_some_and(|e| e.trim().is_empty()) {
            return Err(AppError::invalid_input("email cannot be empty"));
        }

        let mut staff = Self::require_staff(&resources, &staff_id).await?;
        request.apply(&mut staff);

        if !resources.database.staff().update(&staff).await? {
            return Err(AppError::not_found(format!("Staff member {staff_id}")));
        }

        Ok((StatusCode::OK, Json(staff)).into_response())
    }

    async fn handle_delete_staff(
        State(resources): State<Arc<ServerResources>>,
        Path(staff_id): Path<String>,
    ) -> Result<Response, AppError> {
        if !resources.database.staff().delete(&staff_id).await? {
            return Err(AppError::not_found(format!("Staff member {staff_id}")));
        }
        info!(staff.id = %staff_id, "Deleted staff member");

        Ok((
            StatusCode::OK,
            Json(json!({ "success": true, "message": "Staff deleted" })),
        )
            .into_response())
    }

    async fn handle_get_services(
        State(resources): State<Arc<ServerResources>>,
        Path(staff_id): Path<String>,
    ) -> Result<Response, AppError> {
        Self::require_staff(&resources, &staff_id).await?;
        let services = resources.database.services().list_for_staff(&staff_id).await?;
        Ok((StatusCode::OK, Json(services)).into_response())
    }

    async fn handle_assign_services(
        State(resources): State<Arc<ServerResources>>,
        Path(staff_id): Path<String>,
        JsonBody(body): JsonBody<AssignServicesBody>,
    ) -> Result<Response, AppError> {
        let service_ids = body
            .services
            .ok_or_else(|| AppError::missing_field("services"))?;

        match resources
            .store
            .replace_assignments(&staff_id, &service_ids)
            .await?
        {
            ReplaceOutcome::Replaced => Ok((
                StatusCode::OK,
                Json(json!({ "success": true, "message": "Services updated" })),
            )
                .into_response()),
            ReplaceOutcome::StaffNotFound => {
                Err(AppError::not_found(format!("Staff member {staff_id}")))
            }
            ReplaceOutcome::UnknownService { service_id } => Err(AppError::invalid_input(
                format!("Service {service_id} does not exist"),
            )
            .with_details(json!({ "service_id": service_id }))),
        }
    }

    async fn handle_get_schedule(
        State(resources): State<Arc<ServerResources>>,
        Path(staff_id): Path<String>,
    ) -> Result<Response, AppError> {
        Self::require_staff(&resources, &staff_id).await?;
        let schedule = resources.database.schedules().schedule(&staff_id).await?;
        Ok((StatusCode::OK, Json(schedule)).into_response())
    }

    async fn handle_set_schedule(
        State(resources): State<Arc<ServerResources>>,
        Path(staff_id): Path<String>,
        JsonBody(body): JsonBody<Vec<ScheduleEntryBody>>,
    ) -> Result<Response, AppError> {
        let entries = body
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.into_entry(index))
            .collect::<AppResult<Vec<_>>>()?;

        match resources.store.replace_schedule(&staff_id, &entries).await? {
            ReplaceOutcome::Replaced => {
                info!(staff.id = %staff_id, entries = entries.len(), "Schedule replaced");
                Ok((StatusCode::OK, Json(json!({ "success": true }))).into_response())
            }
            ReplaceOutcome::StaffNotFound | ReplaceOutcome::UnknownService { .. } => {
                Err(AppError::not_found(format!("Staff member {staff_id}")))
            }
        }
    }

    async fn handle_add_holiday(
        State(resources): State<Arc<ServerResources>>,
        Path(staff_id): Path<String>,
        JsonBody(body): JsonBody<HolidayBody>,
    ) -> Result<Response, AppError> {
        let raw_date = body
            .date
            .filter(|d| !d.is_empty())
            .ok_or_else(|| AppError::missing_field("date"))?;
        let date = parse_calendar_date(&raw_date).map_err(|e| {
            AppError::invalid_format(e.to_string())
                .with_details(json!({ "date": raw_date, "expected": "YYYY-MM-DD" }))
        })?;

        Self::require_staff(&resources, &staff_id).await?;

        let holiday = Holiday {
            staff_id,
            date,
            reason: body.reason,
        };
        resources.database.schedules().add_holiday(&holiday).await?;

        Ok((StatusCode::OK, Json(json!({ "success": true }))).into_response())
    }

    async fn handle_list_holidays(
        State(resources): State<Arc<ServerResources>>,
        Path(staff_id): Path<String>,
    ) -> Result<Response, AppError> {
        Self::require_staff(&resources, &staff_id).await?;
        let holidays = resources.database.schedules().holidays(&staff_id).await?;
        Ok((StatusCode::OK, Json(holidays)).into_response())
    }
}

// ABOUTME: Availability route handlers for staff and service slot queries
// ABOUTME: Exposes the availability engines as GET endpoints keyed by date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use crate::errors::AppError;
use crate::models::TimeOfDay;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query string accepted by both availability endpoints
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Calendar day as `YYYY-MM-DD`
    pub date: Option<String>,
}

impl AvailabilityQuery {
    fn require_date(self) -> Result<String, AppError> {
        self.date
            .filter(|date| !date.is_empty())
            .ok_or_else(|| AppError::missing_field("date"))
    }
}

/// Free slots for one staff member
#[derive(Debug, Serialize, Deserialize)]
pub struct StaffAvailabilityResponse {
    /// Staff identifier
    pub staff_id: String,
    /// Requested day
    pub date: String,
    /// Ordered `HH:MM` start times
    pub available_slots: Vec<TimeOfDay>,
}

/// Free slots across every staff member qualified for a service
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceAvailabilityResponse {
    /// Service identifier
    pub service_id: String,
    /// Requested day
    pub date: String,
    /// Ordered, de-duplicated `HH:MM` start times
    pub available_slots: Vec<TimeOfDay>,
}

/// Availability routes
pub struct AvailabilityRoutes;

impl AvailabilityRoutes {
    /// Create availability routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/v1/availability/staff/:staff_id",
                get(Self::handle_staff_availability),
            )
            .route(
                "/api/v1/availability/services/:service_id",
                get(Self::handle_service_availability),
            )
            .with_state(resources)
    }

    async fn handle_staff_availability(
        State(resources): State<Arc<ServerResources>>,
        Path(staff_id): Path<String>,
        Query(query): Query<AvailabilityQuery>,
    ) -> Result<Response, AppError> {
        let date = query.require_date()?;
        let available_slots = resources.availability.staff_slots(&staff_id, &date).await?;

        let response = StaffAvailabilityResponse {
            staff_id,
            date,
            available_slots,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn handle_service_availability(
        State(resources): State<Arc<ServerResources>>,
        Path(service_id): Path<String>,
        Query(query): Query<AvailabilityQuery>,
    ) -> Result<Response, AppError> {
        let date = query.require_date()?;
        let available_slots = resources
            .aggregation
            .service_slots(&service_id, &date)
            .await?;

        let response = ServiceAvailabilityResponse {
            service_id,
            date,
            available_slots,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}

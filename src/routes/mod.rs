// ABOUTME: Route module organization for the booking administration HTTP endpoints
// ABOUTME: Groups routes by domain and merges them into one API router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

//! Route module for the booking administration server
//!
//! Each domain module holds route definitions and thin handlers that delegate
//! to the database managers and availability engines in [`ServerResources`].

/// Staff and service availability routes
pub mod availability;
/// Shared request extractors
pub mod extractors;
/// Health check and readiness routes
pub mod health;
/// Service catalog routes
pub mod services;
/// Staff administration routes
pub mod staff;

pub use availability::AvailabilityRoutes;
pub use extractors::JsonBody;
pub use health::HealthRoutes;
pub use services::ServiceRoutes;
pub use staff::StaffRoutes;

use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;

/// Merge every domain router into one API router without middleware
pub fn api_router(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .merge(AvailabilityRoutes::routes(Arc::clone(resources)))
        .merge(StaffRoutes::routes(Arc::clone(resources)))
        .merge(ServiceRoutes::routes(Arc::clone(resources)))
}

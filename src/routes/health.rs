// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness answers immediately, readiness confirms the database responds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

//! Health check routes for service monitoring
//!
//! `/health` is a liveness probe; `/ready` is used by load balancers and
//! reports 503 while the database cannot be reached.

use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health() -> Json<serde_json::Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Response {
        match resources.database.ping().await {
            Ok(()) => (
                StatusCode::OK,
                Json(json!({
                    "status": "ready",
                    "timestamp": Utc::now().to_rfc3339()
                })),
            )
                .into_response(),
            Err(e) => {
                warn!(error = %e, "Readiness check failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({
                        "status": "unavailable",
                        "timestamp": Utc::now().to_rfc3339()
                    })),
                )
                    .into_response()
            }
        }
    }
}

// ABOUTME: Service catalog route handlers
// ABOUTME: Service CRUD, category listing, and the staff qualified for each service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use super::extractors::JsonBody;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{CreateServiceRequest, Service, UpdateServiceRequest};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Reject negative or non-finite prices
fn validate_price(price: f64) -> AppResult<()> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(
            AppError::new(ErrorCode::ValueOutOfRange, "price must be zero or greater")
                .with_details(json!({ "field": "price" })),
        )
    }
}

/// Service catalog routes
pub struct ServiceRoutes;

impl ServiceRoutes {
    /// Create all service catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/v1/services",
                get(Self::handle_list_services).post(Self::handle_create_service),
            )
            .route(
                "/api/v1/services/categories",
                get(Self::handle_list_categories),
            )
            .route(
                "/api/v1/services/:service_id",
                get(Self::handle_get_service)
                    .patch(Self::handle_update_service)
                    .delete(Self::handle_delete_service),
            )
            .route(
                "/api/v1/services/:service_id/staff",
                get(Self::handle_list_qualified_staff),
            )
            .with_state(resources)
    }

    async fn require_service(resources: &ServerResources, service_id: &str) -> AppResult<Service> {
        resources
            .database
            .services()
            .get(service_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Service {service_id}")))
    }

    async fn handle_list_services(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let services = resources.database.services().list().await?;
        Ok((StatusCode::OK, Json(services)).into_response())
    }

    async fn handle_list_categories(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let categories = resources.database.services().categories().await?;
        Ok((StatusCode::OK, Json(categories)).into_response())
    }

    async fn handle_create_service(
        State(resources): State<Arc<ServerResources>>,
        JsonBody(request): JsonBody<CreateServiceRequest>,
    ) -> Result<Response, AppError> {
        if request.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        validate_price(request.price)?;

        let service = request.into_service();
        resources.database.services().create(&service).await?;
        info!(service.id = %service.id, "Created service");

        Ok((StatusCode::CREATED, Json(service)).into_response())
    }

    async fn handle_get_service(
        State(resources): State<Arc<ServerResources>>,
        Path(service_id): Path<String>,
    ) -> Result<Response, AppError> {
        let service = Self::require_service(&resources, &service_id).await?;
        Ok((StatusCode::OK, Json(service)).into_response())
    }

    async fn handle_update_service(
        State(resources): State<Arc<ServerResources>>,
        Path(service_id): Path<String>,
        JsonBody(request): JsonBody<UpdateServiceRequest>,
    ) -> Result<Response, AppError> {
        if request.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::invalid_input("name cannot be empty"));
        }
        if let Some(price) = request.price {
            validate_price(price)?;
        }

        let mut service = Self::require_service(&resources, &service_id).await?;
        request.apply(&mut service);

        if !resources.database.services().update(&service).await? {
            return Err(AppError::not_found(format!("Service {service_id}")));
        }

        Ok((StatusCode::OK, Json(service)).into_response())
    }

    async fn handle_delete_service(
        State(resources): State<Arc<ServerResources>>,
        Path(service_id): Path<String>,
    ) -> Result<Response, AppError> {
        if !resources.database.services().delete(&service_id).await? {
            return Err(AppError::not_found(format!("Service {service_id}")));
        }
        info!(service.id = %service_id, "Deleted service");

        Ok((
            StatusCode::OK,
            Json(json!({ "success": true, "message": "Service deleted" })),
        )
            .into_response())
    }

    async fn handle_list_qualified_staff(
        State(resources): State<Arc<ServerResources>>,
        Path(service_id): Path<String>,
    ) -> Result<Response, AppError> {
        Self::require_service(&resources, &service_id).await?;
        let staff = resources
            .database
            .staff()
            .list_for_service(&service_id)
            .await?;
        Ok((StatusCode::OK, Json(staff)).into_response())
    }
}

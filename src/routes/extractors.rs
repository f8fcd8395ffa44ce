// ABOUTME: Request extractors shared by the admin routes
// ABOUTME: JSON bodies that fail to deserialize become 400 INVALID_FORMAT errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use crate::errors::AppError;
use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::json;

/// JSON request body with rejections rendered through [`AppError`]
///
/// Syntax errors, wrong field types, and a missing JSON content type all
/// produce a 400 with the standard error envelope instead of axum's plain
/// text 415/422 responses.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(request, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(body_error(&rejection)),
        }
    }
}

fn body_error(rejection: &JsonRejection) -> AppError {
    AppError::invalid_format("Request body is not valid JSON for this endpoint")
        .with_details(json!({ "reason": rejection.body_text() }))
}

// ABOUTME: Bookable service catalog records and partial update payloads
// ABOUTME: Services are linked to qualified staff through the assignment junction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use chrono::{DateTime, Utc};
use super::null_as_default;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable service offered by the business
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Longer description
    pub description: String,
    /// Catalog category
    pub category: String,
    /// Price in the business currency
    pub price: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a service
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateServiceRequest {
    /// Display name (required)
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Longer description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Catalog category
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Price, must not be negative
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
}

impl CreateServiceRequest {
    /// Build the service record with a fresh id and timestamps
    #[must_use]
    pub fn into_service(self) -> Service {
        let now = Utc::now();
        Service {
            id: Uuid::new_v4().to_string(),
            name: self.name.trim().to_owned(),
            description: self.description,
            category: self.category.trim().to_owned(),
            price: self.price,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a service; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateServiceRequest {
    /// New display name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New category
    pub category: Option<String>,
    /// New price
    pub price: Option<f64>,
}

impl UpdateServiceRequest {
    /// Merge the provided fields into an existing record and bump `updated_at`
    pub fn apply(self, service: &mut Service) {
        if let Some(name) = self.name {
            service.name = name.trim().to_owned();
        }
        if let Some(description) = self.description {
            service.description = description;
        }
        if let Some(category) = self.category {
            service.category = category.trim().to_owned();
        }
        if let Some(price) = self.price {
            service.price = price;
        }
        service.updated_at = Utc::now();
    }
}

// ABOUTME: Staff member records and request payloads for staff administration
// ABOUTME: Staff anchor schedules, holidays, and service qualifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use super::null_as_default;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A staff member who can be scheduled and qualified for services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    #[serde(default)]
    pub phone: String,
    /// Free-form role (stylist, therapist, ...)
    #[serde(default)]
    pub role: String,
}

/// Payload for creating a staff member
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateStaffRequest {
    /// Optional caller-chosen identifier; a UUID is generated otherwise
    pub id: Option<String>,
    /// Display name (required)
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Contact email (required)
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Contact phone
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    /// Free-form role
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
}

impl CreateStaffRequest {
    /// Build the staff record, assigning an id when none was supplied
    #[must_use]
    pub fn into_staff(self) -> Staff {
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Staff {
            id,
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone,
            role: self.role,
        }
    }
}

/// Partial update for a staff member; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStaffRequest {
    /// New display name
    pub name: Option<String>,
    /// New contact email
    pub email: Option<String>,
    /// New contact phone
    pub phone: Option<String>,
    /// New role
    pub role: Option<String>,
}

impl UpdateStaffRequest {
    /// Merge the provided fields into an existing record
    pub fn apply(self, staff: &mut Staff) {
        if let Some(name) = self.name {
            staff.name = name.trim().to_owned();
        }
        if let Some(email) = self.email {
            staff.email = email.trim().to_owned();
        }
        if let Some(phone) = self.phone {
            staff.phone = phone;
        }
        if let Some(role) = self.role {
            staff.role = role;
        }
    }
}

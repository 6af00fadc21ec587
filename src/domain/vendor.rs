//! Vendor domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::RECORD_DELETED;

/// Vendor domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    pub vendor_id: i32,
    pub vendor_name: String,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<i32>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: i32,
}

impl Vendor {
    /// Apply a partial update. Absent fields are left untouched.
    pub fn apply(&mut self, changes: UpdateVendor, now: DateTime<Utc>) {
        if let Some(vendor_name) = changes.vendor_name {
            self.vendor_name = vendor_name;
        }
        if let Some(updated_by) = changes.updated_by {
            self.updated_by = Some(updated_by);
        }
        self.updated_at = Some(now);
    }

    pub fn soft_delete(&mut self, now: DateTime<Utc>) {
        self.is_deleted = RECORD_DELETED;
        self.updated_at = Some(now);
    }
}

/// Insert draft for a vendor
#[derive(Debug, Clone, PartialEq)]
pub struct NewVendor {
    pub vendor_name: String,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateVendor {
    /// Unique vendor name
    #[validate(length(min = 1, max = 100, message = "Vendor name must be 1 to 100 characters"))]
    #[schema(example = "Acme Supplies", max_length = 100)]
    pub vendor_name: String,
    pub created_by: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateVendor {
    #[validate(length(min = 1, max = 100, message = "Vendor name must be 1 to 100 characters"))]
    #[schema(example = "Acme Supplies Ltd")]
    pub vendor_name: Option<String>,
    pub updated_by: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VendorResponse {
    #[schema(example = 1)]
    pub vendor_id: i32,
    #[schema(example = "Acme Supplies")]
    pub vendor_name: String,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<i32>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: i32,
}

impl From<Vendor> for VendorResponse {
    fn from(vendor: Vendor) -> Self {
        Self {
            vendor_id: vendor.vendor_id,
            vendor_name: vendor.vendor_name,
            created_by: vendor.created_by,
            created_at: vendor.created_at,
            updated_by: vendor.updated_by,
            updated_at: vendor.updated_at,
            is_deleted: vendor.is_deleted,
        }
    }
}

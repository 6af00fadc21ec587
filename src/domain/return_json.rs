//! Extracted invoice document (JSON payload) returned for a vendor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use super::patch::nullable;
use crate::config::RECORD_DELETED;

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnJson {
    pub return_id: i32,
    pub invoice_number: Option<String>,
    pub extracted_json: Option<Value>,
    pub vendor_id: Option<i32>,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<i32>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: i32,
}

impl ReturnJson {
    /// Apply a partial update. Absent fields are left untouched; an explicit
    /// `null` clears the column.
    pub fn apply(&mut self, changes: UpdateReturnJson, now: DateTime<Utc>) {
        if let Some(invoice_number) = changes.invoice_number {
            self.invoice_number = invoice_number;
        }
        if let Some(extracted_json) = changes.extracted_json {
            self.extracted_json = extracted_json;
        }
        if let Some(vendor_id) = changes.vendor_id {
            self.vendor_id = vendor_id;
        }
        if changes.updated_by.is_some() {
            self.updated_by = changes.updated_by;
        }
        self.updated_at = Some(now);
    }

    pub fn soft_delete(&mut self, now: DateTime<Utc>) {
        self.is_deleted = RECORD_DELETED;
        self.updated_at = Some(now);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewReturnJson {
    pub invoice_number: Option<String>,
    pub extracted_json: Option<Value>,
    pub vendor_id: Option<i32>,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateReturnJson {
    #[validate(length(max = 30, message = "Invoice number must be at most 30 characters"))]
    #[schema(example = "INV-2024-0001", max_length = 30)]
    pub invoice_number: Option<String>,
    /// Arbitrary JSON document produced by the extractor
    #[schema(value_type = Option<Object>)]
    pub extracted_json: Option<Value>,
    #[schema(example = 1)]
    pub vendor_id: Option<i32>,
    pub created_by: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateReturnJson {
    #[validate(length(max = 30, message = "Invoice number must be at most 30 characters"))]
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>, nullable)]
    pub invoice_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<Object>, nullable)]
    pub extracted_json: Option<Option<Value>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>, nullable)]
    pub vendor_id: Option<Option<i32>>,
    pub updated_by: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReturnJsonResponse {
    pub return_id: i32,
    pub invoice_number: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub extracted_json: Option<Value>,
    pub vendor_id: Option<i32>,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<i32>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: i32,
}

impl From<ReturnJson> for ReturnJsonResponse {
    fn from(doc: ReturnJson) -> Self {
        Self {
            return_id: doc.return_id,
            invoice_number: doc.invoice_number,
            extracted_json: doc.extracted_json,
            vendor_id: doc.vendor_id,
            created_by: doc.created_by,
            created_at: doc.created_at,
            updated_by: doc.updated_by,
            updated_at: doc.updated_at,
            is_deleted: doc.is_deleted,
        }
    }
}

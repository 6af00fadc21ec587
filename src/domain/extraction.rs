//! Extraction region (bounding box) configured per vendor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::patch::nullable;
use crate::config::RECORD_DELETED;

#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub extraction_id: i32,
    pub extraction_name: String,
    pub x_min: Option<i32>,
    pub x_max: Option<i32>,
    pub y_min: Option<i32>,
    pub y_max: Option<i32>,
    pub vendor_id: Option<i32>,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<i32>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: i32,
}

impl Extraction {
    /// Apply a partial update. Absent fields are left untouched; an explicit
    /// `null` clears a nullable column.
    pub fn apply(&mut self, changes: UpdateExtraction, now: DateTime<Utc>) {
        if let Some(extraction_name) = changes.extraction_name {
            self.extraction_name = extraction_name;
        }
        if let Some(x_min) = changes.x_min {
            self.x_min = x_min;
        }
        if let Some(x_max) = changes.x_max {
            self.x_max = x_max;
        }
        if let Some(y_min) = changes.y_min {
            self.y_min = y_min;
        }
        if let Some(y_max) = changes.y_max {
            self.y_max = y_max;
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
pub struct NewExtraction {
    pub extraction_name: String,
    pub x_min: Option<i32>,
    pub x_max: Option<i32>,
    pub y_min: Option<i32>,
    pub y_max: Option<i32>,
    pub vendor_id: Option<i32>,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateExtraction {
    #[validate(length(min = 1, max = 50, message = "Extraction name must be 1 to 50 characters"))]
    #[schema(example = "invoice_total", max_length = 50)]
    pub extraction_name: String,
    #[schema(example = 120)]
    pub x_min: Option<i32>,
    #[schema(example = 380)]
    pub x_max: Option<i32>,
    #[schema(example = 40)]
    pub y_min: Option<i32>,
    #[schema(example = 72)]
    pub y_max: Option<i32>,
    #[schema(example = 1)]
    pub vendor_id: Option<i32>,
    pub created_by: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateExtraction {
    #[validate(length(min = 1, max = 50, message = "Extraction name must be 1 to 50 characters"))]
    pub extraction_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>, nullable)]
    pub x_min: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>, nullable)]
    pub x_max: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>, nullable)]
    pub y_min: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>, nullable)]
    pub y_max: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>, nullable)]
    pub vendor_id: Option<Option<i32>>,
    pub updated_by: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExtractionResponse {
    pub extraction_id: i32,
    pub extraction_name: String,
    pub x_min: Option<i32>,
    pub x_max: Option<i32>,
    pub y_min: Option<i32>,
    pub y_max: Option<i32>,
    pub vendor_id: Option<i32>,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<i32>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: i32,
}

impl From<Extraction> for ExtractionResponse {
    fn from(extraction: Extraction) -> Self {
        Self {
            extraction_id: extraction.extraction_id,
            extraction_name: extraction.extraction_name,
            x_min: extraction.x_min,
            x_max: extraction.x_max,
            y_min: extraction.y_min,
            y_max: extraction.y_max,
            vendor_id: extraction.vendor_id,
            created_by: extraction.created_by,
            created_at: extraction.created_at,
            updated_by: extraction.updated_by,
            updated_at: extraction.updated_at,
            is_deleted: extraction.is_deleted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RECORD_ACTIVE;
    use crate::utils::clock;

    #[test]
    fn test_partial_update_only_touches_given_coordinates() {
        let mut extraction = Extraction {
            extraction_id: 1,
            extraction_name: "total".to_string(),
            x_min: Some(1),
            x_max: Some(2),
            y_min: Some(3),
            y_max: Some(4),
            vendor_id: Some(9),
            created_by: None,
            created_at: clock::now(),
            updated_by: None,
            updated_at: None,
            is_deleted: RECORD_ACTIVE,
        };

        extraction.apply(
            UpdateExtraction {
                x_max: Some(Some(20)),
                y_min: Some(None),
                ..Default::default()
            },
            clock::now(),
        );

        assert_eq!(extraction.x_min, Some(1));
        assert_eq!(extraction.x_max, Some(20));
        assert_eq!(extraction.y_min, None);
        assert_eq!(extraction.vendor_id, Some(9));
        assert_eq!(extraction.extraction_name, "total");
    }
}

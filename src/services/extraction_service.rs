//! Extraction service - bounding-box definitions per vendor.

use async_trait::async_trait;
use axum::http::StatusCode;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::domain::{CreateExtraction, ExtractionResponse, NewExtraction, UpdateExtraction};
use crate::errors::AppResult;
use crate::infra::{ExtractionRepository, VendorRepository};
use crate::types::{Done, Outcome};
use crate::utils::clock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ExtractionService: Send + Sync {
    async fn list_extractions(&self) -> Outcome<Vec<ExtractionResponse>>;

    async fn get_extraction(&self, id: i32) -> Outcome<ExtractionResponse>;

    async fn create_extraction(&self, input: CreateExtraction) -> Outcome<ExtractionResponse>;

    async fn update_extraction(
        &self,
        id: i32,
        input: UpdateExtraction,
    ) -> Outcome<ExtractionResponse>;

    async fn delete_extraction(&self, id: i32) -> Outcome<ExtractionResponse>;
}

pub struct ExtractionManager {
    extractions: Arc<dyn ExtractionRepository>,
    vendors: Arc<dyn VendorRepository>,
}

impl ExtractionManager {
    pub fn new(
        extractions: Arc<dyn ExtractionRepository>,
        vendors: Arc<dyn VendorRepository>,
    ) -> Self {
        Self {
            extractions,
            vendors,
        }
    }

    /// A referenced vendor must exist and be active.
    async fn ensure_vendor(&self, vendor_id: Option<i32>) -> AppResult<()> {
        if let Some(vendor_id) = vendor_id {
            self.vendors.get_by_id(vendor_id).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ExtractionService for ExtractionManager {
    async fn list_extractions(&self) -> Outcome<Vec<ExtractionResponse>> {
        let extractions = self.extractions.get_all().await?.into_data();

        Ok(Done::with(
            extractions.into_iter().map(ExtractionResponse::from).collect(),
            "Extractions fetched successfully",
            StatusCode::OK,
        ))
    }

    async fn get_extraction(&self, id: i32) -> Outcome<ExtractionResponse> {
        let extraction = self.extractions.get_by_id(id).await?.into_data();

        Ok(Done::with(
            ExtractionResponse::from(extraction),
            "Extraction fetched successfully",
            StatusCode::OK,
        ))
    }

    async fn create_extraction(&self, input: CreateExtraction) -> Outcome<ExtractionResponse> {
        self.ensure_vendor(input.vendor_id).await?;

        let draft = NewExtraction {
            extraction_name: input.extraction_name,
            x_min: input.x_min,
            x_max: input.x_max,
            y_min: input.y_min,
            y_max: input.y_max,
            vendor_id: input.vendor_id,
            created_by: input.created_by,
            created_at: clock::now(),
        };

        let extraction = self.extractions.create(draft).await?.into_data();
        tracing::info!(extraction_id = extraction.extraction_id, "Extraction created");

        Ok(Done::with(
            ExtractionResponse::from(extraction),
            "Extraction created successfully",
            StatusCode::CREATED,
        ))
    }

    async fn update_extraction(
        &self,
        id: i32,
        input: UpdateExtraction,
    ) -> Outcome<ExtractionResponse> {
        let mut extraction = self.extractions.get_by_id(id).await?.into_data();
        self.ensure_vendor(input.vendor_id.flatten()).await?;

        extraction.apply(input, clock::now());
        let extraction = self.extractions.update(extraction).await?.into_data();

        Ok(Done::with(
            ExtractionResponse::from(extraction),
            "Extraction updated successfully",
            StatusCode::OK,
        ))
    }

    async fn delete_extraction(&self, id: i32) -> Outcome<ExtractionResponse> {
        let mut extraction = self.extractions.get_by_id(id).await?.into_data();
        extraction.soft_delete(clock::now());

        let extraction = self.extractions.update(extraction).await?.into_data();

        Ok(Done::with(
            ExtractionResponse::from(extraction),
            "Extraction deleted successfully",
            StatusCode::OK,
        ))
    }
}

//! Extracted document service.

use async_trait::async_trait;
use axum::http::StatusCode;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::domain::{CreateReturnJson, NewReturnJson, ReturnJsonResponse, UpdateReturnJson};
use crate::errors::AppResult;
use crate::infra::{ReturnJsonRepository, VendorRepository};
use crate::types::{Done, Outcome};
use crate::utils::clock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReturnJsonService: Send + Sync {
    async fn list_return_jsons(&self) -> Outcome<Vec<ReturnJsonResponse>>;

    async fn get_return_json(&self, id: i32) -> Outcome<ReturnJsonResponse>;

    async fn create_return_json(&self, input: CreateReturnJson) -> Outcome<ReturnJsonResponse>;

    async fn update_return_json(
        &self,
        id: i32,
        input: UpdateReturnJson,
    ) -> Outcome<ReturnJsonResponse>;

    async fn delete_return_json(&self, id: i32) -> Outcome<ReturnJsonResponse>;
}

pub struct ReturnJsonManager {
    documents: Arc<dyn ReturnJsonRepository>,
    vendors: Arc<dyn VendorRepository>,
}

impl ReturnJsonManager {
    pub fn new(
        documents: Arc<dyn ReturnJsonRepository>,
        vendors: Arc<dyn VendorRepository>,
    ) -> Self {
        Self { documents, vendors }
    }

    async fn ensure_vendor(&self, vendor_id: Option<i32>) -> AppResult<()> {
        if let Some(vendor_id) = vendor_id {
            self.vendors.get_by_id(vendor_id).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ReturnJsonService for ReturnJsonManager {
    async fn list_return_jsons(&self) -> Outcome<Vec<ReturnJsonResponse>> {
        let documents = self.documents.get_all().await?.into_data();

        Ok(Done::with(
            documents.into_iter().map(ReturnJsonResponse::from).collect(),
            "Return JSON records fetched successfully",
            StatusCode::OK,
        ))
    }

    async fn get_return_json(&self, id: i32) -> Outcome<ReturnJsonResponse> {
        let document = self.documents.get_by_id(id).await?.into_data();

        Ok(Done::with(
            ReturnJsonResponse::from(document),
            "Return JSON fetched successfully",
            StatusCode::OK,
        ))
    }

    async fn create_return_json(&self, input: CreateReturnJson) -> Outcome<ReturnJsonResponse> {
        self.ensure_vendor(input.vendor_id).await?;

        let draft = NewReturnJson {
            invoice_number: input.invoice_number,
            extracted_json: input.extracted_json,
            vendor_id: input.vendor_id,
            created_by: input.created_by,
            created_at: clock::now(),
        };

        let document = self.documents.create(draft).await?.into_data();
        tracing::info!(return_id = document.return_id, "Return JSON created");

        Ok(Done::with(
            ReturnJsonResponse::from(document),
            "Return JSON created successfully",
            StatusCode::CREATED,
        ))
    }

    async fn update_return_json(
        &self,
        id: i32,
        input: UpdateReturnJson,
    ) -> Outcome<ReturnJsonResponse> {
        let mut document = self.documents.get_by_id(id).await?.into_data();
        self.ensure_vendor(input.vendor_id.flatten()).await?;

        document.apply(input, clock::now());
        let document = self.documents.update(document).await?.into_data();

        Ok(Done::with(
            ReturnJsonResponse::from(document),
            "Return JSON updated successfully",
            StatusCode::OK,
        ))
    }

    async fn delete_return_json(&self, id: i32) -> Outcome<ReturnJsonResponse> {
        let mut document = self.documents.get_by_id(id).await?.into_data();
        document.soft_delete(clock::now());

        let document = self.documents.update(document).await?.into_data();

        Ok(Done::with(
            ReturnJsonResponse::from(document),
            "Return JSON deleted successfully",
            StatusCode::OK,
        ))
    }
}

//! Vendor service - Handles vendor-related business logic.

use async_trait::async_trait;
use axum::http::StatusCode;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::domain::{CreateVendor, NewVendor, UpdateVendor, VendorResponse};
use crate::infra::VendorRepository;
use crate::types::{Done, Outcome};
use crate::utils::clock;

/// Vendor service trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VendorService: Send + Sync {
    async fn list_vendors(&self) -> Outcome<Vec<VendorResponse>>;

    async fn get_vendor(&self, id: i32) -> Outcome<VendorResponse>;

    async fn create_vendor(&self, input: CreateVendor) -> Outcome<VendorResponse>;

    async fn update_vendor(&self, id: i32, input: UpdateVendor) -> Outcome<VendorResponse>;

    /// Soft delete; the row stays with `is_deleted = 1`.
    async fn delete_vendor(&self, id: i32) -> Outcome<VendorResponse>;
}

/// Concrete implementation of VendorService.
pub struct VendorManager {
    vendors: Arc<dyn VendorRepository>,
}

impl VendorManager {
    pub fn new(vendors: Arc<dyn VendorRepository>) -> Self {
        Self { vendors }
    }
}

#[async_trait]
impl VendorService for VendorManager {
    async fn list_vendors(&self) -> Outcome<Vec<VendorResponse>> {
        let vendors = self.vendors.get_all().await?.into_data();

        Ok(Done::with(
            vendors.into_iter().map(VendorResponse::from).collect(),
            "Vendors fetched successfully",
            StatusCode::OK,
        ))
    }

    async fn get_vendor(&self, id: i32) -> Outcome<VendorResponse> {
        let vendor = self.vendors.get_by_id(id).await?.into_data();

        Ok(Done::with(
            VendorResponse::from(vendor),
            "Vendor fetched successfully",
            StatusCode::OK,
        ))
    }

    async fn create_vendor(&self, input: CreateVendor) -> Outcome<VendorResponse> {
        let draft = NewVendor {
            vendor_name: input.vendor_name,
            created_by: input.created_by,
            created_at: clock::now(),
        };

        let vendor = self.vendors.create(draft).await?.into_data();
        tracing::info!(vendor_id = vendor.vendor_id, "Vendor created");

        Ok(Done::with(
            VendorResponse::from(vendor),
            "Vendor created successfully",
            StatusCode::CREATED,
        ))
    }

    async fn update_vendor(&self, id: i32, input: UpdateVendor) -> Outcome<VendorResponse> {
        let mut vendor = self.vendors.get_by_id(id).await?.into_data();
        vendor.apply(input, clock::now());

        let vendor = self.vendors.update(vendor).await?.into_data();

        Ok(Done::with(
            VendorResponse::from(vendor),
            "Vendor updated successfully",
            StatusCode::OK,
        ))
    }

    async fn delete_vendor(&self, id: i32) -> Outcome<VendorResponse> {
        let mut vendor = self.vendors.get_by_id(id).await?.into_data();
        vendor.soft_delete(clock::now());

        let vendor = self.vendors.update(vendor).await?.into_data();
        tracing::info!(vendor_id = id, "Vendor soft-deleted");

        Ok(Done::with(
            VendorResponse::from(vendor),
            "Vendor deleted successfully",
            StatusCode::OK,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RECORD_ACTIVE, RECORD_DELETED};
    use crate::domain::Vendor;
    use crate::errors::AppError;
    use crate::infra::MockVendorRepository;
    use crate::types::OutcomeExt;
    use mockall::predicate::eq;

    fn vendor(id: i32, name: &str) -> Vendor {
        Vendor {
            vendor_id: id,
            vendor_name: name.to_string(),
            created_by: Some(1),
            created_at: clock::now(),
            updated_by: None,
            updated_at: None,
            is_deleted: RECORD_ACTIVE,
        }
    }

    #[tokio::test]
    async fn test_create_vendor_returns_201() {
        let mut repo = MockVendorRepository::new();
        repo.expect_create()
            .withf(|draft| draft.vendor_name == "Acme")
            .times(1)
            .returning(|draft| Ok(Done::ok(vendor(1, &draft.vendor_name))));

        let service = VendorManager::new(Arc::new(repo));
        let outcome = service
            .create_vendor(CreateVendor {
                vendor_name: "Acme".to_string(),
                created_by: Some(1),
            })
            .await;

        assert_eq!(outcome.code(), StatusCode::CREATED);
        assert_eq!(outcome.message(), "Vendor created successfully");
        assert_eq!(outcome.data().map(|v| v.vendor_id), Some(1));
    }

    #[tokio::test]
    async fn test_update_missing_vendor_is_404_without_write() {
        let mut repo = MockVendorRepository::new();
        repo.expect_get_by_id()
            .with(eq(9))
            .returning(|_| Err(AppError::not_found("Vendor")));
        repo.expect_update().times(0);

        let service = VendorManager::new(Arc::new(repo));
        let outcome = service.update_vendor(9, UpdateVendor::default()).await;

        assert!(!outcome.success());
        assert_eq!(outcome.code(), StatusCode::NOT_FOUND);
        assert_eq!(outcome.message(), "Vendor not found");
    }

    #[tokio::test]
    async fn test_delete_flags_record_and_stamps_time() {
        let mut repo = MockVendorRepository::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(Done::ok(vendor(id, "Acme"))));
        repo.expect_update()
            .withf(|v| v.is_deleted == RECORD_DELETED && v.updated_at.is_some())
            .times(1)
            .returning(|v| Ok(Done::ok(v)));

        let service = VendorManager::new(Arc::new(repo));
        let outcome = service.delete_vendor(3).await;

        assert_eq!(outcome.message(), "Vendor deleted successfully");
        assert_eq!(outcome.data().map(|v| v.is_deleted), Some(RECORD_DELETED));
    }

    #[tokio::test]
    async fn test_repository_failure_propagates_unchanged() {
        let mut repo = MockVendorRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|_| Err(AppError::conflict("Vendor")));

        let service = VendorManager::new(Arc::new(repo));
        let outcome = service
            .create_vendor(CreateVendor {
                vendor_name: "Acme".to_string(),
                created_by: None,
            })
            .await;

        assert_eq!(outcome.code(), StatusCode::CONFLICT);
        assert_eq!(outcome.message(), "Vendor already exists");
    }
}

//! Vendor repository - data access for `tb_inai_mas_vendor`.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::{Set, Unchanged},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

#[cfg(test)]
use mockall::automock;

use super::base::{self, persistence_failure};
use super::entities::vendor::{self, ActiveModel, Entity as VendorEntity};
use crate::config::RECORD_ACTIVE;
use crate::domain::{NewVendor, Vendor};
use crate::errors::AppError;
use crate::types::{Done, Outcome};

const ENTITY: &str = "Vendor";

/// Vendor repository trait. Reads only ever see active rows.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VendorRepository: Send + Sync {
    async fn get_all(&self) -> Outcome<Vec<Vendor>>;

    /// Fails with 404 when absent or soft-deleted.
    async fn get_by_id(&self, id: i32) -> Outcome<Vendor>;

    async fn create(&self, vendor: NewVendor) -> Outcome<Vendor>;

    /// Persist every field of `vendor` by primary key.
    async fn update(&self, vendor: Vendor) -> Outcome<Vendor>;
}

/// SeaORM implementation of VendorRepository
pub struct VendorStore {
    db: DatabaseConnection,
}

impl VendorStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VendorRepository for VendorStore {
    async fn get_all(&self) -> Outcome<Vec<Vendor>> {
        let models = VendorEntity::find()
            .filter(vendor::Column::IsDeleted.eq(RECORD_ACTIVE))
            .order_by_asc(vendor::Column::VendorId)
            .all(&self.db)
            .await
            .map_err(|e| persistence_failure(ENTITY, "fetching", e))?;

        Ok(Done::ok(models.into_iter().map(Vendor::from).collect()))
    }

    async fn get_by_id(&self, id: i32) -> Outcome<Vendor> {
        let model = VendorEntity::find_by_id(id)
            .filter(vendor::Column::IsDeleted.eq(RECORD_ACTIVE))
            .one(&self.db)
            .await
            .map_err(|e| persistence_failure(ENTITY, "fetching", e))?;

        match model {
            Some(model) => Ok(Done::ok(Vendor::from(model))),
            None => {
                tracing::debug!(vendor_id = id, "Vendor not found");
                Err(AppError::not_found(ENTITY))
            }
        }
    }

    async fn create(&self, vendor: NewVendor) -> Outcome<Vendor> {
        let active = ActiveModel {
            vendor_name: Set(vendor.vendor_name),
            created_by: Set(vendor.created_by),
            created_at: Set(vendor.created_at),
            is_deleted: Set(RECORD_ACTIVE),
            ..Default::default()
        };

        let model = base::insert(&self.db, ENTITY, active).await?;
        Ok(Done::ok(Vendor::from(model)))
    }

    async fn update(&self, vendor: Vendor) -> Outcome<Vendor> {
        let active = ActiveModel {
            vendor_id: Unchanged(vendor.vendor_id),
            vendor_name: Set(vendor.vendor_name),
            created_by: Set(vendor.created_by),
            created_at: Set(vendor.created_at),
            updated_by: Set(vendor.updated_by),
            updated_at: Set(vendor.updated_at),
            is_deleted: Set(vendor.is_deleted),
        };

        let model = base::update(&self.db, ENTITY, active).await?;
        Ok(Done::ok(Vendor::from(model)))
    }
}

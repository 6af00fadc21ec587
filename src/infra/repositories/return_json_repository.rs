//! Extracted document repository - data access for `tb_inai_return_json`.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::{Set, Unchanged},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

#[cfg(test)]
use mockall::automock;

use super::base::{self, persistence_failure};
use super::entities::return_json::{self, ActiveModel, Entity as ReturnJsonEntity};
use crate::config::RECORD_ACTIVE;
use crate::domain::{NewReturnJson, ReturnJson};
use crate::errors::AppError;
use crate::types::{Done, Outcome};

const ENTITY: &str = "Return JSON";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReturnJsonRepository: Send + Sync {
    async fn get_all(&self) -> Outcome<Vec<ReturnJson>>;

    async fn get_by_id(&self, id: i32) -> Outcome<ReturnJson>;

    async fn create(&self, doc: NewReturnJson) -> Outcome<ReturnJson>;

    async fn update(&self, doc: ReturnJson) -> Outcome<ReturnJson>;
}

pub struct ReturnJsonStore {
    db: DatabaseConnection,
}

impl ReturnJsonStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReturnJsonRepository for ReturnJsonStore {
    async fn get_all(&self) -> Outcome<Vec<ReturnJson>> {
        let models = ReturnJsonEntity::find()
            .filter(return_json::Column::IsDeleted.eq(RECORD_ACTIVE))
            .order_by_asc(return_json::Column::ReturnId)
            .all(&self.db)
            .await
            .map_err(|e| persistence_failure(ENTITY, "fetching", e))?;

        Ok(Done::ok(models.into_iter().map(ReturnJson::from).collect()))
    }

    async fn get_by_id(&self, id: i32) -> Outcome<ReturnJson> {
        ReturnJsonEntity::find_by_id(id)
            .filter(return_json::Column::IsDeleted.eq(RECORD_ACTIVE))
            .one(&self.db)
            .await
            .map_err(|e| persistence_failure(ENTITY, "fetching", e))?
            .map(|model| Done::ok(ReturnJson::from(model)))
            .ok_or_else(|| AppError::not_found(ENTITY))
    }

    async fn create(&self, doc: NewReturnJson) -> Outcome<ReturnJson> {
        let active = ActiveModel {
            invoice_number: Set(doc.invoice_number),
            extracted_json: Set(doc.extracted_json),
            vendor_id: Set(doc.vendor_id),
            created_by: Set(doc.created_by),
            created_at: Set(doc.created_at),
            is_deleted: Set(RECORD_ACTIVE),
            ..Default::default()
        };

        let model = base::insert(&self.db, ENTITY, active).await?;
        Ok(Done::ok(ReturnJson::from(model)))
    }

    async fn update(&self, doc: ReturnJson) -> Outcome<ReturnJson> {
        let active = ActiveModel {
            return_id: Unchanged(doc.return_id),
            invoice_number: Set(doc.invoice_number),
            extracted_json: Set(doc.extracted_json),
            vendor_id: Set(doc.vendor_id),
            created_by: Set(doc.created_by),
            created_at: Set(doc.created_at),
            updated_by: Set(doc.updated_by),
            updated_at: Set(doc.updated_at),
            is_deleted: Set(doc.is_deleted),
        };

        let model = base::update(&self.db, ENTITY, active).await?;
        Ok(Done::ok(ReturnJson::from(model)))
    }
}

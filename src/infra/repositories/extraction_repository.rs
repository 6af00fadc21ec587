//! Extraction repository - data access for `tb_inai_extraction_details`.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::{Set, Unchanged},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

#[cfg(test)]
use mockall::automock;

use super::base::{self, persistence_failure};
use super::entities::extraction::{self, ActiveModel, Entity as ExtractionEntity};
use crate::config::RECORD_ACTIVE;
use crate::domain::{Extraction, NewExtraction};
use crate::errors::AppError;
use crate::types::{Done, Outcome};

const ENTITY: &str = "Extraction";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ExtractionRepository: Send + Sync {
    async fn get_all(&self) -> Outcome<Vec<Extraction>>;

    async fn get_by_id(&self, id: i32) -> Outcome<Extraction>;

    async fn create(&self, extraction: NewExtraction) -> Outcome<Extraction>;

    async fn update(&self, extraction: Extraction) -> Outcome<Extraction>;
}

pub struct ExtractionStore {
    db: DatabaseConnection,
}

impl ExtractionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExtractionRepository for ExtractionStore {
    async fn get_all(&self) -> Outcome<Vec<Extraction>> {
        let models = ExtractionEntity::find()
            .filter(extraction::Column::IsDeleted.eq(RECORD_ACTIVE))
            .order_by_asc(extraction::Column::ExtractionId)
            .all(&self.db)
            .await
            .map_err(|e| persistence_failure(ENTITY, "fetching", e))?;

        Ok(Done::ok(models.into_iter().map(Extraction::from).collect()))
    }

    async fn get_by_id(&self, id: i32) -> Outcome<Extraction> {
        ExtractionEntity::find_by_id(id)
            .filter(extraction::Column::IsDeleted.eq(RECORD_ACTIVE))
            .one(&self.db)
            .await
            .map_err(|e| persistence_failure(ENTITY, "fetching", e))?
            .map(|model| Done::ok(Extraction::from(model)))
            .ok_or_else(|| AppError::not_found(ENTITY))
    }

    async fn create(&self, extraction: NewExtraction) -> Outcome<Extraction> {
        let active = ActiveModel {
            extraction_name: Set(extraction.extraction_name),
            x_min: Set(extraction.x_min),
            x_max: Set(extraction.x_max),
            y_min: Set(extraction.y_min),
            y_max: Set(extraction.y_max),
            vendor_id: Set(extraction.vendor_id),
            created_by: Set(extraction.created_by),
            created_at: Set(extraction.created_at),
            is_deleted: Set(RECORD_ACTIVE),
            ..Default::default()
        };

        let model = base::insert(&self.db, ENTITY, active).await?;
        Ok(Done::ok(Extraction::from(model)))
    }

    async fn update(&self, extraction: Extraction) -> Outcome<Extraction> {
        let active = ActiveModel {
            extraction_id: Unchanged(extraction.extraction_id),
            extraction_name: Set(extraction.extraction_name),
            x_min: Set(extraction.x_min),
            x_max: Set(extraction.x_max),
            y_min: Set(extraction.y_min),
            y_max: Set(extraction.y_max),
            vendor_id: Set(extraction.vendor_id),
            created_by: Set(extraction.created_by),
            created_at: Set(extraction.created_at),
            updated_by: Set(extraction.updated_by),
            updated_at: Set(extraction.updated_at),
            is_deleted: Set(extraction.is_deleted),
        };

        let model = base::update(&self.db, ENTITY, active).await?;
        Ok(Done::ok(Extraction::from(model)))
    }
}

//! `tb_inai_extraction_details` table.

use sea_orm::entity::prelude::*;

use crate::domain::Extraction;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_inai_extraction_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub extraction_id: i32,
    pub extraction_name: String,
    pub x_min: Option<i32>,
    pub x_max: Option<i32>,
    pub y_min: Option<i32>,
    pub y_max: Option<i32>,
    pub vendor_id: Option<i32>,
    pub created_by: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_by: Option<i32>,
    pub updated_at: Option<DateTimeUtc>,
    pub is_deleted: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::VendorId"
    )]
    Vendor,
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Extraction {
    fn from(model: Model) -> Self {
        Self {
            extraction_id: model.extraction_id,
            extraction_name: model.extraction_name,
            x_min: model.x_min,
            x_max: model.x_max,
            y_min: model.y_min,
            y_max: model.y_max,
            vendor_id: model.vendor_id,
            created_by: model.created_by,
            created_at: model.created_at,
            updated_by: model.updated_by,
            updated_at: model.updated_at,
            is_deleted: model.is_deleted,
        }
    }
}

//! `tb_inai_mas_vendor` table.

use sea_orm::entity::prelude::*;

use crate::domain::Vendor;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_inai_mas_vendor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub vendor_id: i32,
    #[sea_orm(unique)]
    pub vendor_name: String,
    pub created_by: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_by: Option<i32>,
    pub updated_at: Option<DateTimeUtc>,
    pub is_deleted: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::extraction::Entity")]
    Extraction,
    #[sea_orm(has_many = "super::return_json::Entity")]
    ReturnJson,
}

impl Related<super::extraction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Extraction.def()
    }
}

impl Related<super::return_json::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReturnJson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Vendor {
    fn from(model: Model) -> Self {
        Self {
            vendor_id: model.vendor_id,
            vendor_name: model.vendor_name,
            created_by: model.created_by,
            created_at: model.created_at,
            updated_by: model.updated_by,
            updated_at: model.updated_at,
            is_deleted: model.is_deleted,
        }
    }
}

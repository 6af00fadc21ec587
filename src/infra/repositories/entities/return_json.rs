//! `tb_inai_return_json` table.

use sea_orm::entity::prelude::*;

use crate::domain::ReturnJson;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_inai_return_json")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub return_id: i32,
    pub invoice_number: Option<String>,
    #[sea_orm(column_type = "Json", nullable)]
    pub extracted_json: Option<Json>,
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

impl From<Model> for ReturnJson {
    fn from(model: Model) -> Self {
        Self {
            return_id: model.return_id,
            invoice_number: model.invoice_number,
            extracted_json: model.extracted_json,
            vendor_id: model.vendor_id,
            created_by: model.created_by,
            created_at: model.created_at,
            updated_by: model.updated_by,
            updated_at: model.updated_at,
            is_deleted: model.is_deleted,
        }
    }
}

//! `tb_inai_mas_user` table.

use sea_orm::entity::prelude::*;

use crate::domain::User;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_inai_mas_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    pub bio_id: Option<i32>,
    pub user_name: String,
    pub password_hash: String,
    pub created_by: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_by: Option<i32>,
    pub updated_at: Option<DateTimeUtc>,
    pub is_deleted: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::login_log::Entity")]
    LoginLog,
}

impl Related<super::login_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LoginLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            user_id: model.user_id,
            bio_id: model.bio_id,
            user_name: model.user_name,
            password_hash: model.password_hash,
            created_by: model.created_by,
            created_at: model.created_at,
            updated_by: model.updated_by,
            updated_at: model.updated_at,
            is_deleted: model.is_deleted,
        }
    }
}

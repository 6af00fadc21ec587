//! `tb_inai_log` table.

use sea_orm::entity::prelude::*;

use crate::domain::LoginLog;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_inai_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub log_id: i32,
    pub user_id: i32,
    pub login_time: DateTimeUtc,
    pub logout_time: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::UserId"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LoginLog {
    fn from(model: Model) -> Self {
        Self {
            log_id: model.log_id,
            user_id: model.user_id,
            login_time: model.login_time,
            logout_time: model.logout_time,
        }
    }
}

//! Migration: Create the login log table.

use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LoginLog::Table)
                    .if_not_exists()
                    .col(pk_auto(LoginLog::LogId))
                    .col(integer(LoginLog::UserId))
                    .col(timestamp_with_time_zone(LoginLog::LoginTime))
                    .col(timestamp_with_time_zone_null(LoginLog::LogoutTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_login_log_user_id")
                            .from(LoginLog::Table, LoginLog::UserId)
                            .to(User::Table, User::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoginLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LoginLog {
    #[sea_orm(iden = "tb_inai_log")]
    Table,
    LogId,
    UserId,
    LoginTime,
    LogoutTime,
}

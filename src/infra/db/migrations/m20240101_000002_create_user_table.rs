//! Migration: Create the user master table.

use sea_orm_migration::{prelude::*, schema::*};

use crate::config::MAX_USER_NAME_LENGTH;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::UserId))
                    .col(integer_null(User::BioId))
                    .col(string_len(User::UserName, MAX_USER_NAME_LENGTH))
                    .col(string_len(User::PasswordHash, 250))
                    .col(integer_null(User::CreatedBy))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .col(integer_null(User::UpdatedBy))
                    .col(timestamp_with_time_zone_null(User::UpdatedAt))
                    .col(integer(User::IsDeleted).default(0))
                    .to_owned(),
            )
            .await?;

        // Login looks users up by name
        manager
            .create_index(
                Index::create()
                    .name("idx_tb_inai_mas_user_user_name")
                    .table(User::Table)
                    .col(User::UserName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "tb_inai_mas_user")]
    Table,
    UserId,
    BioId,
    UserName,
    PasswordHash,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
    IsDeleted,
}

//! Migration: Create the vendor master table.

use sea_orm_migration::{prelude::*, schema::*};

use crate::config::MAX_VENDOR_NAME_LENGTH;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vendor::Table)
                    .if_not_exists()
                    .col(pk_auto(Vendor::VendorId))
                    .col(string_len_uniq(Vendor::VendorName, MAX_VENDOR_NAME_LENGTH))
                    .col(integer_null(Vendor::CreatedBy))
                    .col(timestamp_with_time_zone(Vendor::CreatedAt))
                    .col(integer_null(Vendor::UpdatedBy))
                    .col(timestamp_with_time_zone_null(Vendor::UpdatedAt))
                    .col(integer(Vendor::IsDeleted).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vendor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vendor {
    #[sea_orm(iden = "tb_inai_mas_vendor")]
    Table,
    VendorId,
    VendorName,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
    IsDeleted,
}

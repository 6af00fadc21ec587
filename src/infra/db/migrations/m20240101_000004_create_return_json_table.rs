//! Migration: Create the extracted document table.

use sea_orm_migration::{prelude::*, schema::*};

use crate::config::MAX_INVOICE_NUMBER_LENGTH;

use super::m20240101_000001_create_vendor_table::Vendor;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReturnJson::Table)
                    .if_not_exists()
                    .col(pk_auto(ReturnJson::ReturnId))
                    .col(string_len_null(ReturnJson::InvoiceNumber, MAX_INVOICE_NUMBER_LENGTH))
                    .col(json_null(ReturnJson::ExtractedJson))
                    .col(integer_null(ReturnJson::VendorId))
                    .col(integer_null(ReturnJson::CreatedBy))
                    .col(timestamp_with_time_zone(ReturnJson::CreatedAt))
                    .col(integer_null(ReturnJson::UpdatedBy))
                    .col(timestamp_with_time_zone_null(ReturnJson::UpdatedAt))
                    .col(integer(ReturnJson::IsDeleted).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_return_json_vendor_id")
                            .from(ReturnJson::Table, ReturnJson::VendorId)
                            .to(Vendor::Table, Vendor::VendorId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReturnJson::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReturnJson {
    #[sea_orm(iden = "tb_inai_return_json")]
    Table,
    ReturnId,
    InvoiceNumber,
    ExtractedJson,
    VendorId,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
    IsDeleted,
}

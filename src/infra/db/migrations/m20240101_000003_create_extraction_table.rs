//! Migration: Create the extraction details table.

use sea_orm_migration::{prelude::*, schema::*};

use crate::config::MAX_EXTRACTION_NAME_LENGTH;

use super::m20240101_000001_create_vendor_table::Vendor;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Extraction::Table)
                    .if_not_exists()
                    .col(pk_auto(Extraction::ExtractionId))
                    .col(string_len(Extraction::ExtractionName, MAX_EXTRACTION_NAME_LENGTH))
                    .col(integer_null(Extraction::XMin))
                    .col(integer_null(Extraction::XMax))
                    .col(integer_null(Extraction::YMin))
                    .col(integer_null(Extraction::YMax))
                    .col(integer_null(Extraction::VendorId))
                    .col(integer_null(Extraction::CreatedBy))
                    .col(timestamp_with_time_zone(Extraction::CreatedAt))
                    .col(integer_null(Extraction::UpdatedBy))
                    .col(timestamp_with_time_zone_null(Extraction::UpdatedAt))
                    .col(integer(Extraction::IsDeleted).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_extraction_vendor_id")
                            .from(Extraction::Table, Extraction::VendorId)
                            .to(Vendor::Table, Vendor::VendorId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Extraction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Extraction {
    #[sea_orm(iden = "tb_inai_extraction_details")]
    Table,
    ExtractionId,
    ExtractionName,
    XMin,
    XMax,
    YMin,
    YMax,
    VendorId,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
    IsDeleted,
}

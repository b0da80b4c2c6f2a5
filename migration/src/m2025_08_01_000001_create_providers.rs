//! Creates the `providers` table.
//!
//! Column names follow the LFWMS store layout (`Provider_ID`, `Provider_Name`,
//! ...) so existing application databases can be seeded in place.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Providers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Providers::ProviderId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Providers::ProviderName).text().not_null())
                    .col(ColumnDef::new(Providers::ProviderType).text().not_null())
                    .col(ColumnDef::new(Providers::Location).text().null())
                    .col(ColumnDef::new(Providers::Contact).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Providers::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Providers {
    Table,
    #[sea_orm(iden = "Provider_ID")]
    ProviderId,
    #[sea_orm(iden = "Provider_Name")]
    ProviderName,
    #[sea_orm(iden = "Provider_Type")]
    ProviderType,
    #[sea_orm(iden = "Location")]
    Location,
    #[sea_orm(iden = "Contact")]
    Contact,
}

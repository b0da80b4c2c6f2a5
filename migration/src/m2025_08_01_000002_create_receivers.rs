//! Creates the `receivers` table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Receivers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Receivers::ReceiverId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Receivers::ReceiverName).text().not_null())
                    .col(ColumnDef::new(Receivers::ReceiverType).text().not_null())
                    .col(ColumnDef::new(Receivers::Location).text().null())
                    .col(ColumnDef::new(Receivers::Contact).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Receivers::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Receivers {
    Table,
    #[sea_orm(iden = "Receiver_ID")]
    ReceiverId,
    #[sea_orm(iden = "Receiver_Name")]
    ReceiverName,
    #[sea_orm(iden = "Receiver_Type")]
    ReceiverType,
    #[sea_orm(iden = "Location")]
    Location,
    #[sea_orm(iden = "Contact")]
    Contact,
}

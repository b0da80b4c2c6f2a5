//! Creates the `claims` table linking receivers to food listings.

use sea_orm_migration::prelude::*;

use crate::m2025_08_01_000002_create_receivers::Receivers;
use crate::m2025_08_01_000003_create_food_listings::FoodListings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Claims::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Claims::ClaimId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Claims::FoodId).integer().null())
                    .col(ColumnDef::new(Claims::ReceiverId).integer().null())
                    .col(ColumnDef::new(Claims::ClaimDate).text().not_null())
                    .col(ColumnDef::new(Claims::Status).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_claims_food_id")
                            .from(Claims::Table, Claims::FoodId)
                            .to(FoodListings::Table, FoodListings::FoodId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_claims_receiver_id")
                            .from(Claims::Table, Claims::ReceiverId)
                            .to(Receivers::Table, Receivers::ReceiverId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Claims::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Claims {
    Table,
    #[sea_orm(iden = "Claim_ID")]
    ClaimId,
    #[sea_orm(iden = "Food_ID")]
    FoodId,
    #[sea_orm(iden = "Receiver_ID")]
    ReceiverId,
    #[sea_orm(iden = "Claim_Date")]
    ClaimDate,
    #[sea_orm(iden = "Status")]
    Status,
}

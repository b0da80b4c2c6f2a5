//! Creates the `food_listings` table.
//!
//! Listings carry denormalized copies of the provider's type and location as
//! they were when the listing was created. `Provider_ID` is nullable.

use sea_orm_migration::prelude::*;

use crate::m2025_08_01_000001_create_providers::Providers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoodListings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FoodListings::FoodId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FoodListings::FoodName).text().not_null())
                    .col(ColumnDef::new(FoodListings::Quantity).integer().not_null())
                    // 'YYYY-MM-DD'
                    .col(ColumnDef::new(FoodListings::ExpiryDate).text().not_null())
                    .col(ColumnDef::new(FoodListings::ProviderId).integer().null())
                    .col(ColumnDef::new(FoodListings::ProviderType).text().null())
                    .col(ColumnDef::new(FoodListings::Location).text().null())
                    .col(ColumnDef::new(FoodListings::FoodType).text().null())
                    .col(ColumnDef::new(FoodListings::MealType).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_listings_provider_id")
                            .from(FoodListings::Table, FoodListings::ProviderId)
                            .to(Providers::Table, Providers::ProviderId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(FoodListings::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum FoodListings {
    Table,
    #[sea_orm(iden = "Food_ID")]
    FoodId,
    #[sea_orm(iden = "Food_Name")]
    FoodName,
    #[sea_orm(iden = "Quantity")]
    Quantity,
    #[sea_orm(iden = "Expiry_Date")]
    ExpiryDate,
    #[sea_orm(iden = "Provider_ID")]
    ProviderId,
    #[sea_orm(iden = "Provider_Type")]
    ProviderType,
    #[sea_orm(iden = "Location")]
    Location,
    #[sea_orm(iden = "Food_Type")]
    FoodType,
    #[sea_orm(iden = "Meal_Type")]
    MealType,
}

//! Adds columns the seeder relies on to `food_listings` tables created by
//! older versions of the application.
//!
//! Each column is added as nullable TEXT only when it is missing, so the step
//! is a no-op on stores that already have it.

use sea_orm_migration::prelude::*;

use crate::m2025_08_01_000003_create_food_listings::FoodListings;

#[derive(DeriveMigrationName)]
pub struct Migration;

const TABLE: &str = "food_listings";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, column) in [
            ("Food_Type", FoodListings::FoodType),
            ("Meal_Type", FoodListings::MealType),
            ("Provider_Type", FoodListings::ProviderType),
        ] {
            if manager.has_column(TABLE, name).await? {
                continue;
            }

            // SQLite accepts a single ADD COLUMN per ALTER TABLE.
            manager
                .alter_table(
                    Table::alter()
                        .table(FoodListings::Table)
                        .add_column(ColumnDef::new(column).text().null())
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // Widened columns stay; dropping the table removes them.
        Ok(())
    }
}

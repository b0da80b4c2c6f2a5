//! Food listing entity model
//!
//! A listing is a quantity of food offered by a provider until its expiry
//! date. The provider's type and location are copied onto the listing when it
//! is created, so later changes to the provider do not rewrite old listings.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

/// Food listing entity for the `food_listings` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "food_listings")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Food_ID")]
    pub food_id: i32,

    #[sea_orm(column_name = "Food_Name")]
    pub food_name: String,

    /// Number of units offered, always positive for seeded rows
    #[sea_orm(column_name = "Quantity")]
    pub quantity: i32,

    /// Stored as ISO `YYYY-MM-DD` text
    #[sea_orm(column_name = "Expiry_Date")]
    pub expiry_date: Date,

    /// Owning provider; nullable in storage
    #[sea_orm(column_name = "Provider_ID")]
    pub provider_id: Option<i32>,

    /// Provider category at listing time
    #[sea_orm(column_name = "Provider_Type")]
    pub provider_type: Option<String>,

    #[sea_orm(column_name = "Location")]
    pub location: Option<String>,

    /// e.g. Vegetarian, Non-Vegetarian
    #[sea_orm(column_name = "Food_Type")]
    pub food_type: Option<String>,

    /// e.g. Breakfast, Lunch, Dinner, Snack
    #[sea_orm(column_name = "Meal_Type")]
    pub meal_type: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::provider::Entity",
        from = "Column::ProviderId",
        to = "super::provider::Column::ProviderId"
    )]
    Provider,
    #[sea_orm(has_many = "super::claim::Entity")]
    Claim,
}

impl Related<super::provider::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Provider.def()
    }
}

impl Related<super::claim::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Claim.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

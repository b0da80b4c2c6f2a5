//! Provider entity model
//!
//! Providers donate food: restaurants, NGOs, supermarkets and so on. The
//! seeder treats `Provider_Name` as the identifying key.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

/// Provider entity for the `providers` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "providers")]
pub struct Model {
    /// Autoincrement identity
    #[sea_orm(primary_key, column_name = "Provider_ID")]
    pub provider_id: i32,

    /// Display name, unique for seeding purposes
    #[sea_orm(column_name = "Provider_Name")]
    pub provider_name: String,

    /// Free-form category label (Restaurant, NGO, Supermarket, ...)
    #[sea_orm(column_name = "Provider_Type")]
    pub provider_type: String,

    #[sea_orm(column_name = "Location")]
    pub location: Option<String>,

    #[sea_orm(column_name = "Contact")]
    pub contact: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::food_listing::Entity")]
    FoodListing,
}

impl Related<super::food_listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FoodListing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Claim entity model
//!
//! A claim records a receiver asking for a food listing. Both references are
//! nullable in storage; the seeder leaves `Receiver_ID` empty when no
//! receivers exist.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

/// Claim entity for the `claims` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "claims")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Claim_ID")]
    pub claim_id: i32,

    #[sea_orm(column_name = "Food_ID")]
    pub food_id: Option<i32>,

    #[sea_orm(column_name = "Receiver_ID")]
    pub receiver_id: Option<i32>,

    #[sea_orm(column_name = "Claim_Date")]
    pub claim_date: Date,

    /// Open set of labels: Pending, Approved, Completed, Cancelled
    #[sea_orm(column_name = "Status")]
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::food_listing::Entity",
        from = "Column::FoodId",
        to = "super::food_listing::Column::FoodId"
    )]
    FoodListing,
    #[sea_orm(
        belongs_to = "super::receiver::Entity",
        from = "Column::ReceiverId",
        to = "super::receiver::Column::ReceiverId"
    )]
    Receiver,
}

impl Related<super::food_listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FoodListing.def()
    }
}

impl Related<super::receiver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Receiver.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

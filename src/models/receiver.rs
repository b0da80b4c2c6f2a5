//! Receiver entity model

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

/// Receiver entity for the `receivers` table (shelters, food banks, NGOs)
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "receivers")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Receiver_ID")]
    pub receiver_id: i32,

    /// Display name, unique for seeding purposes
    #[sea_orm(column_name = "Receiver_Name")]
    pub receiver_name: String,

    #[sea_orm(column_name = "Receiver_Type")]
    pub receiver_type: String,

    #[sea_orm(column_name = "Location")]
    pub location: Option<String>,

    #[sea_orm(column_name = "Contact")]
    pub contact: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::claim::Entity")]
    Claim,
}

impl Related<super::claim::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Claim.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

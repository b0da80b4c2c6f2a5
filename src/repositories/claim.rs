//! Claim repository for database operations

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::models::claim::{self, Entity as Claim};

/// Repository for claim database operations
#[derive(Debug, Clone, Copy)]
pub struct ClaimRepository<'c, C> {
    db: &'c C,
}

impl<'c, C: ConnectionTrait> ClaimRepository<'c, C> {
    pub fn new(db: &'c C) -> Self {
        Self { db }
    }

    /// Checks whether a claim already links `food_id` to `receiver_id`
    ///
    /// A `None` receiver matches claims whose receiver is NULL.
    pub async fn exists_for(&self, food_id: i32, receiver_id: Option<i32>) -> Result<bool, DbErr> {
        let receiver_filter = match receiver_id {
            Some(id) => claim::Column::ReceiverId.eq(id),
            None => claim::Column::ReceiverId.is_null(),
        };

        let found = Claim::find()
            .select_only()
            .column(claim::Column::ClaimId)
            .filter(claim::Column::FoodId.eq(food_id))
            .filter(receiver_filter)
            .into_tuple::<i32>()
            .one(self.db)
            .await?;
        Ok(found.is_some())
    }

    pub async fn find_all(&self) -> Result<Vec<claim::Model>, DbErr> {
        Claim::find()
            .order_by_asc(claim::Column::ClaimId)
            .all(self.db)
            .await
    }

    pub async fn create(&self, claim: claim::ActiveModel) -> Result<claim::Model, DbErr> {
        claim.insert(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Claim::find().count(self.db).await
    }
}

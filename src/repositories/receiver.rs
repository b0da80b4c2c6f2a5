//! Receiver repository for database operations

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect,
};
use std::collections::HashSet;

use crate::models::receiver::{self, Entity as Receiver};

/// Repository for receiver database operations
#[derive(Debug, Clone, Copy)]
pub struct ReceiverRepository<'c, C> {
    db: &'c C,
}

impl<'c, C: ConnectionTrait> ReceiverRepository<'c, C> {
    pub fn new(db: &'c C) -> Self {
        Self { db }
    }

    /// Returns the set of receiver names currently stored
    pub async fn existing_names(&self) -> Result<HashSet<String>, DbErr> {
        let names = Receiver::find()
            .select_only()
            .column(receiver::Column::ReceiverName)
            .into_tuple::<String>()
            .all(self.db)
            .await?;
        Ok(names.into_iter().collect())
    }

    /// Returns every receiver identity in ascending order
    pub async fn ids(&self) -> Result<Vec<i32>, DbErr> {
        Receiver::find()
            .select_only()
            .column(receiver::Column::ReceiverId)
            .order_by_asc(receiver::Column::ReceiverId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<receiver::Model>, DbErr> {
        Receiver::find()
            .order_by_asc(receiver::Column::ReceiverId)
            .all(self.db)
            .await
    }

    pub async fn create(&self, receiver: receiver::ActiveModel) -> Result<receiver::Model, DbErr> {
        receiver.insert(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Receiver::find().count(self.db).await
    }
}

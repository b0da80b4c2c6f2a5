//! Food listing repository for database operations

use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, Order};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect,
};
use std::collections::HashSet;

use crate::models::food_listing::{self, Entity as FoodListing};

/// Identifies a listing for duplicate detection: food name, provider and
/// expiry date.
///
/// The expiry is kept as its stored ISO text so rows written by other tools
/// compare the same way they are stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingKey {
    pub food_name: String,
    pub provider_id: Option<i32>,
    pub expiry_date: String,
}

impl ListingKey {
    pub fn new(food_name: &str, provider_id: i32, expiry_date: NaiveDate) -> Self {
        Self {
            food_name: food_name.to_string(),
            provider_id: Some(provider_id),
            expiry_date: expiry_date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Repository for food listing database operations
#[derive(Debug, Clone, Copy)]
pub struct FoodListingRepository<'c, C> {
    db: &'c C,
}

impl<'c, C: ConnectionTrait> FoodListingRepository<'c, C> {
    pub fn new(db: &'c C) -> Self {
        Self { db }
    }

    /// Returns the (name, provider, expiry) key of every stored listing
    pub async fn existing_keys(&self) -> Result<HashSet<ListingKey>, DbErr> {
        let rows = FoodListing::find()
            .select_only()
            .column(food_listing::Column::FoodName)
            .column(food_listing::Column::ProviderId)
            .column(food_listing::Column::ExpiryDate)
            .into_tuple::<(String, Option<i32>, String)>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(food_name, provider_id, expiry_date)| ListingKey {
                food_name,
                provider_id,
                expiry_date,
            })
            .collect())
    }

    /// Returns up to `limit` listing identities, latest expiry first and
    /// higher identity first among equal expiries.
    ///
    /// Expiries are compared as SQLite dates; stored text that is not a date
    /// sorts after every real date.
    pub async fn latest_expiring_ids(&self, limit: u64) -> Result<Vec<i32>, DbErr> {
        FoodListing::find()
            .select_only()
            .column(food_listing::Column::FoodId)
            .order_by(Expr::cust("DATE(\"Expiry_Date\")"), Order::Desc)
            .order_by_desc(food_listing::Column::FoodId)
            .limit(limit)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<food_listing::Model>, DbErr> {
        FoodListing::find()
            .order_by_asc(food_listing::Column::FoodId)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        listing: food_listing::ActiveModel,
    ) -> Result<food_listing::Model, DbErr> {
        listing.insert(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        FoodListing::find().count(self.db).await
    }
}

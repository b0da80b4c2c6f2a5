//! Provider repository for database operations
//!
//! Encapsulates the SeaORM queries the seeders run against the providers
//! table. The repository borrows any [`ConnectionTrait`] so the same queries
//! run on a plain connection or inside the seeding transaction.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect,
};
use std::collections::{HashMap, HashSet};

use crate::models::provider::{self, Entity as Provider};

/// What a food listing needs to know about its provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRef {
    pub id: i32,
    pub provider_type: String,
    pub location: Option<String>,
}

/// Repository for provider database operations
#[derive(Debug, Clone, Copy)]
pub struct ProviderRepository<'c, C> {
    db: &'c C,
}

impl<'c, C: ConnectionTrait> ProviderRepository<'c, C> {
    /// Creates a new ProviderRepository over the given connection or transaction
    pub fn new(db: &'c C) -> Self {
        Self { db }
    }

    /// Returns the set of provider names currently stored
    pub async fn existing_names(&self) -> Result<HashSet<String>, DbErr> {
        let names = Provider::find()
            .select_only()
            .column(provider::Column::ProviderName)
            .into_tuple::<String>()
            .all(self.db)
            .await?;
        Ok(names.into_iter().collect())
    }

    /// Maps every stored provider name to its identity, type and location
    ///
    /// If a legacy store holds the same name twice, the row with the higher
    /// identity wins.
    pub async fn directory(&self) -> Result<HashMap<String, ProviderRef>, DbErr> {
        let providers = self.find_all().await?;
        Ok(providers
            .into_iter()
            .map(|p| {
                (
                    p.provider_name,
                    ProviderRef {
                        id: p.provider_id,
                        provider_type: p.provider_type,
                        location: p.location,
                    },
                )
            })
            .collect())
    }

    /// Finds all providers ordered by identity
    pub async fn find_all(&self) -> Result<Vec<provider::Model>, DbErr> {
        Provider::find()
            .order_by_asc(provider::Column::ProviderId)
            .all(self.db)
            .await
    }

    /// Inserts a provider and returns the stored row
    pub async fn create(&self, provider: provider::ActiveModel) -> Result<provider::Model, DbErr> {
        provider.insert(self.db).await
    }

    /// Counts stored providers
    pub async fn count(&self) -> Result<u64, DbErr> {
        Provider::find().count(self.db).await
    }
}

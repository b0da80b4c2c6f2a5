//! Schema initialization for the LFWMS store.
//!
//! Applies every step from the `migration` crate directly, on every run. The
//! steps are idempotent, so an empty store gets all four tables and a
//! populated one only gains missing columns. No migration bookkeeping table is
//! written.

use migration::{MigrationName, MigrationTrait, Migrator, MigratorTrait, SchemaManager};
use sea_orm::DatabaseConnection;

use crate::error::SeedError;

/// Ensures the four tables exist and `food_listings` carries every column the
/// seeder writes.
pub async fn initialize(db: &DatabaseConnection) -> Result<(), SeedError> {
    let manager = SchemaManager::new(db);
    for step in Migrator::migrations() {
        tracing::debug!(step = step.name(), "applying schema step");
        step.up(&manager).await.map_err(SeedError::schema)?;
    }
    Ok(())
}

/// Drops the four tables, dependents first. Tables that do not exist are
/// ignored.
pub async fn drop_all(db: &DatabaseConnection) -> Result<(), SeedError> {
    let manager = SchemaManager::new(db);
    for step in Migrator::migrations().iter().rev() {
        tracing::debug!(step = step.name(), "reverting schema step");
        step.down(&manager).await.map_err(SeedError::schema)?;
    }
    Ok(())
}

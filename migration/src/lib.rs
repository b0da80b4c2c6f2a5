//! Schema steps for the LFWMS store.
//!
//! Every step is idempotent: tables are created with `IF NOT EXISTS`, missing
//! columns are added only after checking for them, and drops use `IF EXISTS`.
//! [`Migrator`] lists the steps in dependency order; the seeder applies them
//! directly on every run instead of tracking them in a bookkeeping table.

pub use sea_orm_migration::prelude::*;

mod m2025_08_01_000001_create_providers;
mod m2025_08_01_000002_create_receivers;
mod m2025_08_01_000003_create_food_listings;
mod m2025_08_01_000004_create_claims;
mod m2025_08_02_000001_widen_food_listings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_08_01_000001_create_providers::Migration),
            Box::new(m2025_08_01_000002_create_receivers::Migration),
            Box::new(m2025_08_01_000003_create_food_listings::Migration),
            Box::new(m2025_08_01_000004_create_claims::Migration),
            Box::new(m2025_08_02_000001_widen_food_listings::Migration),
        ]
    }
}

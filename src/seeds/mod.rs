//! Database seeding functionality
//!
//! [`run_seed`] is the idempotent seeding run: it prepares the schema, then
//! seeds providers, receivers, food listings and claims inside a single
//! transaction that is committed once at the end. Any storage error drops the
//! transaction, so a failed run leaves no rows behind. Rerunning is safe;
//! every seeder re-reads stored keys before deciding what to insert.
//!
//! [`reset::run_reset`] is the destructive variant that rebuilds the tables
//! with a fixed data set.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::error::SeedError;
use crate::schema;

pub mod catalog;
pub mod claim;
pub mod food_listing;
pub mod provider;
pub mod receiver;
pub mod reset;

pub use catalog::{ListingCandidate, PartyCandidate};
pub use claim::seed_claims;
pub use food_listing::seed_food_listings;
pub use provider::seed_providers;
pub use receiver::seed_receivers;

/// How many candidates a seeder inserted and how many it skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub inserted: usize,
    pub skipped: usize,
}

/// Candidate lists for one seeding run.
#[derive(Debug, Clone, Copy)]
pub struct SeedPlan {
    pub providers: &'static [PartyCandidate],
    pub receivers: &'static [PartyCandidate],
    pub listings: &'static [ListingCandidate],
}

impl SeedPlan {
    /// The demonstration data set from [`catalog`].
    pub const fn demo() -> Self {
        Self {
            providers: catalog::PROVIDERS,
            receivers: catalog::RECEIVERS,
            listings: catalog::LISTINGS,
        }
    }
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self::demo()
    }
}

/// Per-table outcome of a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub providers: SeedOutcome,
    pub receivers: SeedOutcome,
    pub food_listings: SeedOutcome,
    pub claims: SeedOutcome,
}

/// Runs the idempotent seeding pipeline against `db`.
///
/// `today` anchors listing expiry dates and claim dates.
pub async fn run_seed(
    db: &DatabaseConnection,
    plan: &SeedPlan,
    today: NaiveDate,
) -> Result<SeedSummary, SeedError> {
    schema::initialize(db).await?;

    let txn = db
        .begin()
        .await
        .map_err(SeedError::storage("starting seed transaction"))?;

    let providers = seed_providers(&txn, plan.providers).await?;
    let receivers = seed_receivers(&txn, plan.receivers).await?;
    let food_listings = seed_food_listings(&txn, plan.listings, today).await?;
    let claims = seed_claims(&txn, today).await?;

    txn.commit()
        .await
        .map_err(SeedError::storage("committing seed transaction"))?;

    tracing::info!(%today, "seed run committed");
    Ok(SeedSummary {
        providers,
        receivers,
        food_listings,
        claims,
    })
}

//! Reset-and-seed variant
//!
//! Drops the four tables, recreates them and writes the fixed data set from
//! [`catalog::reset`]. Everything previously stored in those tables is lost.

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseConnection, Set, TransactionTrait};

use super::catalog;
use super::{SeedOutcome, SeedSummary, seed_food_listings, seed_providers, seed_receivers};
use crate::error::SeedError;
use crate::models::claim;
use crate::repositories::{ClaimRepository, FoodListingRepository, ReceiverRepository};
use crate::schema;

/// Rebuilds the store with the fixed data set.
pub async fn run_reset(db: &DatabaseConnection, today: NaiveDate) -> Result<SeedSummary, SeedError> {
    schema::drop_all(db).await?;
    schema::initialize(db).await?;

    let txn = db
        .begin()
        .await
        .map_err(SeedError::storage("starting reset transaction"))?;

    // On empty tables the seeders insert every candidate in list order.
    let providers = seed_providers(&txn, catalog::reset::PROVIDERS).await?;
    let receivers = seed_receivers(&txn, catalog::reset::RECEIVERS).await?;
    let food_listings = seed_food_listings(&txn, catalog::reset::LISTINGS, today).await?;
    let claims = insert_fixed_claims(&txn, today).await?;

    txn.commit()
        .await
        .map_err(SeedError::storage("committing reset transaction"))?;

    tracing::info!(%today, "reset run committed");
    Ok(SeedSummary {
        providers,
        receivers,
        food_listings,
        claims,
    })
}

/// Inserts [`catalog::reset::CLAIMS`], resolving positions against the rows
/// just written.
async fn insert_fixed_claims<C: ConnectionTrait>(
    db: &C,
    today: NaiveDate,
) -> Result<SeedOutcome, SeedError> {
    let listing_ids: Vec<i32> = FoodListingRepository::new(db)
        .find_all()
        .await
        .map_err(SeedError::storage("reading food listings"))?
        .into_iter()
        .map(|listing| listing.food_id)
        .collect();
    let receiver_ids = ReceiverRepository::new(db)
        .ids()
        .await
        .map_err(SeedError::storage("reading receiver ids"))?;

    let repo = ClaimRepository::new(db);
    let mut outcome = SeedOutcome::default();
    for &(listing, receiver, status) in catalog::reset::CLAIMS {
        let (Some(&food_id), Some(&receiver_id)) =
            (listing_ids.get(listing), receiver_ids.get(receiver))
        else {
            tracing::warn!(listing, receiver, "fixed claim points past inserted rows, skipping");
            outcome.skipped += 1;
            continue;
        };

        let claim = claim::ActiveModel {
            food_id: Set(Some(food_id)),
            receiver_id: Set(Some(receiver_id)),
            claim_date: Set(today),
            status: Set(status.to_string()),
            ..Default::default()
        };
        repo.create(claim)
            .await
            .map_err(SeedError::storage("inserting claim"))?;
        outcome.inserted += 1;
    }

    Ok(outcome)
}

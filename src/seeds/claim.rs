//! Claim seeding functionality
//!
//! Takes the [`LATEST_LISTING_LIMIT`] listings with the latest expiry and
//! hands them to receivers round-robin. Statuses cycle through
//! [`CLAIM_STATUSES`] by the same position. With no receivers stored, claims
//! are written without one.

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, Set};

use super::SeedOutcome;
use super::catalog::{CLAIM_STATUSES, LATEST_LISTING_LIMIT};
use crate::error::SeedError;
use crate::models::claim;
use crate::repositories::{ClaimRepository, FoodListingRepository, ReceiverRepository};

/// Picks the receiver and status for the listing at `position`.
///
/// `receivers` must be non-empty.
fn assignment(receivers: &[Option<i32>], position: usize) -> (Option<i32>, &'static str) {
    (
        receivers[position % receivers.len()],
        CLAIM_STATUSES[position % CLAIM_STATUSES.len()],
    )
}

/// Seeds claims dated `today`, skipping (listing, receiver) pairs that already
/// have one
pub async fn seed_claims<C: ConnectionTrait>(
    db: &C,
    today: NaiveDate,
) -> Result<SeedOutcome, SeedError> {
    let listing_ids = FoodListingRepository::new(db)
        .latest_expiring_ids(LATEST_LISTING_LIMIT)
        .await
        .map_err(SeedError::storage("selecting latest food listings"))?;

    let mut receivers: Vec<Option<i32>> = ReceiverRepository::new(db)
        .ids()
        .await
        .map_err(SeedError::storage("reading receiver ids"))?
        .into_iter()
        .map(Some)
        .collect();
    if receivers.is_empty() {
        receivers.push(None);
    }

    let repo = ClaimRepository::new(db);
    let mut outcome = SeedOutcome::default();
    for (position, food_id) in listing_ids.into_iter().enumerate() {
        let (receiver_id, status) = assignment(&receivers, position);

        if repo
            .exists_for(food_id, receiver_id)
            .await
            .map_err(SeedError::storage("checking existing claims"))?
        {
            outcome.skipped += 1;
            continue;
        }

        let claim = claim::ActiveModel {
            food_id: Set(Some(food_id)),
            receiver_id: Set(receiver_id),
            claim_date: Set(today),
            status: Set(status.to_string()),
            ..Default::default()
        };
        repo.create(claim)
            .await
            .map_err(SeedError::storage("inserting claim"))?;
        outcome.inserted += 1;
    }

    tracing::info!(
        inserted = outcome.inserted,
        skipped = outcome.skipped,
        "claim seeding completed"
    );
    Ok(outcome)
}

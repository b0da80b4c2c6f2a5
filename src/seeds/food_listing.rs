//! Food listing seeding functionality
//!
//! Each candidate is attached to a stored provider by display name. A
//! candidate whose provider is not stored is skipped without error.
//!
//! Duplicates are detected on (food name, provider, expiry). The set of
//! existing keys is read once before the loop and every inserted key is added
//! to it immediately, so a candidate listed twice is inserted once.

use chrono::{Duration, NaiveDate};
use sea_orm::{ConnectionTrait, Set};

use super::SeedOutcome;
use super::catalog::ListingCandidate;
use crate::error::SeedError;
use crate::models::food_listing;
use crate::repositories::{FoodListingRepository, ListingKey, ProviderRepository};

/// Seeds food listings from `candidates`, computing expiry dates from `today`
pub async fn seed_food_listings<C: ConnectionTrait>(
    db: &C,
    candidates: &[ListingCandidate],
    today: NaiveDate,
) -> Result<SeedOutcome, SeedError> {
    let providers = ProviderRepository::new(db)
        .directory()
        .await
        .map_err(SeedError::storage("reading providers"))?;

    let repo = FoodListingRepository::new(db);
    let mut known = repo
        .existing_keys()
        .await
        .map_err(SeedError::storage("reading food listing keys"))?;

    let mut outcome = SeedOutcome::default();
    for candidate in candidates {
        let Some(provider) = providers.get(candidate.provider_name) else {
            tracing::debug!(
                food = candidate.food_name,
                provider = candidate.provider_name,
                "provider not found, skipping listing"
            );
            outcome.skipped += 1;
            continue;
        };

        let location = candidate
            .location_override
            .map(str::to_string)
            .or_else(|| provider.location.clone());
        let expiry_date = today + Duration::days(candidate.expiry_offset_days);

        let key = ListingKey::new(candidate.food_name, provider.id, expiry_date);
        if known.contains(&key) {
            tracing::debug!(
                food = candidate.food_name,
                provider_id = provider.id,
                %expiry_date,
                "listing already exists, skipping"
            );
            outcome.skipped += 1;
            continue;
        }

        let listing = food_listing::ActiveModel {
            food_name: Set(candidate.food_name.to_string()),
            quantity: Set(candidate.quantity),
            expiry_date: Set(expiry_date),
            provider_id: Set(Some(provider.id)),
            provider_type: Set(Some(provider.provider_type.clone())),
            location: Set(location),
            food_type: Set(Some(candidate.food_type.to_string())),
            meal_type: Set(Some(candidate.meal_type.to_string())),
            ..Default::default()
        };
        repo.create(listing)
            .await
            .map_err(SeedError::storage("inserting food listing"))?;

        known.insert(key);
        outcome.inserted += 1;
    }

    tracing::info!(
        inserted = outcome.inserted,
        skipped = outcome.skipped,
        "food listing seeding completed"
    );
    Ok(outcome)
}

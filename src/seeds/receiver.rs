//! Receiver seeding functionality

use sea_orm::{ConnectionTrait, Set};

use super::SeedOutcome;
use super::catalog::PartyCandidate;
use crate::error::SeedError;
use crate::models::receiver;
use crate::repositories::ReceiverRepository;

/// Seeds the receivers table from `candidates`, skipping names that already
/// exist. Same contract as [`super::seed_providers`].
pub async fn seed_receivers<C: ConnectionTrait>(
    db: &C,
    candidates: &[PartyCandidate],
) -> Result<SeedOutcome, SeedError> {
    let repo = ReceiverRepository::new(db);
    let mut known = repo
        .existing_names()
        .await
        .map_err(SeedError::storage("reading receiver names"))?;

    let mut outcome = SeedOutcome::default();
    for candidate in candidates {
        if known.contains(candidate.name) {
            tracing::debug!(receiver = candidate.name, "receiver already exists, skipping");
            outcome.skipped += 1;
            continue;
        }

        let receiver = receiver::ActiveModel {
            receiver_name: Set(candidate.name.to_string()),
            receiver_type: Set(candidate.kind.to_string()),
            location: Set(Some(candidate.location.to_string())),
            contact: Set(Some(candidate.contact.to_string())),
            ..Default::default()
        };
        repo.create(receiver)
            .await
            .map_err(SeedError::storage("inserting receiver"))?;

        known.insert(candidate.name.to_string());
        outcome.inserted += 1;
    }

    tracing::info!(
        inserted = outcome.inserted,
        skipped = outcome.skipped,
        "receiver seeding completed"
    );
    Ok(outcome)
}

//! Provider seeding functionality
//!
//! Inserts catalog providers whose display name is not yet stored. Existing
//! rows are never touched, even when the candidate's other fields differ.

use sea_orm::{ConnectionTrait, Set};

use super::SeedOutcome;
use super::catalog::PartyCandidate;
use crate::error::SeedError;
use crate::models::provider;
use crate::repositories::ProviderRepository;

/// Seeds the providers table from `candidates`, in order, skipping names that
/// already exist
pub async fn seed_providers<C: ConnectionTrait>(
    db: &C,
    candidates: &[PartyCandidate],
) -> Result<SeedOutcome, SeedError> {
    let repo = ProviderRepository::new(db);
    let mut known = repo
        .existing_names()
        .await
        .map_err(SeedError::storage("reading provider names"))?;

    let mut outcome = SeedOutcome::default();
    for candidate in candidates {
        if known.contains(candidate.name) {
            tracing::debug!(provider = candidate.name, "provider already exists, skipping");
            outcome.skipped += 1;
            continue;
        }

        let provider = provider::ActiveModel {
            provider_name: Set(candidate.name.to_string()),
            provider_type: Set(candidate.kind.to_string()),
            location: Set(Some(candidate.location.to_string())),
            contact: Set(Some(candidate.contact.to_string())),
            ..Default::default()
        };
        let created = repo
            .create(provider)
            .await
            .map_err(SeedError::storage("inserting provider"))?;

        tracing::debug!(provider = candidate.name, id = created.provider_id, "created provider");
        known.insert(candidate.name.to_string());
        outcome.inserted += 1;
    }

    tracing::info!(
        inserted = outcome.inserted,
        skipped = outcome.skipped,
        "provider seeding completed"
    );
    Ok(outcome)
}

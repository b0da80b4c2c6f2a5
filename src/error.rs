//! # Error Handling
//!
//! Failures that abort a seeding run. An unresolvable provider name on a
//! listing candidate is not an error; the seeder skips that candidate.

use sea_orm::DbErr;
use thiserror::Error;

/// Errors raised while preparing or seeding the store.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The storage handle could not be opened.
    #[error("failed to open database '{url}': {source}")]
    Connection {
        url: String,
        #[source]
        source: DbErr,
    },
    /// Creating tables or widening columns failed.
    #[error("schema initialization failed: {source}")]
    Schema {
        #[source]
        source: DbErr,
    },
    /// A read or write during seeding or reporting failed.
    #[error("storage error while {step}: {source}")]
    Storage {
        step: &'static str,
        #[source]
        source: DbErr,
    },
}

impl SeedError {
    pub fn schema(source: DbErr) -> Self {
        Self::Schema { source }
    }

    /// Returns a closure for `map_err` tagging the error with the failing step.
    pub fn storage(step: &'static str) -> impl FnOnce(DbErr) -> Self {
        move |source| Self::Storage { step, source }
    }
}

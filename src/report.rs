//! Row-count summary printed after a run commits.

use sea_orm::ConnectionTrait;
use std::fmt::Write as _;

use crate::error::SeedError;
use crate::repositories::{
    ClaimRepository, FoodListingRepository, ProviderRepository, ReceiverRepository,
};

/// Row count of each LFWMS table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub providers: u64,
    pub receivers: u64,
    pub food_listings: u64,
    pub claims: u64,
}

impl TableCounts {
    /// Counts rows in all four tables.
    pub async fn collect<C: ConnectionTrait>(db: &C) -> Result<Self, SeedError> {
        Ok(Self {
            providers: ProviderRepository::new(db)
                .count()
                .await
                .map_err(SeedError::storage("counting providers"))?,
            receivers: ReceiverRepository::new(db)
                .count()
                .await
                .map_err(SeedError::storage("counting receivers"))?,
            food_listings: FoodListingRepository::new(db)
                .count()
                .await
                .map_err(SeedError::storage("counting food listings"))?,
            claims: ClaimRepository::new(db)
                .count()
                .await
                .map_err(SeedError::storage("counting claims"))?,
        })
    }

    /// Summary printed by the idempotent seeder.
    pub fn seed_report(&self) -> String {
        format!(
            "\u{2705} Seed complete.\nProviders: {}\nReceivers: {}\nFood Listings: {}\nClaims: {}\n",
            self.providers, self.receivers, self.food_listings, self.claims
        )
    }

    /// Summary printed by the reset variant, one line per table.
    pub fn reset_report(&self) -> String {
        let mut out = String::new();
        for (table, count) in self.by_table() {
            let _ = writeln!(out, "{table}: {count} rows");
        }
        out.push_str("\n\u{2705} Database reset and seeded successfully.\n");
        out
    }

    fn by_table(&self) -> [(&'static str, u64); 4] {
        [
            ("providers", self.providers),
            ("receivers", self.receivers),
            ("food_listings", self.food_listings),
            ("claims", self.claims),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> TableCounts {
        TableCounts {
            providers: 8,
            receivers: 6,
            food_listings: 15,
            claims: 8,
        }
    }

    #[test]
    fn seed_report_lists_every_table() {
        let report = counts().seed_report();
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "\u{2705} Seed complete.",
                "Providers: 8",
                "Receivers: 6",
                "Food Listings: 15",
                "Claims: 8",
            ]
        );
    }

    #[test]
    fn reset_report_uses_table_names() {
        let report = counts().reset_report();
        assert!(report.starts_with("providers: 8 rows\nreceivers: 6 rows\n"));
        assert!(report.contains("food_listings: 15 rows\nclaims: 8 rows\n"));
        assert!(report.trim_end().ends_with("Database reset and seeded successfully."));
    }
}

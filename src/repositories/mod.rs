//! # Repository Layer
//!
//! Repositories wrap the SeaORM queries for each table. They borrow a
//! connection or transaction rather than owning a pool, so a whole seeding run
//! can share one transaction.

pub mod claim;
pub mod food_listing;
pub mod provider;
pub mod receiver;

pub use claim::ClaimRepository;
pub use food_listing::{FoodListingRepository, ListingKey};
pub use provider::{ProviderRef, ProviderRepository};
pub use receiver::ReceiverRepository;

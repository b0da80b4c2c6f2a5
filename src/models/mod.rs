//! # Data Models
//!
//! SeaORM entities for the four LFWMS tables.

pub mod claim;
pub mod food_listing;
pub mod provider;
pub mod receiver;

pub use claim::Entity as Claim;
pub use food_listing::Entity as FoodListing;
pub use provider::Entity as Provider;
pub use receiver::Entity as Receiver;

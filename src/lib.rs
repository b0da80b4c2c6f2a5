//! # LFWMS Seeder
//!
//! Prepares the LFWMS food-donation store (providers, receivers, food
//! listings, claims) and fills it with demonstration data. Reruns only add
//! rows whose keys are missing.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod report;
pub mod repositories;
pub mod schema;
pub mod seeds;
pub mod telemetry;
pub use migration;

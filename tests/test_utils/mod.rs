//! Test utilities for database testing.
//!
//! Sets up in-memory SQLite stores with the LFWMS schema and inserts fixture
//! rows through the repositories.

use anyhow::Result;
use chrono::NaiveDate;
use lfwms_seed::models::{food_listing, provider, receiver};
use lfwms_seed::repositories::{FoodListingRepository, ProviderRepository, ReceiverRepository};
use lfwms_seed::{config::AppConfig, db, schema};
use sea_orm::{ConnectionTrait, DatabaseConnection, Set, Statement};

/// Opens an empty in-memory SQLite database without any tables, with the same
/// connection options the binaries use.
#[allow(dead_code)]
pub async fn empty_test_db() -> Result<DatabaseConnection> {
    let config = AppConfig {
        database_url: "sqlite::memory:".to_string(),
        ..AppConfig::default()
    };
    Ok(db::connect(&config).await?)
}

/// Opens an in-memory SQLite database with the four tables created.
#[allow(dead_code)]
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = empty_test_db().await?;
    schema::initialize(&db).await?;
    Ok(db)
}

#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Runs raw SQL, for fixtures the entities cannot express.
#[allow(dead_code)]
pub async fn exec(db: &DatabaseConnection, sql: &str) -> Result<()> {
    db.execute(Statement::from_string(db.get_database_backend(), sql.to_string()))
        .await?;
    Ok(())
}

/// Inserts a provider row directly and returns its identity.
#[allow(dead_code)]
pub async fn insert_provider(
    db: &DatabaseConnection,
    name: &str,
    kind: &str,
    location: &str,
) -> Result<i32> {
    let created = ProviderRepository::new(db)
        .create(provider::ActiveModel {
            provider_name: Set(name.to_string()),
            provider_type: Set(kind.to_string()),
            location: Set(Some(location.to_string())),
            contact: Set(None),
            ..Default::default()
        })
        .await?;
    Ok(created.provider_id)
}

/// Inserts a receiver row directly and returns its identity.
#[allow(dead_code)]
pub async fn insert_receiver(db: &DatabaseConnection, name: &str) -> Result<i32> {
    let created = ReceiverRepository::new(db)
        .create(receiver::ActiveModel {
            receiver_name: Set(name.to_string()),
            receiver_type: Set("NGO".to_string()),
            location: Set(None),
            contact: Set(None),
            ..Default::default()
        })
        .await?;
    Ok(created.receiver_id)
}

/// Inserts a food listing row directly and returns its identity.
#[allow(dead_code)]
pub async fn insert_listing(
    db: &DatabaseConnection,
    name: &str,
    provider_id: Option<i32>,
    expiry_date: NaiveDate,
) -> Result<i32> {
    let created = FoodListingRepository::new(db)
        .create(food_listing::ActiveModel {
            food_name: Set(name.to_string()),
            quantity: Set(10),
            expiry_date: Set(expiry_date),
            provider_id: Set(provider_id),
            provider_type: Set(None),
            location: Set(None),
            food_type: Set(None),
            meal_type: Set(None),
            ..Default::default()
        })
        .await?;
    Ok(created.food_id)
}

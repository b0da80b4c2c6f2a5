//! Tests for schema initialization on empty, populated and legacy stores.

use anyhow::Result;
use lfwms_seed::error::SeedError;
use lfwms_seed::repositories::ProviderRepository;
use lfwms_seed::schema;
use lfwms_seed::seeds::{SeedPlan, run_seed};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::{date, empty_test_db, exec, insert_provider};

async fn table_names(db: &DatabaseConnection) -> Result<Vec<String>> {
    let rows = db
        .query_all(Statement::from_string(
            db.get_database_backend(),
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name"
                .to_string(),
        ))
        .await?;
    rows.iter()
        .map(|row| row.try_get::<String>("", "name").map_err(Into::into))
        .collect()
}

async fn column_names(db: &DatabaseConnection, table: &str) -> Result<Vec<String>> {
    let rows = db
        .query_all(Statement::from_string(
            db.get_database_backend(),
            format!("SELECT name FROM pragma_table_info('{table}')"),
        ))
        .await?;
    rows.iter()
        .map(|row| row.try_get::<String>("", "name").map_err(Into::into))
        .collect()
}

#[tokio::test]
async fn creates_exactly_four_tables_on_empty_store() -> Result<()> {
    let db = empty_test_db().await?;
    schema::initialize(&db).await?;

    assert_eq!(
        table_names(&db).await?,
        vec!["claims", "food_listings", "providers", "receivers"]
    );
    assert_eq!(
        column_names(&db, "food_listings").await?,
        vec![
            "Food_ID",
            "Food_Name",
            "Quantity",
            "Expiry_Date",
            "Provider_ID",
            "Provider_Type",
            "Location",
            "Food_Type",
            "Meal_Type",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn initializing_twice_keeps_data() -> Result<()> {
    let db = empty_test_db().await?;
    schema::initialize(&db).await?;
    insert_provider(&db, "A", "NGO", "X").await?;

    schema::initialize(&db).await?;

    assert_eq!(ProviderRepository::new(&db).count().await?, 1);
    Ok(())
}

#[tokio::test]
async fn widens_legacy_food_listings_table() -> Result<()> {
    let db = empty_test_db().await?;
    exec(
        &db,
        "CREATE TABLE food_listings (
            Food_ID INTEGER PRIMARY KEY AUTOINCREMENT,
            Food_Name TEXT NOT NULL,
            Quantity INTEGER NOT NULL,
            Expiry_Date TEXT NOT NULL,
            Provider_ID INTEGER,
            Location TEXT
        )",
    )
    .await?;
    exec(
        &db,
        "INSERT INTO food_listings (Food_Name, Quantity, Expiry_Date, Provider_ID, Location)
         VALUES ('Old Rice', 5, '2023-12-31', NULL, 'Pune')",
    )
    .await?;

    schema::initialize(&db).await?;

    let columns = column_names(&db, "food_listings").await?;
    for expected in ["Food_Type", "Meal_Type", "Provider_Type"] {
        assert!(columns.iter().any(|c| c == expected), "missing {expected}");
    }
    assert_eq!(columns[..6], ["Food_ID", "Food_Name", "Quantity", "Expiry_Date", "Provider_ID", "Location"]);

    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "SELECT Food_Name, Food_Type FROM food_listings".to_string(),
        ))
        .await?
        .expect("legacy row survives");
    assert_eq!(row.try_get::<String>("", "Food_Name")?, "Old Rice");
    assert_eq!(row.try_get::<Option<String>>("", "Food_Type")?, None);
    Ok(())
}

#[tokio::test]
async fn drop_all_removes_tables_and_tolerates_missing_ones() -> Result<()> {
    let db = empty_test_db().await?;
    schema::drop_all(&db).await?;

    schema::initialize(&db).await?;
    schema::drop_all(&db).await?;

    assert!(table_names(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn unwidenable_food_listings_fails_as_schema_error() -> Result<()> {
    let db = empty_test_db().await?;
    // A view under the table name survives CREATE TABLE IF NOT EXISTS but
    // rejects ALTER TABLE ADD COLUMN.
    exec(&db, "CREATE VIEW food_listings AS SELECT 1 AS Food_ID").await?;

    let err = schema::initialize(&db).await.unwrap_err();
    assert!(matches!(err, SeedError::Schema { .. }), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn schema_failure_aborts_run_before_seeding() -> Result<()> {
    let db = empty_test_db().await?;
    exec(&db, "CREATE VIEW food_listings AS SELECT 1 AS Food_ID").await?;

    let err = run_seed(&db, &SeedPlan::demo(), date(2024, 1, 1))
        .await
        .unwrap_err();

    assert!(matches!(err, SeedError::Schema { .. }), "got {err:?}");
    assert_eq!(ProviderRepository::new(&db).count().await?, 0);
    Ok(())
}

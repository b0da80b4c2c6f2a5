//! # LFWMS Seeder Entry Point
//!
//! Idempotently seeds the store and prints per-table row counts.

use anyhow::{Context, Result};
use chrono::Local;
use lfwms_seed::{
    config::ConfigLoader,
    db,
    report::TableCounts,
    seeds::{SeedPlan, run_seed},
    telemetry,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = ConfigLoader::new().load().context("loading configuration")?;
    telemetry::init_tracing(&config).context("initializing logging")?;
    if let Ok(json) = config.to_json() {
        tracing::info!(profile = %config.profile, config = %json, "configuration loaded");
    }

    let db = db::connect(&config).await?;
    let today = Local::now().date_naive();

    run_seed(&db, &SeedPlan::demo(), today)
        .await
        .context("seeding database")?;

    let counts = TableCounts::collect(&db).await?;
    print!("{}", counts.seed_report());

    db.close().await.context("closing database")?;
    Ok(())
}

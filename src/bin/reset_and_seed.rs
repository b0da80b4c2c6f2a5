//! Drops and recreates the LFWMS tables, then writes the fixed demonstration
//! data set.

use anyhow::{Context, Result};
use chrono::Local;
use lfwms_seed::{config::ConfigLoader, db, report::TableCounts, seeds::reset, telemetry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = ConfigLoader::new().load().context("loading configuration")?;
    telemetry::init_tracing(&config).context("initializing logging")?;
    if let Ok(json) = config.to_json() {
        tracing::info!(profile = %config.profile, config = %json, "configuration loaded");
    }

    let db = db::connect(&config).await?;
    let today = Local::now().date_naive();

    reset::run_reset(&db, today)
        .await
        .context("resetting database")?;

    let counts = TableCounts::collect(&db).await?;
    print!("{}", counts.reset_report());

    db.close().await.context("closing database")?;
    Ok(())
}

//! Database connection setup.
//!
//! Opens the SQLite store through SeaORM. There is no retry: a failed open is
//! terminal for the run.
//!
//! Foreign keys are declared in the schema but not enforced on connections
//! opened here, so rows referencing missing providers, listings or receivers
//! are accepted.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::SeedError;

/// Opens the store described by `cfg`.
///
/// # Examples
///
/// ```no_run
/// use lfwms_seed::{config::AppConfig, db::connect};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> anyhow::Result<()> {
///     let db = connect(&AppConfig::default()).await?;
///     // Use the database connection...
///     Ok(())
/// }
/// ```
pub async fn connect(cfg: &AppConfig) -> Result<DatabaseConnection, SeedError> {
    let mut opt = ConnectOptions::new(&cfg.database_url);
    opt.max_connections(cfg.db_max_connections)
        .acquire_timeout(Duration::from_millis(cfg.db_acquire_timeout_ms))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug)
        .map_sqlx_sqlite_opts(|sqlite| sqlite.foreign_keys(false));

    let conn = Database::connect(opt)
        .await
        .map_err(|source| SeedError::Connection {
            url: cfg.database_url.clone(),
            source,
        })?;

    tracing::debug!(url = %cfg.database_url, "opened database");
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn opens_in_memory_store() {
        let config = AppConfig {
            database_url: "sqlite::memory:".to_string(),
            ..AppConfig::default()
        };
        assert!(connect(&config).await.is_ok());
    }

    #[tokio::test]
    async fn missing_file_without_create_mode_is_a_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.db");
        let config = AppConfig {
            database_url: format!("sqlite://{}?mode=rw", path.display()),
            ..AppConfig::default()
        };

        let err = connect(&config).await.unwrap_err();
        assert!(matches!(err, SeedError::Connection { .. }));
    }
}

//! Global logging setup.
//!
//! Events go to stderr so that stdout carries only the seeding summary.

use std::sync::atomic::{AtomicBool, Ordering};

use log::LevelFilter;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, fmt, layer::Layer, layer::SubscriberExt};

use crate::config::AppConfig;

/// Errors that can occur while initializing global telemetry.
#[derive(Debug, Error)]
pub enum TelemetryInitError {
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

static TELEMETRY_INITIALIZED: AtomicBool = AtomicBool::new(false);
static LOG_BRIDGE_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Whether `log::` records are forwarded to the tracing subscriber.
///
/// False when another `log` logger was installed before [`init_tracing`].
pub fn log_bridge_installed() -> bool {
    LOG_BRIDGE_INSTALLED.load(Ordering::SeqCst)
}

/// Initialize global tracing exactly once, wiring `log::` records (sqlx
/// statement logging among them) into the tracing pipeline.
pub fn init_tracing(config: &AppConfig) -> Result<(), TelemetryInitError> {
    if TELEMETRY_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Ok(());
    }

    let bridge = if log_bridge_installed() {
        Ok(())
    } else {
        LogTracer::builder()
            .with_max_level(LevelFilter::Trace)
            .init()
    };
    if bridge.is_ok() {
        LOG_BRIDGE_INSTALLED.store(true, Ordering::SeqCst);
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let fmt_layer = match config.log_format.as_str() {
        "pretty" => fmt::layer().pretty().with_writer(std::io::stderr).boxed(),
        _ => fmt::layer().json().with_writer(std::io::stderr).boxed(),
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);

    // `try_init` would install the log bridge a second time.
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        TELEMETRY_INITIALIZED.store(false, Ordering::SeqCst);
        return Err(err.into());
    }

    if let Err(err) = bridge {
        tracing::warn!(
            error = %err,
            "another `log` logger is installed; `log::` records will not reach tracing"
        );
    }

    Ok(())
}

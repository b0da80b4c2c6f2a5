use lfwms_seed::config::{ConfigError, ConfigLoader};
use std::{
    env, fs,
    path::PathBuf,
    sync::{Mutex, MutexGuard, OnceLock},
};
use tempfile::TempDir;

const VARS: &[&str] = &[
    "LFWMS_PROFILE",
    "LFWMS_LOG_LEVEL",
    "LFWMS_LOG_FORMAT",
    "LFWMS_DATABASE_URL",
    "LFWMS_DB_MAX_CONNECTIONS",
    "LFWMS_DB_ACQUIRE_TIMEOUT_MS",
];

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn env_guard() -> MutexGuard<'static, ()> {
    env_lock()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

fn clear_env() {
    for var in VARS {
        unsafe {
            env::remove_var(var);
        }
    }
}

fn write_env_file(dir: &TempDir, name: &str, contents: &str) {
    let path = dir.path().join(name);
    fs::write(path, contents).unwrap();
}

#[test]
fn loads_defaults_when_no_env_present() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with defaults");

    assert_eq!(cfg.profile, "local");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.log_format, "json");
    assert_eq!(cfg.database_url, "sqlite://lfwms.db?mode=rwc");
    assert_eq!(cfg.db_max_connections, 1);
    assert_eq!(cfg.db_acquire_timeout_ms, 5000);
    clear_env();
}

#[test]
fn layered_env_files_apply_in_order() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "LFWMS_DATABASE_URL=sqlite://base.db\n");
    write_env_file(&temp_dir, ".env.demo", "LFWMS_DATABASE_URL=sqlite://demo.db\n");
    write_env_file(
        &temp_dir,
        ".env.demo.local",
        "LFWMS_DATABASE_URL=sqlite://demo-local.db\nLFWMS_LOG_LEVEL=debug\n",
    );

    // Select profile via .env.local before profile-specific files load.
    write_env_file(
        &temp_dir,
        ".env.local",
        "LFWMS_PROFILE=demo\nLFWMS_DATABASE_URL=sqlite://local.db\n",
    );

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with layered env files");

    assert_eq!(cfg.profile, "demo");
    assert_eq!(cfg.database_url, "sqlite://demo-local.db");
    assert_eq!(cfg.log_level, "debug");
    clear_env();
}

#[test]
fn os_environment_has_highest_precedence() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        "LFWMS_DATABASE_URL=sqlite://from-file.db\nLFWMS_LOG_FORMAT=pretty\nOTHER_APP_SETTING=ignored\n",
    );

    unsafe {
        env::set_var("LFWMS_DATABASE_URL", "sqlite://from-env.db");
    }

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with env override");
    assert_eq!(cfg.database_url, "sqlite://from-env.db");
    assert_eq!(cfg.log_format, "pretty");

    clear_env();
}

#[test]
fn invalid_values_return_errors() {
    let _guard = env_guard();
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));

    unsafe {
        env::set_var("LFWMS_DB_MAX_CONNECTIONS", "many");
    }
    let err = loader.load().expect_err("non-numeric pool size should fail");
    assert!(matches!(
        err,
        ConfigError::InvalidNumber {
            key: "DB_MAX_CONNECTIONS",
            ..
        }
    ));
    clear_env();

    unsafe {
        env::set_var("LFWMS_DATABASE_URL", "postgres://localhost/lfwms");
    }
    let err = loader.load().expect_err("non-sqlite url should fail");
    assert!(format!("{}", err).contains("is not a sqlite URL"));

    clear_env();
}

#[test]
fn malformed_env_file_is_reported() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "LFWMS_LOG_LEVEL='unterminated\n");

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let err = loader.load().expect_err("malformed .env should fail");
    assert!(matches!(err, ConfigError::EnvFile { .. }));

    clear_env();
}

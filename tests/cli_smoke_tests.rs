//! Smoke tests running the compiled binaries against a temporary store.

use assert_cmd::Command;
use tempfile::TempDir;

fn seeder(bin: &str, dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(bin).expect("binary is built");
    cmd.current_dir(dir.path())
        .env_remove("LFWMS_PROFILE")
        .env_remove("LFWMS_DATABASE_URL")
        .env_remove("LFWMS_LOG_FORMAT")
        .env_remove("RUST_LOG")
        .env("LFWMS_LOG_LEVEL", "warn");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn seeder_creates_default_store_and_reports_counts() {
    let dir = TempDir::new().unwrap();

    let first = stdout_of(&mut seeder("lfwms-seed", &dir));
    assert!(dir.path().join("lfwms.db").exists());
    assert!(first.contains("Seed complete."));
    assert!(first.contains("Providers: 8"));
    assert!(first.contains("Receivers: 6"));
    assert!(first.contains("Food Listings: 15"));
    assert!(first.contains("Claims: 8"));

    let second = stdout_of(&mut seeder("lfwms-seed", &dir));
    assert_eq!(first, second);
}

#[test]
fn reset_binary_rebuilds_store() {
    let dir = TempDir::new().unwrap();
    stdout_of(&mut seeder("lfwms-seed", &dir));

    let report = stdout_of(&mut seeder("reset_and_seed", &dir));
    assert!(report.contains("providers: 5 rows"));
    assert!(report.contains("receivers: 4 rows"));
    assert!(report.contains("food_listings: 5 rows"));
    assert!(report.contains("claims: 4 rows"));
    assert!(report.contains("Database reset and seeded successfully."));
}

#[test]
fn invalid_configuration_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    seeder("lfwms-seed", &dir)
        .env("LFWMS_DATABASE_URL", "postgres://localhost/lfwms")
        .assert()
        .failure();
}

#[test]
fn startup_logs_configuration_to_stderr() {
    let dir = TempDir::new().unwrap();
    let output = seeder("lfwms-seed", &dir)
        .env("LFWMS_LOG_LEVEL", "info")
        .env("LFWMS_LOG_FORMAT", "json")
        .env("LFWMS_PROFILE", "smoke")
        .assert()
        .success()
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr).expect("utf-8 logs");
    assert!(stderr.contains("configuration loaded"));
    assert!(stderr.contains("DATABASE_URL"));
    assert!(stderr.contains("smoke"));

    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    assert!(!stdout.contains("configuration loaded"));
}

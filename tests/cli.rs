//! End-to-end tests for the binder CLI
//!
//! Every command runs against an isolated data directory and supplies
//! passphrases through the environment so no prompt is ever shown.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PASSPHRASE: &str = "correct horse battery staple";

fn binder(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("binder").unwrap();
    cmd.env("BINDER_DATA_DIR", dir.path());
    cmd.env_remove("BINDER_PASSPHRASE");
    cmd.env_remove("BINDER_NEW_PASSPHRASE");
    cmd.env_remove("BINDER_EXPORT_PASSPHRASE");
    cmd.env_remove("BINDER_PLAN_PASSPHRASE");
    cmd
}

#[test]
fn status_reports_first_run() {
    let dir = TempDir::new().unwrap();
    binder(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No plan exists"));
}

#[test]
fn new_plain_plan_then_status() {
    let dir = TempDir::new().unwrap();
    binder(&dir)
        .args(["new", "--title", "Plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan \"Plain\""));

    binder(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("unencrypted"));
}

#[test]
fn creating_over_an_existing_plan_fails() {
    let dir = TempDir::new().unwrap();
    binder(&dir).args(["new", "--title", "First"]).assert().success();

    binder(&dir)
        .args(["new", "--title", "Second"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn encrypted_plan_lifecycle() {
    let dir = TempDir::new().unwrap();
    binder(&dir)
        .args(["new", "--title", "Secrets", "--encrypt"])
        .env("BINDER_PASSPHRASE", PASSPHRASE)
        .assert()
        .success();

    binder(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("protected by a passphrase"));

    binder(&dir)
        .arg("show")
        .env("BINDER_PASSPHRASE", PASSPHRASE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Secrets"));

    binder(&dir)
        .arg("show")
        .env("BINDER_PASSPHRASE", "wrong passphrase")
        .assert()
        .failure()
        .stderr(predicate::str::contains("passphrase"));
}

#[test]
fn demo_plan_is_labelled() {
    let dir = TempDir::new().unwrap();
    binder(&dir).arg("demo").assert().success();

    binder(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo data"));
}

#[test]
fn export_reset_import_round_trip() {
    let dir = TempDir::new().unwrap();
    let backup_path = dir.path().join("backup.json");

    binder(&dir)
        .args(["new", "--title", "Travel Binder"])
        .assert()
        .success();

    binder(&dir)
        .args(["export", "--output"])
        .arg(&backup_path)
        .env("BINDER_EXPORT_PASSPHRASE", PASSPHRASE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Encrypted backup written"));

    binder(&dir).args(["reset", "--yes"]).assert().success();
    binder(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No plan exists"));

    binder(&dir)
        .args(["import", "--yes"])
        .arg(&backup_path)
        .env("BINDER_PASSPHRASE", PASSPHRASE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup imported"));

    binder(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Travel Binder"));
}

#[test]
fn import_with_wrong_passphrase_fails() {
    let dir = TempDir::new().unwrap();
    let backup_path = dir.path().join("backup.json");

    binder(&dir).args(["new", "--title", "Plain"]).assert().success();
    binder(&dir)
        .args(["export", "--output"])
        .arg(&backup_path)
        .env("BINDER_EXPORT_PASSPHRASE", PASSPHRASE)
        .assert()
        .success();

    binder(&dir)
        .args(["import", "--yes"])
        .arg(&backup_path)
        .env("BINDER_PASSPHRASE", "not the export passphrase")
        .assert()
        .failure()
        .stderr(predicate::str::contains("passphrase"));
}

#[test]
fn import_rejects_a_non_backup_file() {
    let dir = TempDir::new().unwrap();
    let bogus = dir.path().join("bogus.json");
    std::fs::write(&bogus, "{\"hello\": \"world\"}").unwrap();

    binder(&dir)
        .args(["import", "--yes"])
        .arg(&bogus)
        .env("BINDER_PASSPHRASE", PASSPHRASE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a binder backup"));
}

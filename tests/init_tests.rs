//! Integration tests for init, config and status commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_journal, teachlog_cmd};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    teachlog_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized teachlog journal"));

    assert!(temp.path().join(".teachlog").is_dir());

    let content = fs::read_to_string(temp.path().join(".teachlog/config.toml")).unwrap();
    assert!(content.contains("date_style = \"long\""));
}

#[test]
fn test_init_with_iso_dates() {
    let temp = TempDir::new().unwrap();

    teachlog_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--date-style")
        .arg("iso")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".teachlog/config.toml")).unwrap();
    assert!(content.contains("date_style = \"iso\""));
}

#[test]
fn test_init_invalid_date_style() {
    let temp = TempDir::new().unwrap();

    teachlog_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--date-style")
        .arg("short")
        .assert()
        .failure()
        .stderr(predicate::str::contains("long, iso"));

    assert!(!temp.path().join(".teachlog").exists());
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = init_journal();
    teachlog_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_commands_outside_journal_fail() {
    let temp = TempDir::new().unwrap();

    teachlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("teachlog init"));
}

#[test]
fn test_root_env_variable() {
    let journal = init_journal();
    let elsewhere = TempDir::new().unwrap();

    teachlog_cmd()
        .current_dir(elsewhere.path())
        .env("TEACHLOG_ROOT", journal.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries stored: 0"));
}

#[test]
fn test_config_get_and_set() {
    let temp = init_journal();

    teachlog_cmd()
        .current_dir(temp.path())
        .args(["config", "date_style"])
        .assert()
        .success()
        .stdout(predicate::str::contains("long"));

    teachlog_cmd()
        .current_dir(temp.path())
        .args(["config", "date_style", "iso"])
        .assert()
        .success();

    teachlog_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("date_style = iso"))
        .stdout(predicate::str::contains("export_dir = ."));
}

#[test]
fn test_config_unknown_key() {
    let temp = init_journal();

    teachlog_cmd()
        .current_dir(temp.path())
        .args(["config", "editor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'editor'"));
}

#[test]
fn test_iso_date_style_used_for_new_entries() {
    let temp = init_journal();

    teachlog_cmd()
        .current_dir(temp.path())
        .args(["config", "date_style", "iso"])
        .assert()
        .success();

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    teachlog_cmd()
        .current_dir(temp.path())
        .args(["add", "-c", "X-1", "-n", "Bab 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(today));
}

#[test]
fn test_status_counts() {
    let temp = init_journal();
    common::add_entry(temp.path(), "X-1", "IPA", "satu");
    common::add_entry(temp.path(), "X-2", "IPS", "dua");

    teachlog_cmd()
        .current_dir(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries stored: 2"))
        .stdout(predicate::str::contains("Classes: 0"));
}

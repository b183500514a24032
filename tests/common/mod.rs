#![allow(dead_code, deprecated)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub fn teachlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("teachlog").unwrap();
    cmd.env_remove("TEACHLOG_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Temp directory with an initialized journal
pub fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    teachlog_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

/// Add an entry through the CLI and return its id
pub fn add_entry(dir: &Path, class: &str, subject: &str, note: &str) -> i64 {
    let output = teachlog_cmd()
        .current_dir(dir)
        .args(["add", "--class", class, "--subject", subject, "--note", note])
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .strip_prefix("Saved entry ")
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|id| id.parse().ok())
        .unwrap_or_else(|| panic!("unexpected add output: {}", stdout))
}

/// Stored entries as raw JSON
pub fn stored_entries(dir: &Path) -> Vec<serde_json::Value> {
    let path = dir.join(".teachlog").join("jurnal_guru_data");
    if !path.exists() {
        return Vec::new();
    }
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// Stored class map as raw JSON
pub fn stored_school(dir: &Path) -> serde_json::Value {
    let path = dir.join(".teachlog").join("jurnal_guru_school");
    if !path.exists() {
        return serde_json::json!({});
    }
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

//! Integration tests for the pagekit CLI
//!
//! Each test runs the real binary with an isolated config location.


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a pagekit command that ignores any user config
fn pagekit(temp: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("pagekit"));
    cmd.env("PAGEKIT_CONFIG", temp.path().join("config.toml"))
        .env("NO_COLOR", "1");
    cmd
}

fn json_output(cmd: &mut assert_cmd::Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    pagekit(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pagekit"));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    pagekit(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("debounced query"));
}

#[test]
fn test_no_args_shows_info() {
    let temp = TempDir::new().unwrap();
    pagekit(&temp).assert().success().stdout(predicate::str::contains("pagekit v"));
}

#[test]
fn test_version_json() {
    let temp = TempDir::new().unwrap();
    let json = json_output(pagekit(&temp).args(["--json", "version"]));
    assert!(json["version"].is_string());
}

// =============================================================================
// PAGES
// =============================================================================

#[test]
fn test_pages_first_page_of_synthetic_collection() {
    let temp = TempDir::new().unwrap();
    pagekit(&temp)
        .args(["pages", "--total", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 13"))
        .stdout(predicate::str::contains("Showing 1-10 of 123 item(s)"))
        .stdout(predicate::str::contains("Item 10"))
        .stdout(predicate::str::contains("Item 11").not());
}

#[test]
fn test_pages_last_page_json() {
    let temp = TempDir::new().unwrap();
    let json = json_output(pagekit(&temp).args(["--json", "pages", "--total", "123", "--page", "13"]));

    assert_eq!(json["current_page"], 13);
    assert_eq!(json["start_index"], 120);
    assert_eq!(json["end_index"], 122);
    assert_eq!(json["items_on_current_page"], 3);
    assert_eq!(json["can_next_page"], false);
    assert_eq!(json["items"], serde_json::json!(["Item 121", "Item 122", "Item 123"]));
}

#[test]
fn test_pages_out_of_range_page_is_clamped() {
    let temp = TempDir::new().unwrap();
    let json = json_output(pagekit(&temp).args(["--json", "pages", "--total", "30", "--page", "-2"]));
    assert_eq!(json["current_page"], 1);

    let json = json_output(pagekit(&temp).args(["--json", "pages", "--total", "30", "--page", "400"]));
    assert_eq!(json["current_page"], 3);
}

#[test]
fn test_pages_empty_collection() {
    let temp = TempDir::new().unwrap();
    let json = json_output(pagekit(&temp).args(["--json", "pages", "--total", "0"]));
    assert_eq!(json["total_pages"], 1);
    assert_eq!(json["end_index"], -1);
    assert_eq!(json["items"], serde_json::json!([]));

    pagekit(&temp)
        .args(["pages", "--total", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items."));
}

#[test]
fn test_pages_navigation_flags_stop_at_edges() {
    let temp = TempDir::new().unwrap();
    let json = json_output(pagekit(&temp).args([
        "--json", "pages", "--total", "50", "--page", "4", "--next", "9", "--prev", "2",
    ]));
    assert_eq!(json["current_page"], 3);
}

#[test]
fn test_pages_builtin_catalog() {
    let temp = TempDir::new().unwrap();
    pagekit(&temp)
        .args(["pages", "--per-page", "5", "--page", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 6 of 6"))
        .stdout(predicate::str::contains("Dragonfruit"))
        .stdout(predicate::str::contains("Eggplant"));
}

#[test]
fn test_pages_from_file() {
    let temp = TempDir::new().unwrap();
    let list = temp.path().join("list.txt");
    fs::write(&list, "alpha\n\nbeta\n  gamma  \ndelta\n").unwrap();

    let json = json_output(pagekit(&temp).args([
        "--json",
        "pages",
        "--file",
        list.to_str().unwrap(),
        "--per-page",
        "3",
        "--page",
        "2",
    ]));
    assert_eq!(json["total_items"], 4);
    assert_eq!(json["items"], serde_json::json!(["delta"]));
}

#[test]
fn test_pages_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    pagekit(&temp)
        .args(["pages", "--file", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read catalog"));
}

// =============================================================================
// CONFIG
// =============================================================================

#[test]
fn test_config_sets_default_page_size() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "[pagination]\nitems_per_page = 4\n").unwrap();

    let json = json_output(pagekit(&temp).args(["--json", "pages", "--total", "10"]));
    assert_eq!(json["items_per_page"], 4);
    assert_eq!(json["total_pages"], 3);
}

#[test]
fn test_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "[pagination]\nitems_per_page = 4\n").unwrap();

    let json = json_output(pagekit(&temp).args(["--json", "pages", "--total", "10", "--per-page", "10"]));
    assert_eq!(json["total_pages"], 1);
}

#[test]
fn test_config_flag_path() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("custom.toml");
    fs::write(&custom, "[pagination]\nitems_per_page = 2\n").unwrap();

    let json = json_output(pagekit(&temp).args([
        "--json",
        "--config",
        custom.to_str().unwrap(),
        "pages",
        "--total",
        "5",
    ]));
    assert_eq!(json["total_pages"], 3);
}

#[test]
fn test_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "[debounce]\ndelay_ms = -1\n").unwrap();

    pagekit(&temp)
        .args(["pages"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

//! CLI Integration Tests
//!
//! These run the `sporehouse` binary end to end. Commands that need data use
//! `--demo`, so no endpoint or network access is required.
//!
//! ```
//! cargo test --package sporehouse-cli --test cli_integration
//! ```

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run sporehouse with an isolated home and config directory.
fn run_sporehouse(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sporehouse"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("XDG_DATA_HOME", home.join(".local/share"))
        .env_remove("SPOREHOUSE_URL")
        .env_remove("SPOREHOUSE_INTERVAL")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run sporehouse binary")
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_command() {
    let home = TempDir::new().unwrap();
    let output = run_sporehouse(home.path(), &["--help"]);

    assert!(output.status.success(), "Help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sporehouse"), "Help should mention the binary");
    assert!(stdout.contains("fetch"), "Help should list fetch command");
    assert!(stdout.contains("watch"), "Help should list watch command");
    assert!(stdout.contains("export"), "Help should list export command");
}

#[test]
fn test_version_command() {
    let home = TempDir::new().unwrap();
    let output = run_sporehouse(home.path(), &["--version"]);

    assert!(output.status.success(), "Version should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sporehouse"), "Version should contain sporehouse");
}

#[test]
fn test_subcommand_help() {
    let home = TempDir::new().unwrap();
    for cmd in ["fetch", "watch", "export", "config", "completions"] {
        let output = run_sporehouse(home.path(), &[cmd, "--help"]);

        assert!(output.status.success(), "{} --help should succeed", cmd);
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(!stdout.is_empty(), "{} --help should produce output", cmd);
    }
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    let output = run_sporehouse(home.path(), &["completions", "bash"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sporehouse"));
}

// =============================================================================
// Fetch, Watch and Export against the demo source
// =============================================================================

#[test]
fn test_fetch_demo_csv() {
    let home = TempDir::new().unwrap();
    let output = run_sporehouse(home.path(), &["fetch", "--demo", "--format", "csv"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Date,Time,Temperature (°C),Humidity (%)");
    assert_eq!(lines.len(), 61, "Default range is the last 60 readings");
}

#[test]
fn test_fetch_demo_json_day_range() {
    let home = TempDir::new().unwrap();
    let output = run_sporehouse(
        home.path(),
        &["fetch", "--demo", "--range", "day", "--format", "json"],
    );

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let readings = value.as_array().unwrap();
    assert_eq!(readings.len(), 1440);
    assert!(readings[0]["timestamp"].as_str().unwrap().ends_with('M'));
}

#[test]
fn test_fetch_demo_compact_json() {
    let home = TempDir::new().unwrap();
    let output = run_sporehouse(
        home.path(),
        &["fetch", "--demo", "--format", "json", "--compact"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1, "Compact JSON is a single line");
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 60);
}

#[test]
fn test_fetch_unknown_range_fails() {
    let home = TempDir::new().unwrap();
    let output = run_sporehouse(home.path(), &["fetch", "--demo", "--range", "fortnight"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fortnight"));
}

#[test]
fn test_fetch_without_endpoint_fails() {
    let home = TempDir::new().unwrap();
    let output = run_sporehouse(home.path(), &["fetch"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No endpoint configured"));
}

#[test]
fn test_invalid_url_rejected() {
    let home = TempDir::new().unwrap();
    let output = run_sporehouse(home.path(), &["fetch", "--url", "ftp://example.com"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("http://"));
}

#[test]
fn test_watch_demo_single_fetch() {
    let home = TempDir::new().unwrap();
    let output = run_sporehouse(home.path(), &["watch", "--demo", "-n", "1", "--interval", "1"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Connected | 1440 readings"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Completed 1 fetches."));
}

#[test]
fn test_export_demo_to_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("export.csv");
    let output = run_sporehouse(
        home.path(),
        &["export", "--demo", "-o", path.to_str().unwrap()],
    );

    assert!(output.status.success());
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1441);
}

// =============================================================================
// Config Commands
// =============================================================================

#[test]
fn test_config_path() {
    let home = TempDir::new().unwrap();
    let output = run_sporehouse(home.path(), &["config", "path"]);

    assert!(output.status.success(), "Config path should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim_end().ends_with("config.toml"));
}

#[test]
fn test_config_init_then_show() {
    let home = TempDir::new().unwrap();

    let output = run_sporehouse(home.path(), &["config", "init"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Created config"));

    let output = run_sporehouse(home.path(), &["config", "show"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("refresh_interval_secs = 60"));
    assert!(stdout.contains("default_range = \"60\""));
}

//! Tests for CLI argument handling, run against the built binary.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn counter_cmd(config: &PathBuf) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_counter-demo"));
    cmd.env_remove("COUNTER_DEMO_LOG");
    cmd.arg("--config").arg(config);
    cmd
}

/// Path to a config file that does not exist, so defaults apply.
fn missing_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    (temp_dir, path)
}

#[test]
fn test_help_lists_options() {
    let output = Command::new(env!("CARGO_BIN_EXE_counter-demo"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--headless"));
    assert!(stdout.contains("--debounce-ms"));
    assert!(stdout.contains("--rollback-on-failure"));
}

#[test]
fn test_headless_increments_persist() {
    let (_dir, config) = missing_config();
    let output = counter_cmd(&config)
        .args(["--latency-ms", "0", "--debounce-ms", "5", "--initial", "3"])
        .args(["--headless", "inc", "inc"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "local=5 remote=5");
}

#[test]
fn test_headless_decrement_floors_at_zero() {
    let (_dir, config) = missing_config();
    let output = counter_cmd(&config)
        .args(["--latency-ms", "0", "--debounce-ms", "5"])
        .args(["--headless", "dec", "dec"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "local=0 remote=0");
}

#[test]
fn test_invalid_override_exits_with_error() {
    let (_dir, config) = missing_config();
    let output = counter_cmd(&config)
        .args(["--debounce-ms", "0", "--headless", "get"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"));
}

#[test]
fn test_unknown_action_is_rejected() {
    let (_dir, config) = missing_config();
    let output = counter_cmd(&config)
        .args(["--headless", "reset"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value 'reset'"));
}

#[test]
fn test_headless_get_after_increment_keeps_local_value() {
    let (_dir, config) = missing_config();
    let output = counter_cmd(&config)
        .args(["--latency-ms", "20", "--debounce-ms", "5", "--initial", "5"])
        .args(["--headless", "inc", "get"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "local=6 remote=6");
}

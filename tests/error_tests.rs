//! Error scenario integration tests

use std::process::Command;

fn local_notify_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_local-notify"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn invalid_delay_is_usage_error() {
    let output = local_notify_bin()
        .args(["show", "body", "--in", "soon"])
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid delay"),
        "Expected error about invalid delay, got: {}",
        stderr
    );
}

#[test]
fn invalid_delivery_time_is_usage_error() {
    let output = local_notify_bin()
        .args(["show", "body", "--at", "tomorrow-ish"])
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid delivery time"),
        "Expected error about invalid delivery time, got: {}",
        stderr
    );
}

#[test]
fn non_numeric_cancel_id() {
    let output = local_notify_bin()
        .args(["cancel", "abc"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn config_get_unknown_key() {
    let output = local_notify_bin()
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_unknown_key() {
    let output = local_notify_bin()
        .args(["config", "set", "unknown_key", "value"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_repeat() {
    let output = local_notify_bin()
        .args(["config", "set", "repeat", "fortnightly"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid repeat interval"),
        "Expected error about invalid repeat, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_log_level() {
    let output = local_notify_bin()
        .args(["config", "set", "log_level", "loud"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("log level"),
        "Expected error about invalid log level, got: {}",
        stderr
    );
}

#[test]
fn config_list_with_no_file() {
    let output = local_notify_bin()
        .args(["config", "list"])
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("not set") && stdout.contains("repeat"),
        "Expected config list output, got: {}",
        stdout
    );
}

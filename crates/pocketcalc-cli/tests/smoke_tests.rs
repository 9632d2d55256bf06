//! Smoke tests for the pocketcalc binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the pocketcalc binary
fn pocketcalc() -> Command {
    let mut cmd = Command::cargo_bin("pocketcalc").expect("pocketcalc binary should exist");
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    pocketcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    pocketcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("press"))
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_press_subcommand_help() {
    pocketcalc()
        .args(["press", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

// ============================================================================
// Press Tests
// ============================================================================

#[test]
fn test_press_addition() {
    pocketcalc()
        .args(["press", "2+3="])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_press_keypad_symbols() {
    pocketcalc()
        .args(["press", "12", "×", "3", "="])
        .assert()
        .success()
        .stdout("36\n");
}

#[test]
fn test_press_division_by_zero() {
    pocketcalc()
        .args(["press", "5÷0="])
        .assert()
        .success()
        .stdout("Infinity\n");
}

#[test]
fn test_press_clear_keeps_pending() {
    pocketcalc()
        .args(["press", "8+3C1="])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_press_platform_format() {
    pocketcalc()
        .args(["--format", "platform", "press", "2+3="])
        .assert()
        .success()
        .stdout("5.0\n");
}

#[test]
fn test_press_fraction_digits() {
    pocketcalc()
        .args(["--fraction-digits", "2", "press", "1÷3="])
        .assert()
        .success()
        .stdout("0.33\n");
}

#[test]
fn test_press_json() {
    pocketcalc()
        .args(["press", "--json", "8+"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"pending\":\"add\""))
        .stdout(predicate::str::contains("\"display\":\"0\""));
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_press_unknown_key() {
    pocketcalc()
        .args(["press", "2^3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid keys"))
        .stderr(predicate::str::contains("'^'"));
}

#[test]
fn test_fraction_digits_out_of_range() {
    pocketcalc()
        .args(["--fraction-digits", "18", "press", "1="])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_fraction_digits_with_platform() {
    pocketcalc()
        .args(["--format", "platform", "--fraction-digits", "3", "press", "1="])
        .assert()
        .code(1);
}

#[test]
fn test_unwritable_log_file() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("missing").join("calc.log");
    pocketcalc()
        .arg("--log-file")
        .arg(&log)
        .args(["press", "1="])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Logging setup failed"));
}

// ============================================================================
// Logging and Config Tests
// ============================================================================

#[test]
fn test_log_file_receives_engine_events() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("calc.log");
    pocketcalc()
        .arg("--log-file")
        .arg(&log)
        .args(["-v", "press", "1+1="])
        .assert()
        .success()
        .stdout("2\n");

    let content = fs::read_to_string(&log).unwrap();
    assert!(content.contains("handled event"));
    assert!(content.contains("keys pressed"));
}

#[test]
fn test_quiet_press_has_no_stderr() {
    pocketcalc()
        .args(["-q", "press", "7"])
        .assert()
        .success()
        .stdout("7\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_config_command() {
    pocketcalc()
        .args(["--format", "platform", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"number_format\""))
        .stdout(predicate::str::contains("platform"));
}

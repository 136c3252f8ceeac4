//! Integration tests for basic CLI behavior.
//!
//! Tests that the binary exists, accepts standard flags, and fails fast
//! with a clear message when the API credential is missing.

#![allow(deprecated)] // cargo_bin deprecation — replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: get a Command for the `bookforge` binary.
fn bookforge() -> Command {
    Command::cargo_bin("bookforge").expect("binary 'bookforge' should be built")
}

// ─── Top-level flags ─────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    bookforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: bookforge"))
        .stdout(predicate::str::contains("TOPIC"))
        .stdout(predicate::str::contains("--output-dir"));
}

#[test]
fn short_help_flag_shows_usage() {
    bookforge()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: bookforge"));
}

#[test]
fn version_flag_shows_semver() {
    bookforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^bookforge \d+\.\d+\.\d+\n$").unwrap());
}

// ─── Configuration errors ────────────────────────────────────────────────────

#[test]
fn missing_api_key_fails_fast() {
    bookforge()
        .env_remove("OPENAI_API_KEY")
        .arg("a topic that never gets used")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn empty_stdin_topic_fails() {
    bookforge()
        .env("OPENAI_API_KEY", "sk-test")
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no topic provided"));
}

#[test]
fn unknown_flag_fails() {
    bookforge()
        .arg("--not-a-real-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

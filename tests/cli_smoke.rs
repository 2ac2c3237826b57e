#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the binary starts correctly, responds to basic
//! commands, and reports invalid input without crashing. Invalid paths are
//! reported to stderr while the process still exits normally.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn polyglot(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("polyglot").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn test_help_displays_usage() {
    let config_home = TempDir::new().unwrap();
    polyglot(&config_home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Batch fan-out translation CLI"))
        .stdout(predicate::str::contains("file"))
        .stdout(predicate::str::contains("directory"))
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("dec"));
}

#[test]
fn test_version_displays_version() {
    let config_home = TempDir::new().unwrap();
    polyglot(&config_home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_text_help_shows_output_options() {
    let config_home = TempDir::new().unwrap();
    polyglot(&config_home)
        .args(["text", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--output-file-directory"))
        .stdout(predicate::str::contains("--output-file-name"))
        .stdout(predicate::str::contains("--output-file-extension"))
        .stdout(predicate::str::contains("--output-dynamic-language-folder"))
        .stdout(predicate::str::contains("--forced"))
        .stdout(predicate::str::contains("--test"));
}

#[test]
fn test_missing_languages_is_a_usage_error() {
    let config_home = TempDir::new().unwrap();
    polyglot(&config_home)
        .args(["text", "hello"])
        .assert()
        .failure();
}

#[test]
fn test_file_command_reports_missing_path() {
    let config_home = TempDir::new().unwrap();
    polyglot(&config_home)
        .args(["file", "/nonexistent/input.txt", "en"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to inspect path"));
}

#[test]
fn test_file_command_reports_wrong_kind() {
    let config_home = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();

    polyglot(&config_home)
        .current_dir(work_dir.path())
        .args(["file", ".", "en"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not a file"));
}

#[test]
fn test_directory_command_reports_wrong_kind() {
    let config_home = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();
    std::fs::write(work_dir.path().join("plain.txt"), "x").unwrap();

    polyglot(&config_home)
        .current_dir(work_dir.path())
        .args(["directory", "plain.txt", "en"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_dec_reports_missing_root() {
    let config_home = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();

    polyglot(&config_home)
        .current_dir(work_dir.path())
        .arg("dec")
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to inspect path"));
}

#[test]
fn test_text_test_mode_reports_success() {
    let config_home = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();

    polyglot(&config_home)
        .current_dir(work_dir.path())
        .args(["text", "hello", "en", "--test"])
        .assert()
        .success()
        .stderr(predicate::str::contains("successfully translated"));
}

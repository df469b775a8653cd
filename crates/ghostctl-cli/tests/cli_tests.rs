//! End-to-end tests for the ghostctl binary surface

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help() {
    Command::cargo_bin("ghostctl")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("interactive front-end"))
        .stdout(predicate::str::contains("connect"))
        .stdout(predicate::str::contains("disconnect"));
}

#[test]
fn test_version() {
    Command::cargo_bin("ghostctl")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_completions_bash() {
    Command::cargo_bin("ghostctl")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghostctl"));
}

#[test]
fn test_config_show_defaults() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("ghostctl")
        .unwrap()
        .current_dir(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("binary = \"cyberghostvpn\""));
}

#[test]
fn test_config_generate_and_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ghostctl.toml");
    let path_str = path.to_str().unwrap();

    Command::cargo_bin("ghostctl")
        .unwrap()
        .args(["config", "generate", "--output", path_str])
        .assert()
        .success();

    Command::cargo_bin("ghostctl")
        .unwrap()
        .args(["config", "validate", path_str])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_status_with_missing_binary_fails() {
    Command::cargo_bin("ghostctl")
        .unwrap()
        .args(["--binary", "/definitely/not/a/binary", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to execute"));
}

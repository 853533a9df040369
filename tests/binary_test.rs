use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vuez() -> Command {
    Command::cargo_bin("vuez").unwrap()
}

#[test]
fn test_create_in_working_directory() {
    let working = TempDir::new().unwrap();

    vuez()
        .current_dir(working.path())
        .args(["create", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'demo' created successfully"));

    let package = fs::read_to_string(working.path().join("demo/package.json")).unwrap();
    assert!(package.contains(r#""name": "demo""#));
}

#[test]
fn test_create_existing_project_is_a_notice() {
    let working = TempDir::new().unwrap();
    fs::create_dir(working.path().join("demo")).unwrap();

    vuez()
        .current_dir(working.path())
        .args(["create", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'demo' already exists!"));

    assert_eq!(fs::read_dir(working.path().join("demo")).unwrap().count(), 0);
}

#[test]
fn test_invalid_name_exits_with_error() {
    let working = TempDir::new().unwrap();

    vuez()
        .current_dir(working.path())
        .args(["create", "a/b"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn test_version_flag() {
    vuez()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_prints_help() {
    vuez().assert().code(1).stdout(predicate::str::contains("create"));
}

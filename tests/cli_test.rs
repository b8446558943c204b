//! Integration tests for the CLI surface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn upcheck(config_root: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo_bin("upcheck"));
    cmd.env("UPCHECK_CONFIG_ROOT", config_root);
    cmd.arg("--no-color");
    cmd
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::new(cargo_bin("upcheck"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Update notifications"));
}

#[test]
fn cli_shows_version() {
    let mut cmd = Command::new(cargo_bin("upcheck"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn register_creates_stores_and_record() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("config");

    upcheck(&root)
        .args([
            "register",
            "demo",
            "--api-url",
            "https://api.example.com/latest",
            "--release-url",
            "https://example.com/releases",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered 'demo'."));

    let modules = fs::read_to_string(root.join("modules.json")).unwrap();
    assert!(modules.contains("\"demo\""));
    assert!(modules.contains("https://api.example.com/latest"));

    let settings = fs::read_to_string(root.join("settings.json")).unwrap();
    assert!(settings.contains("\"automatic_check_active\":true"));
}

#[test]
fn register_twice_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("config");

    for _ in 0..2 {
        upcheck(&root)
            .args([
                "register",
                "demo",
                "--api-url",
                "https://api.example.com/latest",
                "--release-url",
                "https://example.com/releases",
            ])
            .assert()
            .success();
    }

    let modules = fs::read_to_string(root.join("modules.json")).unwrap();
    assert_eq!(modules.matches("api_url").count(), 1);
}

#[test]
fn check_reports_update_found() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("config");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/latest");
        then.status(200).body(r#"{"tag_name": "v2.0.0"}"#);
    });

    upcheck(&root)
        .args([
            "register",
            "demo",
            "--api-url",
            &server.url("/latest"),
            "--release-url",
            "https://example.com/releases",
        ])
        .assert()
        .success();

    upcheck(&root)
        .args([
            "check",
            "--name",
            "demo",
            "--module-version",
            "1.0.0",
            "--no-dialog",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("A newer version was found!"))
        .stdout(predicate::str::contains("Installed: 1.0.0"))
        .stdout(predicate::str::contains("Latest:    2.0.0"));

    let modules = fs::read_to_string(root.join("modules.json")).unwrap();
    assert!(modules.contains("A newer version was found!"));
}

#[test]
fn check_reports_up_to_date() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("config");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/latest");
        then.status(200).body(r#"{"tag_name": "v1.0.0"}"#);
    });

    upcheck(&root)
        .args([
            "register",
            "demo",
            "--api-url",
            &server.url("/latest"),
            "--release-url",
            "https://example.com/releases",
        ])
        .assert()
        .success();

    upcheck(&root)
        .args([
            "check",
            "--name",
            "demo",
            "--module-version",
            "1.0.0",
            "--no-dialog",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Up to date."));
}

#[test]
fn check_prints_failure_line_without_aborting() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("config");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/latest");
        then.status(500).body("boom");
    });

    upcheck(&root)
        .args([
            "register",
            "demo",
            "--api-url",
            &server.url("/latest"),
            "--release-url",
            "https://example.com/releases",
        ])
        .assert()
        .success();

    upcheck(&root)
        .args([
            "check",
            "--name",
            "demo",
            "--module-version",
            "1.0.0",
            "--no-dialog",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("failed with:"));
}

#[test]
fn list_shows_registered_modules() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("config");

    upcheck(&root)
        .args([
            "register",
            "demo",
            "--api-url",
            "https://api.example.com/latest",
            "--release-url",
            "https://example.com/releases",
        ])
        .assert()
        .success();

    upcheck(&root)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("last checked: never"));
}

#[test]
fn list_with_empty_registry() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("config");

    upcheck(&root)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No modules registered."));
}

#[test]
fn settings_shows_defaults() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("config");

    upcheck(&root)
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("automatic_check_active:           true"))
        .stdout(predicate::str::contains(
            "enable_interactive_notifications: true",
        ));
}

#[test]
fn settings_mutation_persists() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("config");

    upcheck(&root)
        .args(["settings", "--auto-check", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings updated"));

    upcheck(&root)
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("automatic_check_active:           false"));
}

#[test]
fn check_requires_name_for_module_version() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("config");

    upcheck(&root)
        .args(["check", "--module-version", "1.0.0"])
        .assert()
        .failure();
}

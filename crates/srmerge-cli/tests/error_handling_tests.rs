//! Argument errors, discovery failures and their exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn srmerge(sandbox: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("srmerge").unwrap();
    cmd.current_dir(sandbox.path())
        .env("XDG_CONFIG_HOME", sandbox.path().join("config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_flag_exits_with_usage_error() {
    let temp = TempDir::new().unwrap();

    srmerge(&temp)
        .args(["--workspace_path", ".", "--root_sr_template", "t.template"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--root_sr_file"));
}

#[test]
fn duplicate_flag_is_rejected() {
    let temp = TempDir::new().unwrap();

    srmerge(&temp)
        .args([
            "--workspace_path",
            ".",
            "--root_sr_template",
            "t.template",
            "--root_sr_file",
            "a.rules",
            "--root_sr_file",
            "b.rules",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used multiple times"));

    assert!(!temp.path().join("a.rules").exists());
}

#[test]
fn unknown_flag_is_rejected() {
    let temp = TempDir::new().unwrap();

    srmerge(&temp)
        .args([
            "--workspace_path",
            ".",
            "--root_sr_template",
            "t.template",
            "--root_sr_file",
            "a.rules",
            "--overwrite",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--overwrite"));
}

#[test]
fn missing_workspace_is_not_found() {
    let temp = TempDir::new().unwrap();

    srmerge(&temp)
        .args([
            "--workspace_path",
            "does-not-exist",
            "--root_sr_template",
            "t.template",
            "--root_sr_file",
            "out.rules",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "Workspace directory does not exist: does-not-exist",
        ));
}

#[test]
fn workspace_that_is_a_file_is_a_filesystem_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("workspace.txt"), "not a directory").unwrap();

    srmerge(&temp)
        .args([
            "--workspace_path",
            "workspace.txt",
            "--root_sr_template",
            "t.template",
            "--root_sr_file",
            "out.rules",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn missing_template_is_not_found() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.rules"), "match /a {}").unwrap();

    srmerge(&temp)
        .args([
            "--workspace_path",
            ".",
            "--root_sr_template",
            "firestore.rules.template",
            "--root_sr_file",
            "firestore.rules",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "Cannot find SR template: firestore.rules.template.",
        ))
        .stderr(predicate::str::contains("Suggestions:"));

    assert!(!temp.path().join("firestore.rules").exists());
}

#[test]
fn workspace_without_fragments_has_nothing_to_merge() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("t.template"), "service x {\n  a {\n  }\n}\n").unwrap();
    fs::write(temp.path().join("firestore.rules"), "previous output").unwrap();

    srmerge(&temp)
        .args([
            "--workspace_path",
            ".",
            "--root_sr_template",
            "t.template",
            "--root_sr_file",
            "firestore.rules",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No rule files to merge."));

    assert_eq!(
        fs::read_to_string(temp.path().join("firestore.rules")).unwrap(),
        "previous output"
    );
}

#[test]
fn missing_config_file_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();

    srmerge(&temp)
        .args(["--config", "absent.toml", "config", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn unknown_config_key_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();

    srmerge(&temp)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

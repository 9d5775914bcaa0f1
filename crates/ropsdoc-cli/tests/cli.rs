use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const AZURE_ENV: [&str; 6] = [
    "AZURE_FORM_RECOGNIZER_ENDPOINT",
    "AZURE_FORM_RECOGNIZER_KEY",
    "AZURE_OPENAI_ENDPOINT",
    "AZURE_OPENAI_KEY",
    "AZURE_OPENAI_DEPLOYMENT",
    "ROPSDOC_DATABASE",
];

fn ropsdoc(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ropsdoc").unwrap();
    for key in AZURE_ENV {
        cmd.env_remove(key);
    }
    cmd.arg("--config").arg(config);
    cmd
}

fn init_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("config.json");
    ropsdoc(&path).args(["config", "init"]).assert().success();
    path
}

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("ropsdoc")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("id"))
        .stdout(predicate::str::contains("handwritten"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_validate_accepts_valid_cnp() {
    Command::cargo_bin("ropsdoc")
        .unwrap()
        .args(["validate", "1900101220034"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1900101220034 is a valid CNP"));
}

#[test]
fn test_validate_rejects_bad_control_digit() {
    Command::cargo_bin("ropsdoc")
        .unwrap()
        .args(["validate", "1900101220035"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid CNP"));
}

#[test]
fn test_config_set_and_get() {
    let dir = tempfile::tempdir().unwrap();
    let config = init_config(dir.path());

    ropsdoc(&config)
        .args(["config", "set", "openai.deployment", "gpt-4o"])
        .assert()
        .success();

    ropsdoc(&config)
        .args(["config", "get", "openai.deployment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"gpt-4o\""));

    ropsdoc(&config)
        .args(["config", "get", "input.max_resolution"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2000"));
}

#[test]
fn test_config_set_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let config = init_config(dir.path());

    ropsdoc(&config)
        .args(["config", "set", "openai.no_such_key", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}

#[test]
fn test_config_show_masks_keys() {
    let dir = tempfile::tempdir().unwrap();
    let config = init_config(dir.path());

    ropsdoc(&config)
        .args(["config", "set", "openai.api_key", "super-secret"])
        .assert()
        .success();

    ropsdoc(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("super-secret").not())
        .stdout(predicate::str::contains("********"));
}

#[test]
fn test_config_init_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let config = init_config(dir.path());

    ropsdoc(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    ropsdoc(&config)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_id_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = init_config(dir.path());

    ropsdoc(&config)
        .args(["id", "missing.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_id_rejects_non_image() {
    let dir = tempfile::tempdir().unwrap();
    let config = init_config(dir.path());
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, "just some text").unwrap();

    ropsdoc(&config)
        .arg("id")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to decode image"));
}

#[test]
fn test_handwritten_requires_backend_settings() {
    let dir = tempfile::tempdir().unwrap();
    let config = init_config(dir.path());
    let input = dir.path().join("letter.pdf");
    std::fs::write(&input, b"%PDF-1.7\n").unwrap();

    ropsdoc(&config)
        .arg("handwritten")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("document intelligence endpoint is not set"));
}

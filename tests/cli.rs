// ABOUTME: Integration tests for the azdeploy CLI commands.
// ABOUTME: Validates --help output, config reporting, and early exits of deploy.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const ENV_FILE: &str = "\
RESOURCE_GROUP=rg-demo
LOCATION=westeurope
ACR_NAME=myacr
IMAGE_NAME=myapp
CONTAINER_NAME=hello
IMAGE_TAG=v1
";

/// A command with none of the deployment variables inherited.
fn azdeploy_cmd(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("azdeploy"));
    cmd.current_dir(dir);
    for var in azdeploy::config::REQUIRED_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_shows_commands() {
    let dir = tempfile::tempdir().unwrap();
    azdeploy_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn config_reports_derived_values_from_env_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env"), ENV_FILE).unwrap();

    azdeploy_cmd(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("myacr.azurecr.io/myapp:v1"))
        .stdout(predicate::str::contains("dns-hello"))
        .stdout(predicate::str::contains(
            "http://dns-hello.westeurope.azurecontainer.io:5000",
        ));
}

#[test]
fn config_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let env_file = dir.path().join("prod.env");
    fs::write(&env_file, ENV_FILE).unwrap();

    let assert = azdeploy_cmd(dir.path())
        .args(["--json", "config", "--env-file"])
        .arg(&env_file)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["registry_image"], "myacr.azurecr.io/myapp:v1");
    assert_eq!(value["dns_label"], "dns-hello");
}

#[test]
fn config_fails_on_missing_variable() {
    let dir = tempfile::tempdir().unwrap();

    azdeploy_cmd(dir.path())
        .arg("config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "missing required environment variable: RESOURCE_GROUP",
        ));
}

#[test]
fn missing_explicit_env_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    azdeploy_cmd(dir.path())
        .args(["deploy", "--env-file", "missing.env"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("env file not found"));
}

#[test]
fn deploy_declined_at_start_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env"), ENV_FILE).unwrap();

    azdeploy_cmd(dir.path())
        .arg("deploy")
        .write_stdin("n\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Continue with the deployment?"))
        .stderr(predicate::str::contains("Deployment cancelled."));
}

#[test]
fn deploy_without_configuration_fails_after_confirmation() {
    let dir = tempfile::tempdir().unwrap();

    azdeploy_cmd(dir.path())
        .arg("deploy")
        .write_stdin("y\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "missing required environment variable",
        ));
}

#[test]
fn json_deploy_keeps_stdout_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env"), ENV_FILE).unwrap();

    let assert = azdeploy_cmd(dir.path())
        .args(["--json", "deploy"])
        .write_stdin("n\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Deployment cancelled."));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            serde_json::from_str(line)
                .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {line:?}"))
        })
        .collect();

    assert!(events.iter().any(|e| e["event"] == "info"));
    let question = events
        .iter()
        .find(|e| e["event"] == "question")
        .expect("question event");
    assert!(
        question["message"]
            .as_str()
            .unwrap()
            .contains("Continue with the deployment?")
    );
}

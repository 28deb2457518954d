//! Binary-level tests for the kernel-runner CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn kernel_runner() -> Command {
    Command::cargo_bin("kernel-runner").unwrap()
}

fn write_config(dir: &TempDir, config: serde_json::Value) {
    std::fs::write(
        dir.path().join(".kernel-runner.json"),
        serde_json::to_string_pretty(&config).unwrap(),
    )
    .unwrap();
}

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    kernel_runner()
        .args(["init", "--cwd"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert!(temp.path().join(".kernel-runner.json").exists());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();

    kernel_runner()
        .args(["init", "--cwd"])
        .arg(temp.path())
        .assert()
        .success();

    kernel_runner()
        .args(["init", "--cwd"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    kernel_runner()
        .args(["init", "--force", "--cwd"])
        .arg(temp.path())
        .assert()
        .success();
}

#[test]
fn test_resolve_uses_configured_candidate() {
    let temp = TempDir::new().unwrap();
    write_config(
        &temp,
        serde_json::json!({
            "interpreters": [
                { "path": "/usr/bin/python3", "source": "workspace" }
            ]
        }),
    );

    kernel_runner()
        .args(["resolve", "--workspace"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("/usr/bin/python3"));

    // The resolution must be persisted for the next session
    assert!(temp.path().join(".kernel-runner-selection.json").exists());
}

#[test]
fn test_resolve_without_candidates_fails() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, serde_json::json!({}));

    kernel_runner()
        .args(["resolve", "--workspace"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No usable Python interpreter"));
}

#[test]
fn test_resolve_json_output() {
    let temp = TempDir::new().unwrap();
    write_config(
        &temp,
        serde_json::json!({
            "interpreters": [
                { "path": "/usr/bin/python3", "source": "global", "version": { "major": 3, "minor": 11, "patch": 4 } }
            ]
        }),
    );

    kernel_runner()
        .args(["resolve", "--json", "--workspace"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\": \"global\""));
}

#[test]
fn test_select_by_path_and_status() {
    let temp = TempDir::new().unwrap();
    write_config(
        &temp,
        serde_json::json!({
            "interpreters": [
                { "path": "/usr/bin/python3", "source": "global" },
                { "path": "/opt/venv/bin/python", "source": "venv" }
            ]
        }),
    );

    kernel_runner()
        .args(["select", "--path", "/opt/venv/bin/python", "--workspace"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("/opt/venv/bin/python"));

    kernel_runner()
        .args(["status", "--workspace"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Persisted interpreter: /opt/venv/bin/python",
        ));
}

#[test]
fn test_select_unknown_path_fails() {
    let temp = TempDir::new().unwrap();
    write_config(
        &temp,
        serde_json::json!({
            "interpreters": [ { "path": "/usr/bin/python3" } ]
        }),
    );

    kernel_runner()
        .args(["select", "--path", "/bogus/python", "--workspace"])
        .arg(temp.path())
        .assert()
        .failure();
}

#[test]
fn test_unset_clears_selection() {
    let temp = TempDir::new().unwrap();
    write_config(
        &temp,
        serde_json::json!({
            "interpreters": [ { "path": "/usr/bin/python3", "source": "workspace" } ]
        }),
    );

    kernel_runner()
        .args(["resolve", "--workspace"])
        .arg(temp.path())
        .assert()
        .success();

    kernel_runner()
        .args(["unset", "--workspace"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection cleared"));

    kernel_runner()
        .args(["status", "--workspace"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Persisted interpreter: (none)"));
}

#[test]
fn test_status_on_fresh_workspace() {
    let temp = TempDir::new().unwrap();

    kernel_runner()
        .args(["status", "--workspace"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Persisted interpreter: (none)"))
        .stdout(predicate::str::contains("ipykernel"));
}

// ABOUTME: Integration tests for the vercel-wait binary.
// ABOUTME: Validates --help output, input validation, and end-to-end outputs.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INPUT_VARS: &[&str] = &[
    "VERCEL_TOKEN",
    "VERCEL_PROJECT_ID",
    "VERCEL_TEAM_ID",
    "GITHUB_SHA",
    "GITHUB_OUTPUT",
    "VERCEL_WAIT_TIMEOUT",
    "VERCEL_WAIT_DELAY",
    "VERCEL_WAIT_INITIAL_DELAY",
    "VERCEL_WAIT_CANCELED_AS_READY",
    "VERCEL_API_URL",
];

/// Binary with a clean environment, run from an empty directory.
fn vercel_wait_cmd(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vercel-wait"));
    for var in INPUT_VARS {
        cmd.env_remove(var);
    }
    cmd.current_dir(dir);
    cmd
}

#[test]
fn help_shows_inputs() {
    let dir = tempfile::tempdir().unwrap();
    vercel_wait_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--project-id"))
        .stdout(predicate::str::contains("--team-id"))
        .stdout(predicate::str::contains("--sha"))
        .stdout(predicate::str::contains("--canceled-as-ready"));
}

#[test]
fn missing_token_fails() {
    let dir = tempfile::tempdir().unwrap();
    vercel_wait_cmd(dir.path())
        .args(["--project-id", "prj", "--team-id", "team", "--sha", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required input: token"));
}

#[test]
fn invalid_settings_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("vercel-wait.yml"), "unexpected: true\n").unwrap();

    vercel_wait_cmd(dir.path())
        .args(["--token", "t", "--project-id", "p", "--team-id", "t", "--sha", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected"));
}

#[test]
fn zero_timeout_fails_without_contacting_api() {
    let dir = tempfile::tempdir().unwrap();
    vercel_wait_cmd(dir.path())
        .args([
            "--token",
            "t",
            "--project-id",
            "p",
            "--team-id",
            "t",
            "--sha",
            "abc123",
            "--timeout",
            "0",
            "--initial-delay",
            "0",
            "--api-url",
            "http://127.0.0.1:9",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Deployment with commit SHA abc123 was not found within the timeout period of 0 seconds.",
        ));
}

#[test]
fn json_mode_reports_error_kind() {
    let dir = tempfile::tempdir().unwrap();
    vercel_wait_cmd(dir.path())
        .env("VERCEL_TOKEN", "t")
        .env("VERCEL_PROJECT_ID", "p")
        .env("VERCEL_TEAM_ID", "t")
        .env("GITHUB_SHA", "abc123")
        .env("VERCEL_WAIT_TIMEOUT", "0")
        .env("VERCEL_WAIT_INITIAL_DELAY", "0")
        .env("VERCEL_API_URL", "http://127.0.0.1:9")
        .args(["--output", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(r#""kind":"not_found""#));
}

#[tokio::test(flavor = "multi_thread")]
async fn ready_deployment_writes_github_outputs() {
    let server = ready_deployment_server().await;
    let dir = tempfile::tempdir().unwrap();
    let output_file = dir.path().join("github_output");
    let workdir = dir.path().to_path_buf();
    let gh_output = output_file.clone();
    let args = fast_run_args(&server.uri());

    tokio::task::spawn_blocking(move || {
        vercel_wait_cmd(&workdir)
            .env("GITHUB_OUTPUT", &gh_output)
            .args(&args)
            .args(["--output", "quiet"])
            .assert()
            .success()
            .stdout(predicate::str::contains("cli.vercel.app"));
    })
    .await
    .unwrap();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("id=dpl_cli\n"));
    assert!(content.contains("url=cli.vercel.app\n"));
    assert!(content.contains("state=READY\n"));
    assert!(content.contains("alias_error=\n"));
}

/// Mock API with one READY deployment for commit `abc123`.
async fn ready_deployment_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v6/deployments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deployments": [
                { "uid": "dpl_cli", "state": "READY", "meta": { "githubCommitSha": "abc123" } }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v13/deployments/dpl_cli"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "READY",
            "url": "cli.vercel.app"
        })))
        .mount(&server)
        .await;

    server
}

fn fast_run_args(api_url: &str) -> Vec<String> {
    [
        "--token",
        "t",
        "--project-id",
        "p",
        "--team-id",
        "t",
        "--sha",
        "abc123",
        "--initial-delay",
        "0",
        "--delay",
        "0",
        "--api-url",
        api_url,
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn normal_mode_prints_ready_url() {
    let server = ready_deployment_server().await;
    let dir = tempfile::tempdir().unwrap();
    let workdir = dir.path().to_path_buf();
    let args = fast_run_args(&server.uri());

    tokio::task::spawn_blocking(move || {
        vercel_wait_cmd(&workdir)
            .args(&args)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Deployment is ready: cli.vercel.app\n",
            ));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn unwritable_github_output_fails_without_success_line() {
    let server = ready_deployment_server().await;
    let dir = tempfile::tempdir().unwrap();
    let workdir = dir.path().to_path_buf();
    let args = fast_run_args(&server.uri());
    // A directory cannot be opened for appending.
    let gh_output = dir.path().to_path_buf();

    tokio::task::spawn_blocking(move || {
        vercel_wait_cmd(&workdir)
            .env("GITHUB_OUTPUT", &gh_output)
            .args(&args)
            .assert()
            .failure()
            .stdout(predicate::str::contains("Deployment is ready").not())
            .stderr(predicate::str::contains("failed to write outputs"));
    })
    .await
    .unwrap();
}

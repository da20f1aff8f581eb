//! CLI error handling specs
//!
//! Errors print as `Error: <message>` on stderr and exit with code 1.

use crate::prelude::*;
use std::process::Stdio;

#[test]
fn invalid_url_is_rejected() {
    let temp = Project::empty();

    let run = temp
        .oq()
        .args(&["enqueue", "--url", "not-a-url"])
        .fails()
        .stderr_has("Error: invalid URL 'not-a-url'");

    assert_eq!(run.code(), Some(1));
    assert_eq!(temp.persisted(), serde_json::json!([]));
}

#[test]
fn missing_body_file_names_the_file() {
    Project::empty()
        .oq()
        .args(&[
            "enqueue",
            "--url",
            "https://api.test/a",
            "--body-file",
            "/nonexistent/body.json",
        ])
        .fails()
        .stderr_has("Error: failed to read body file /nonexistent/body.json");
}

#[test]
fn invalid_config_is_reported() {
    let temp = Project::empty();
    temp.file("config.toml", "[queue]\nmax_queue_size = 0\n");

    temp.oq()
        .args(&["status"])
        .fails()
        .stderr_has("config.toml")
        .stderr_has("max_queue_size must be at least 1");
}

#[test]
fn unsupported_method_is_rejected() {
    Project::empty()
        .oq()
        .args(&["enqueue", "--url", "https://api.test/a", "-X", "TRACE"])
        .fails()
        .stderr_has("unsupported HTTP method: TRACE");
}

#[test]
fn second_owner_is_refused() {
    let temp = Project::empty();
    let mut owner = temp
        .oq()
        .args(&["run", "--offline"])
        .std_command()
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    let locked = wait_for(SPEC_WAIT_MAX_MS, || {
        temp.read("queue.lock")
            .is_some_and(|pid| pid.trim() == owner.id().to_string())
    });

    let second = temp.oq().args(&["status"]).fails();

    owner.kill().unwrap();
    owner.wait().unwrap();
    assert!(locked, "owner never took the lock");
    second.stderr_has(&format!(
        "Error: queue is in use by another oq process (pid {})",
        owner.id()
    ));
}

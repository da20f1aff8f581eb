//! `oq drain` specs
//!
//! Replays go to a loopback port that refuses connections, so every
//! attempt fails fast without touching a real network.

use crate::prelude::*;

#[test]
fn offline_drain_is_a_no_op() {
    let temp = Project::empty();
    temp.enqueue(UNREACHABLE);
    let before = temp.persisted();

    temp.oq()
        .args(&["drain", "--offline"])
        .passes()
        .stdout_eq("Nothing replayed: offline\n");

    assert_eq!(temp.persisted(), before);
}

#[test]
fn empty_queue_drain_is_a_no_op() {
    Project::empty()
        .oq()
        .args(&["drain", "--online"])
        .passes()
        .stdout_eq("Nothing replayed: queue is empty\n");
}

#[test]
fn failed_replay_is_retained_with_error() {
    let temp = Project::empty();
    let id = temp.enqueue(UNREACHABLE);

    temp.oq()
        .args(&["drain", "--online"])
        .passes()
        .stdout_eq("replayed 0, retained 1, dropped 0 (1 remaining)\n");

    let item = &temp.persisted()[0];
    assert_eq!(item["id"], id.as_str());
    assert_eq!(item["retries"], 1);
    assert!(item["lastError"].as_str().unwrap().starts_with("network error"));
}

#[test]
fn json_report_lists_ids() {
    let temp = Project::empty();
    let id = temp.enqueue(UNREACHABLE);

    let report = temp
        .oq()
        .args(&["-o", "json", "drain", "--online"])
        .passes()
        .json();

    assert_eq!(report["retained"], serde_json::json!([id]));
    assert_eq!(report["replayed"], serde_json::json!([]));
    assert!(report.get("skipped").is_none());
}

#[test]
fn exhausted_retry_budget_drops_and_logs() {
    let temp = Project::empty();
    let id = temp.enqueue(UNREACHABLE);

    for _ in 0..2 {
        temp.oq().args(&["drain", "--online"]).passes();
    }
    temp.oq()
        .args(&["drain", "--online"])
        .passes()
        .stdout_eq("replayed 0, retained 0, dropped 1 (0 remaining)\n");

    assert_eq!(temp.persisted(), serde_json::json!([]));
    let log = temp.read("dropped.log").unwrap();
    assert_eq!(log.lines().count(), 1);
    assert!(log.contains(&format!("[{}] POST {} after 3 attempts: network error", id, UNREACHABLE)));
}

#[test]
fn retry_attempts_from_config() {
    let temp = Project::empty();
    temp.file("config.toml", "[queue]\nretry_attempts = 1\n");
    temp.enqueue(UNREACHABLE);

    temp.oq()
        .args(&["drain", "--online"])
        .passes()
        .stdout_has("dropped 1");
}

#[test]
fn unreachable_probe_means_offline() {
    let temp = Project::empty();
    temp.enqueue(UNREACHABLE);

    temp.oq()
        .args(&["drain"])
        .env("OQ_PROBE_URL", "http://127.0.0.1:9/health")
        .passes()
        .stdout_eq("Nothing replayed: offline\n");
}

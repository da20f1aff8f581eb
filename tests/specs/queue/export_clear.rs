//! `oq status`, `oq export` and `oq clear` specs

use crate::prelude::*;

#[test]
fn status_of_empty_queue() {
    Project::empty()
        .oq()
        .args(&["status"])
        .passes()
        .stdout_eq("Network: online  Queued: 0  Sync: idle\n\nQueue is empty\n");
}

#[test]
fn status_lists_items() {
    let temp = Project::empty();
    let id = temp.enqueue("https://api.test/orders");

    temp.oq()
        .args(&["status"])
        .env("OQ_PROBE_URL", "http://127.0.0.1:9/health")
        .passes()
        .stdout_has("Network: offline  Queued: 1  Sync: idle")
        .stdout_has("ID")
        .stdout_has("LAST ERROR")
        .stdout_has(&id)
        .stdout_has("POST")
        .stdout_has("https://api.test/orders");
}

#[test]
fn status_json() {
    let temp = Project::empty();
    let id = temp.enqueue("https://api.test/orders");

    let status = temp.oq().args(&["status", "-o", "json"]).passes().json();

    assert_eq!(status["isOnline"], true);
    assert_eq!(status["queueSize"], 1);
    assert_eq!(status["isSyncing"], false);
    assert_eq!(status["items"][0]["id"], id.as_str());
    assert_eq!(status["items"][0]["method"], "POST");
    assert_eq!(status["items"][0]["url"], "https://api.test/orders");
    assert_eq!(status["items"][0]["retries"], 0);
}

#[test]
fn export_prints_full_items() {
    let temp = Project::empty();
    temp.enqueue("https://api.test/a");
    temp.enqueue("https://api.test/b");

    let exported = temp.oq().args(&["export"]).passes().json();

    assert_eq!(exported, temp.persisted());
}

#[test]
fn export_to_file() {
    let temp = Project::empty();
    temp.enqueue("https://api.test/a");
    let out = temp.state_path().join("export.json");

    temp.oq()
        .args(&["export", "--out", out.to_str().unwrap()])
        .passes()
        .stdout_has("Exported 1 item(s) to");

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written, temp.persisted());
}

#[test]
fn export_of_empty_queue() {
    Project::empty()
        .oq()
        .args(&["export"])
        .passes()
        .stdout_eq("[]\n");
}

#[test]
fn clear_empties_the_queue() {
    let temp = Project::empty();
    temp.enqueue("https://api.test/a");
    temp.enqueue("https://api.test/b");

    temp.oq()
        .args(&["clear"])
        .passes()
        .stdout_eq("Removed 2 item(s)\n");

    assert_eq!(temp.read("offlineQueue").as_deref(), Some("[]"));
    temp.oq()
        .args(&["-o", "json", "clear"])
        .passes()
        .stdout_eq("{\n  \"removed\": 0\n}\n");
}

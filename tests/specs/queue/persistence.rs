//! Persisted state specs

use crate::prelude::*;

const ITEM: &str = r#"[{"id":"1767225600000-k3j9x0q2a","timestamp":"2026-01-01T00:00:00Z","requestSpec":{"url":"https://api.test/a","method":"DELETE","headers":{}},"retries":2,"lastError":"HTTP 503"}]"#;

#[test]
fn existing_queue_is_loaded() {
    let temp = Project::empty();
    temp.file("offlineQueue", ITEM);

    let status = temp.oq().args(&["status", "-o", "json"]).passes().json();

    assert_eq!(status["queueSize"], 1);
    assert_eq!(status["items"][0]["id"], "1767225600000-k3j9x0q2a");
    assert_eq!(status["items"][0]["method"], "DELETE");
    assert_eq!(status["items"][0]["retries"], 2);
    assert_eq!(status["items"][0]["lastError"], "HTTP 503");
}

#[test]
fn missing_method_defaults_to_get() {
    let temp = Project::empty();
    temp.file(
        "offlineQueue",
        r#"[{"id":"1-a","timestamp":"2026-01-01T00:00:00Z","requestSpec":{"url":"https://api.test/a"}}]"#,
    );

    let status = temp.oq().args(&["status", "-o", "json"]).passes().json();

    assert_eq!(status["items"][0]["method"], "GET");
    assert_eq!(status["items"][0]["retries"], 0);
}

#[test]
fn corrupt_queue_is_moved_aside() {
    let temp = Project::empty();
    temp.file("offlineQueue", "{not json");

    temp.oq()
        .args(&["status"])
        .passes()
        .stdout_has("Queue is empty")
        .stderr_has("Corrupt persisted queue");

    assert_eq!(temp.read("offlineQueue.bak").as_deref(), Some("{not json"));
    assert_eq!(temp.read("offlineQueue"), None);
}

#[test]
fn new_items_append_to_loaded_queue() {
    let temp = Project::empty();
    temp.file("offlineQueue", ITEM);

    let id = temp.enqueue("https://api.test/b");

    let persisted = temp.persisted();
    assert_eq!(persisted[0]["id"], "1767225600000-k3j9x0q2a");
    assert_eq!(persisted[1]["id"], id.as_str());
}

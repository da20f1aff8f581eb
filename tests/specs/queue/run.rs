//! `oq run` specs

use crate::prelude::*;

#[test]
fn stdin_lines_are_enqueued() {
    let temp = Project::empty();
    let input = concat!(
        r#"{"url":"https://api.test/a","method":"POST","body":"{}"}"#,
        "\n\n",
        "not json\n",
        r#"{"url":"https://api.test/b","method":"PATCH","headers":{"If-Match":"7"}}"#,
        "\n",
    );

    temp.oq()
        .args(&["run", "--stdin", "--offline"])
        .stdin(input)
        .passes()
        .stdout_eq("Enqueued 2, 2 item(s) remaining\n");

    let persisted = temp.persisted();
    assert_eq!(persisted[0]["requestSpec"]["url"], "https://api.test/a");
    assert_eq!(persisted[1]["requestSpec"]["method"], "PATCH");
    assert_eq!(persisted[1]["requestSpec"]["headers"]["If-Match"], "7");
}

#[test]
fn run_logs_to_state_dir() {
    let temp = Project::empty();

    temp.oq()
        .args(&["run", "--stdin", "--offline"])
        .stdin("")
        .passes();

    let log = temp.read("oq.log").unwrap_or_default();
    assert!(log.contains("offline queue running"), "log: {}", log);
    assert!(log.contains("offline queue stopped"), "log: {}", log);
}

#[test]
fn run_json_summary() {
    let temp = Project::empty();

    let out = temp
        .oq()
        .args(&["-o", "json", "run", "--stdin", "--offline"])
        .stdin(r#"{"url":"https://api.test/a"}"#)
        .passes()
        .json();

    assert_eq!(out, serde_json::json!({ "enqueued": 1, "queueSize": 1 }));
}

#[test]
fn online_run_replays_restored_items_once() {
    let temp = Project::empty();
    let id = temp.enqueue(UNREACHABLE);

    temp.oq()
        .args(&["run", "--stdin", "--online"])
        .stdin("")
        .passes()
        .stdout_eq("Enqueued 0, 1 item(s) remaining\n");

    let item = &temp.persisted()[0];
    assert_eq!(item["id"], id.as_str());
    assert_eq!(item["retries"], 1);
    assert!(item["lastError"].as_str().unwrap().starts_with("network error"));
}

#[test]
fn online_run_attempts_piped_items() {
    let temp = Project::empty();
    let input = format!("{{\"url\":\"{}\"}}\n", UNREACHABLE);

    temp.oq()
        .args(&["run", "--stdin", "--online"])
        .stdin(&input)
        .passes()
        .stdout_eq("Enqueued 1, 1 item(s) remaining\n");

    assert_eq!(temp.persisted()[0]["retries"], 1);
}

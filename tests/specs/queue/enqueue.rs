//! `oq enqueue` specs

use crate::prelude::*;

fn is_item_id(id: &str) -> bool {
    let Some((millis, suffix)) = id.split_once('-') else {
        return false;
    };
    !millis.is_empty()
        && millis.chars().all(|c| c.is_ascii_digit())
        && suffix.len() == 9
        && suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
}

#[test]
fn prints_item_id_and_persists_request() {
    let temp = Project::empty();

    let id = temp
        .oq()
        .args(&[
            "enqueue",
            "--url",
            "https://api.test/vouchers",
            "-X",
            "put",
            "-H",
            "Content-Type: application/json",
            "-H",
            "X-Request-Id: 7",
            "--body",
            r#"{"amount":5}"#,
        ])
        .passes()
        .stdout()
        .trim()
        .to_string();

    assert!(is_item_id(&id), "unexpected id: {}", id);
    let persisted = temp.persisted();
    let item = &persisted[0];
    assert_eq!(item["id"], id.as_str());
    assert_eq!(item["retries"], 0);
    assert_eq!(item["lastError"], serde_json::Value::Null);
    assert!(item["timestamp"].as_str().unwrap().ends_with('Z'));
    assert_eq!(
        item["requestSpec"],
        serde_json::json!({
            "url": "https://api.test/vouchers",
            "method": "PUT",
            "headers": { "Content-Type": "application/json", "X-Request-Id": "7" },
            "body": r#"{"amount":5}"#,
        })
    );
}

#[test]
fn json_output_reports_queue_size() {
    let temp = Project::empty();
    temp.enqueue("https://api.test/a");

    let out = temp
        .oq()
        .args(&["-o", "json", "enqueue", "--url", "https://api.test/b"])
        .passes()
        .json();

    assert_eq!(out["queueSize"], 2);
    assert!(is_item_id(out["id"].as_str().unwrap()));
}

#[test]
fn keeps_submission_order() {
    let temp = Project::empty();
    let ids: Vec<String> = ["a", "b", "c"]
        .iter()
        .map(|p| temp.enqueue(&format!("https://api.test/{}", p)))
        .collect();

    let persisted = temp.persisted();
    let stored: Vec<&str> = persisted
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    assert_eq!(stored, ids);
}

#[test]
fn full_queue_evicts_oldest() {
    let temp = Project::empty();
    temp.file("config.toml", "[queue]\nmax_queue_size = 2\n");

    temp.enqueue("https://api.test/a");
    temp.enqueue("https://api.test/b");
    temp.enqueue("https://api.test/c");

    let persisted = temp.persisted();
    let urls: Vec<&str> = persisted
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["requestSpec"]["url"].as_str().unwrap())
        .collect();
    assert_eq!(urls, vec!["https://api.test/b", "https://api.test/c"]);
}

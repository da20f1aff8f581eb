// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Clock, FakeClock, HttpMethod, ItemId, QueueItem, RequestSpec};

/// JSON `POST` against a test API, as the desktop client issues for creates.
pub fn post_request(path: &str, body: &str) -> RequestSpec {
    RequestSpec::new(HttpMethod::Post, format!("https://api.test{}", path))
        .header("Content-Type", "application/json")
        .body(body)
}

/// `PUT` update against a test API.
pub fn put_request(path: &str, body: &str) -> RequestSpec {
    RequestSpec::new(HttpMethod::Put, format!("https://api.test{}", path))
        .header("Content-Type", "application/json")
        .body(body)
}

/// A queued item with a fixed timestamp from a fresh [`FakeClock`].
pub fn queued_item(id: &str, request: RequestSpec) -> QueueItem {
    QueueItem::new(ItemId::new(id), FakeClock::new().now(), request)
}

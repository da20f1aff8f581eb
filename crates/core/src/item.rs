// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Queued request items.
//!
//! Items are created on enqueue with `retries == 0`, mutated only by the
//! drain routine, and leave the queue either on a successful replay or once
//! their retry budget is spent. The serialized field names follow the
//! persisted layout (`requestSpec`, `lastError`).

use crate::id::ItemId;
use crate::request::{HttpMethod, RequestSpec};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single deferred request waiting to be replayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueItem {
    pub id: ItemId,
    /// When the item was enqueued (RFC 3339 on the wire)
    pub timestamp: DateTime<Utc>,
    pub request_spec: RequestSpec,
    /// Failed replay attempts so far
    #[serde(default)]
    pub retries: u32,
    #[serde(default)]
    pub last_error: Option<String>,
}

impl QueueItem {
    pub fn new(id: ItemId, timestamp: DateTime<Utc>, request_spec: RequestSpec) -> Self {
        Self {
            id,
            timestamp,
            request_spec,
            retries: 0,
            last_error: None,
        }
    }

    /// Record a failed replay. Returns true once `retry_attempts` is reached.
    pub fn record_failure(&mut self, error: impl Into<String>, retry_attempts: u32) -> bool {
        self.retries = self.retries.saturating_add(1);
        self.last_error = Some(error.into());
        self.retries >= retry_attempts
    }

    pub fn summary(&self) -> ItemSummary {
        ItemSummary {
            id: self.id.clone(),
            timestamp: self.timestamp,
            retries: self.retries,
            last_error: self.last_error.clone(),
            url: self.request_spec.url.clone(),
            method: self.request_spec.method,
        }
    }
}

/// Per-item view used by status displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub id: ItemId,
    pub timestamp: DateTime<Utc>,
    pub retries: u32,
    pub last_error: Option<String>,
    pub url: String,
    pub method: HttpMethod,
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only views of queue state

use crate::id::ItemId;
use crate::item::ItemSummary;
use serde::{Deserialize, Serialize};

/// Snapshot of the queue for status displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueStatus {
    pub is_online: bool,
    pub queue_size: usize,
    pub is_syncing: bool,
    pub items: Vec<ItemSummary>,
}

/// Why a drain request did not run a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    AlreadyDraining,
    Offline,
    Empty,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::AlreadyDraining => write!(f, "a drain pass is already running"),
            SkipReason::Offline => write!(f, "offline"),
            SkipReason::Empty => write!(f, "queue is empty"),
        }
    }
}

/// Outcome of one drain request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrainReport {
    /// Items replayed successfully and removed
    pub replayed: Vec<ItemId>,
    /// Items that failed and stay queued for a later pass
    pub retained: Vec<ItemId>,
    /// Items that exhausted their retry budget and were discarded
    pub dropped: Vec<ItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped: Option<SkipReason>,
}

impl DrainReport {
    pub fn skipped(reason: SkipReason) -> Self {
        Self {
            skipped: Some(reason),
            ..Self::default()
        }
    }

    pub fn was_skipped(&self) -> bool {
        self.skipped.is_some()
    }

    /// Number of items attempted in the pass.
    pub fn attempted(&self) -> usize {
        self.replayed.len() + self.retained.len() + self.dropped.len()
    }

    /// Fold a follow-up pass over newly enqueued items into this report.
    pub fn merge(&mut self, other: DrainReport) {
        self.replayed.extend(other.replayed);
        self.retained.extend(other.retained);
        self.dropped.extend(other.dropped);
    }
}

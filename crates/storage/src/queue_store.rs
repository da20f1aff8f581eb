// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted queue contents.
//!
//! The full ordered item list is stored as one JSON array under
//! [`STORAGE_KEY`]. It is loaded once at startup and rewritten after every
//! mutation (last writer wins).

use crate::kv::{KeyValueStore, StoreError};
use oq_core::QueueItem;
use tracing::warn;

/// Key holding the serialized queue.
pub const STORAGE_KEY: &str = "offlineQueue";

const MAX_BAK_KEYS: u32 = 3;

/// Load/save interface used by the queue manager
pub trait QueueStore: Send + Sync + 'static {
    fn load(&self) -> Result<Vec<QueueItem>, StoreError>;

    fn save(&self, items: &[QueueItem]) -> Result<(), StoreError>;
}

/// [`QueueStore`] over any [`KeyValueStore`]
#[derive(Clone)]
pub struct KvQueueStore<S> {
    kv: S,
}

impl<S: KeyValueStore> KvQueueStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Move an unreadable value aside to `offlineQueue.bak`, rotating older
    /// backups to `.bak.2` and `.bak.3`. The oldest backup is discarded.
    fn quarantine(&self) -> Result<String, StoreError> {
        let bak = |n: u32| {
            if n == 1 {
                format!("{}.bak", STORAGE_KEY)
            } else {
                format!("{}.bak.{}", STORAGE_KEY, n)
            }
        };

        for n in (1..MAX_BAK_KEYS).rev() {
            self.kv.rename(&bak(n), &bak(n + 1))?;
        }
        let key = bak(1);
        self.kv.rename(STORAGE_KEY, &key)?;
        Ok(key)
    }

    fn discard_corrupt(
        &self,
        reason: &dyn std::fmt::Display,
    ) -> Result<Vec<QueueItem>, StoreError> {
        let bak = self.quarantine()?;
        warn!(
            error = %reason,
            bak = %bak,
            "Corrupt persisted queue, moving aside and starting empty",
        );
        Ok(Vec::new())
    }
}

impl<S: KeyValueStore> QueueStore for KvQueueStore<S> {
    /// A missing key loads as an empty queue. Unparseable content also
    /// loads as empty, after being moved aside for inspection.
    fn load(&self) -> Result<Vec<QueueItem>, StoreError> {
        let raw = match self.kv.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(e @ StoreError::Corrupt { .. }) => return self.discard_corrupt(&e),
            Err(e) => return Err(e),
        };

        match serde_json::from_str::<Vec<QueueItem>>(&raw) {
            Ok(items) => Ok(items),
            Err(e) => self.discard_corrupt(&e),
        }
    }

    fn save(&self, items: &[QueueItem]) -> Result<(), StoreError> {
        let json = serde_json::to_string(items)?;
        self.kv.set(STORAGE_KEY, &json)
    }
}

#[cfg(test)]
#[path = "queue_store_tests.rs"]
mod tests;

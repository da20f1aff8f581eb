// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Persistence slot for the offline queue.
//!
//! The queue only needs a key-value `get`/`set` pair; [`KvQueueStore`]
//! layers the JSON item list on top of any [`KeyValueStore`].

mod file;
mod kv;
mod memory;
mod queue_store;

pub use file::FileKeyValueStore;
pub use kv::{validate_key, KeyValueStore, StoreError};
pub use memory::MemoryKeyValueStore;
pub use queue_store::{KvQueueStore, QueueStore, STORAGE_KEY};

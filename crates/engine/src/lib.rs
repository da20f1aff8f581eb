// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Offline queue engine: buffering, draining and connectivity tracking

pub mod drop_log;
pub mod env;
mod monitor;
mod queue;

pub use drop_log::DropLog;
pub use monitor::{ConnectivityMonitor, MonitorConfig, MonitorHandle};
pub use queue::{OfflineQueue, OfflineQueueConfig, QueueDeps};

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! oq-core: Data model shared by the offline queue crates

pub mod clock;
pub mod config;
pub mod id;
pub mod item;
pub mod request;
pub mod status;
pub mod time_fmt;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, QueueConfig};
pub use id::ItemId;
pub use item::{ItemSummary, QueueItem};
pub use request::{HttpMethod, ParseMethodError, RequestSpec};
pub use status::{DrainReport, QueueStatus, SkipReason};
pub use time_fmt::{format_age, format_elapsed};

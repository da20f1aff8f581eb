// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Connectivity probes
//!
//! A probe answers "are we online right now?". Turning successive answers
//! into online/offline edges is the monitor's job, not the probe's.

mod fixed;
mod probe;

pub use fixed::StaticProbe;
pub use probe::HttpProbe;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeProbe;

use async_trait::async_trait;

/// Source of the current connectivity state
#[async_trait]
pub trait ConnectivityProbe: Clone + Send + Sync + 'static {
    async fn check(&self) -> bool;
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake connectivity probe for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::ConnectivityProbe;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

struct FakeProbeState {
    online: bool,
    checks: usize,
}

/// Probe whose answer is set by the test. Clones share state.
#[derive(Clone)]
pub struct FakeProbe {
    inner: Arc<Mutex<FakeProbeState>>,
}

impl FakeProbe {
    pub fn new(online: bool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeProbeState { online, checks: 0 })),
        }
    }

    pub fn set_online(&self, online: bool) {
        self.inner.lock().online = online;
    }

    /// Number of times `check` has been called
    pub fn checks(&self) -> usize {
        self.inner.lock().checks
    }
}

#[async_trait]
impl ConnectivityProbe for FakeProbe {
    async fn check(&self) -> bool {
        let mut inner = self.inner.lock();
        inner.checks += 1;
        inner.online
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;

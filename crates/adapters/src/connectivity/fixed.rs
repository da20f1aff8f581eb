// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-answer probe.

use super::ConnectivityProbe;
use async_trait::async_trait;

/// Probe that always reports the same state.
///
/// Used when the operator forces `--online` or `--offline`.
#[derive(Clone, Copy, Debug)]
pub struct StaticProbe(pub bool);

#[async_trait]
impl ConnectivityProbe for StaticProbe {
    async fn check(&self) -> bool {
        self.0
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reachability check against an HTTP endpoint.
//!
//! Any HTTP response, whatever its status, means the network path to the
//! API is up. Only transport failures (DNS, refused, timeout) count as
//! offline.

use super::ConnectivityProbe;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Clone)]
pub struct HttpProbe {
    url: String,
    client: reqwest::Client,
}

impl HttpProbe {
    /// Probe `url` with the timeout from `OQ_PROBE_TIMEOUT_MS`.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_timeout(url, crate::env::probe_timeout())
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl ConnectivityProbe for HttpProbe {
    async fn check(&self) -> bool {
        match self.client.head(&self.url).send().await {
            Ok(response) => {
                tracing::trace!(url = %self.url, status = response.status().as_u16(), "probe reachable");
                true
            }
            Err(e) => {
                tracing::debug!(url = %self.url, error = %e, "probe unreachable");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;

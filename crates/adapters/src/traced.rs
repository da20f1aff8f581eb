// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::http::{HttpAdapter, HttpError, HttpResponse};
use async_trait::async_trait;
use oq_core::RequestSpec;
use tracing::Instrument;

/// Wrapper that adds tracing to any HttpAdapter
#[derive(Clone)]
pub struct TracedHttp<H> {
    inner: H,
}

impl<H> TracedHttp<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<H: HttpAdapter> HttpAdapter for TracedHttp<H> {
    async fn send(&self, request: &RequestSpec) -> Result<HttpResponse, HttpError> {
        let span = tracing::info_span!("http.replay", method = %request.method, url = %request.url);
        async {
            tracing::debug!(
                headers = request.headers.len(),
                body_len = request.body.as_ref().map_or(0, |b| b.len()),
                "sending"
            );
            let start = std::time::Instant::now();
            let result = self.inner.send(request).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(r) => tracing::info!(status = r.status, elapsed_ms, "replayed"),
                Err(e) => tracing::warn!(
                    elapsed_ms,
                    error = %e,
                    retryable = e.is_retryable(),
                    "replay failed"
                ),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! reqwest-backed replay adapter

use super::{HttpAdapter, HttpError, HttpResponse};
use async_trait::async_trait;
use oq_core::RequestSpec;
use std::time::Duration;

#[derive(Clone)]
pub struct ReqwestHttpAdapter {
    client: reqwest::Client,
}

impl Default for ReqwestHttpAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestHttpAdapter {
    /// Adapter with the timeout from `OQ_HTTP_TIMEOUT_MS`.
    pub fn new() -> Self {
        Self::with_timeout(crate::env::http_timeout())
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }
}

fn map_send_error(e: reqwest::Error) -> HttpError {
    if e.is_builder() {
        HttpError::InvalidRequest(e.to_string())
    } else if e.is_timeout() {
        HttpError::Transport(format!("request timed out: {}", e))
    } else {
        HttpError::Transport(e.to_string())
    }
}

#[async_trait]
impl HttpAdapter for ReqwestHttpAdapter {
    async fn send(&self, request: &RequestSpec) -> Result<HttpResponse, HttpError> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|e| HttpError::InvalidRequest(e.to_string()))?;

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(map_send_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        if (200..300).contains(&status) {
            Ok(HttpResponse { status, body })
        } else {
            Err(HttpError::Status { status, body })
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;

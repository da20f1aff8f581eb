// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP replay adapters
//!
//! An [`HttpAdapter`] re-issues a captured [`RequestSpec`] exactly as it was
//! captured. Any non-2xx status is reported as [`HttpError::Status`].

mod client;

pub use client::ReqwestHttpAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeHttpAdapter, FakeOutcome, HttpCall};

use async_trait::async_trait;
use oq_core::RequestSpec;
use thiserror::Error;

/// Successful (2xx) response to a replayed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Errors from replaying a request
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("HTTP {status}")]
    Status { status: u16, body: String },
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl HttpError {
    /// Whether the failure looks transient (network trouble, 408, 425, 429, 5xx).
    ///
    /// Diagnostic only: the queue spends a retry on every failure alike.
    pub fn is_retryable(&self) -> bool {
        match self {
            HttpError::Transport(_) => true,
            HttpError::Status { status, .. } => {
                matches!(status, 408 | 425 | 429) || (500..600).contains(status)
            }
            HttpError::InvalidRequest(_) => false,
        }
    }
}

/// Adapter for replaying captured requests
#[async_trait]
pub trait HttpAdapter: Clone + Send + Sync + 'static {
    async fn send(&self, request: &RequestSpec) -> Result<HttpResponse, HttpError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

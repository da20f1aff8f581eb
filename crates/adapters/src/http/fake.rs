// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake replay adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{HttpAdapter, HttpError, HttpResponse};
use async_trait::async_trait;
use oq_core::RequestSpec;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Scripted result of a fake request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeOutcome {
    /// Respond with this (2xx) status
    Ok(u16),
    /// Respond with this non-2xx status
    Status(u16),
    /// Fail before any response arrives
    Transport(String),
}

impl FakeOutcome {
    fn into_result(self) -> Result<HttpResponse, HttpError> {
        match self {
            FakeOutcome::Ok(status) => Ok(HttpResponse {
                status,
                body: String::new(),
            }),
            FakeOutcome::Status(status) => Err(HttpError::Status {
                status,
                body: String::new(),
            }),
            FakeOutcome::Transport(message) => Err(HttpError::Transport(message)),
        }
    }
}

/// Recorded request
#[derive(Debug, Clone)]
pub struct HttpCall {
    pub request: RequestSpec,
}

struct FakeHttpState {
    calls: Vec<HttpCall>,
    scripts: HashMap<String, VecDeque<FakeOutcome>>,
    url_defaults: HashMap<String, FakeOutcome>,
    default: FakeOutcome,
    delay: Option<Duration>,
}

/// Fake replay adapter for testing.
///
/// Outcomes are looked up by URL: first the scripted sequence for that URL,
/// then its sticky default, then the global default (`200 OK`).
#[derive(Clone)]
pub struct FakeHttpAdapter {
    inner: Arc<Mutex<FakeHttpState>>,
    paused: Arc<watch::Sender<bool>>,
}

impl Default for FakeHttpAdapter {
    fn default() -> Self {
        let (paused, _) = watch::channel(false);
        Self {
            inner: Arc::new(Mutex::new(FakeHttpState {
                calls: Vec::new(),
                scripts: HashMap::new(),
                url_defaults: HashMap::new(),
                default: FakeOutcome::Ok(200),
                delay: None,
            })),
            paused: Arc::new(paused),
        }
    }
}

impl FakeHttpAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue outcomes for successive requests to `url`.
    pub fn script(&self, url: &str, outcomes: impl IntoIterator<Item = FakeOutcome>) {
        self.inner
            .lock()
            .scripts
            .entry(url.to_string())
            .or_default()
            .extend(outcomes);
    }

    /// Outcome for `url` once its script is exhausted.
    pub fn respond(&self, url: &str, outcome: FakeOutcome) {
        self.inner
            .lock()
            .url_defaults
            .insert(url.to_string(), outcome);
    }

    /// Outcome for URLs with nothing scripted.
    pub fn set_default(&self, outcome: FakeOutcome) {
        self.inner.lock().default = outcome;
    }

    pub fn set_delay(&self, delay: Duration) {
        self.inner.lock().delay = Some(delay);
    }

    /// Hold every request in flight (after recording it) until [`resume`](Self::resume).
    pub fn pause(&self) {
        self.paused.send_replace(true);
    }

    pub fn resume(&self) {
        self.paused.send_replace(false);
    }

    /// All recorded requests, in the order they were sent
    pub fn calls(&self) -> Vec<HttpCall> {
        self.inner.lock().calls.clone()
    }

    /// URLs of all recorded requests, in order
    pub fn urls(&self) -> Vec<String> {
        self.inner
            .lock()
            .calls
            .iter()
            .map(|c| c.request.url.clone())
            .collect()
    }

    /// Wait until at least `n` requests have been recorded.
    ///
    /// Returns false if that does not happen within `timeout`.
    pub async fn wait_for_calls(&self, n: usize, timeout: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if self.inner.lock().calls.len() >= n {
                return true;
            }
            if tokio::time::Instant::now() >= deadline {
                return false;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }

    fn next_outcome(&self, url: &str) -> FakeOutcome {
        let mut inner = self.inner.lock();
        if let Some(outcome) = inner.scripts.get_mut(url).and_then(|s| s.pop_front()) {
            return outcome;
        }
        inner
            .url_defaults
            .get(url)
            .cloned()
            .unwrap_or_else(|| inner.default.clone())
    }
}

#[async_trait]
impl HttpAdapter for FakeHttpAdapter {
    async fn send(&self, request: &RequestSpec) -> Result<HttpResponse, HttpError> {
        let delay = {
            let mut inner = self.inner.lock();
            inner.calls.push(HttpCall {
                request: request.clone(),
            });
            inner.delay
        };

        let mut paused = self.paused.subscribe();
        while *paused.borrow_and_update() {
            if paused.changed().await.is_err() {
                break;
            }
        }

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.next_outcome(&request.url).into_result()
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;

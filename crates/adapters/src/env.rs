// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

use std::time::Duration;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Per-request timeout for replayed requests (default: 30000ms).
pub fn http_timeout() -> Duration {
    parse_duration_ms("OQ_HTTP_TIMEOUT_MS").unwrap_or(Duration::from_secs(30))
}

/// Timeout for a single connectivity probe (default: 3000ms).
pub fn probe_timeout() -> Duration {
    parse_duration_ms("OQ_PROBE_TIMEOUT_MS").unwrap_or(Duration::from_secs(3))
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the engine crate.

use std::time::Duration;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

/// Connectivity probe interval (default: 5000ms).
pub fn probe_interval() -> Duration {
    parse_duration_ms("OQ_PROBE_INTERVAL_MS").unwrap_or(Duration::from_secs(5))
}

/// Interval between drain requests while online (default: 30000ms).
pub fn retry_interval() -> Duration {
    parse_duration_ms("OQ_RETRY_INTERVAL_MS").unwrap_or(Duration::from_secs(30))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;

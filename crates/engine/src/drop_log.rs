// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only log of discarded requests.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};
use oq_core::QueueItem;

/// Append-only record of items dropped after exhausting their retry budget.
///
/// Writes one human-readable line per drop:
///   `2026-01-30T08:14:09Z [1769760849000-k3j9x0q2a] POST https://api/x after 3 attempts: HTTP 503`
///
/// Each `append()` call opens, writes, and closes the file. Drops are rare,
/// so this is cheap enough.
#[derive(Debug, Clone)]
pub struct DropLog {
    path: PathBuf,
}

impl DropLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Record a dropped item.
    ///
    /// Failures are logged via tracing but do not propagate.
    pub fn append(&self, at: DateTime<Utc>, item: &QueueItem) {
        if let Err(e) = self.write_line(at, item) {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "failed to write drop log"
            );
        }
    }

    fn write_line(&self, at: DateTime<Utc>, item: &QueueItem) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            file,
            "{} [{}] {} {} after {} attempts: {}",
            at.to_rfc3339_opts(SecondsFormat::Secs, true),
            item.id,
            item.request_spec.method,
            item.request_spec.url,
            item.retries,
            item.last_error.as_deref().unwrap_or("unknown error"),
        )
    }
}

#[cfg(test)]
#[path = "drop_log_tests.rs"]
mod tests;

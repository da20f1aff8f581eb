// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Short human-readable ages for status listings.

use chrono::{DateTime, Utc};

/// Format seconds as a short human-readable duration: `"5s"`, `"2m"`, `"1h30m"`, `"3d"`.
///
/// For the hours range, minutes are included when non-zero (e.g. `"1h"` vs `"1h5m"`).
pub fn format_elapsed(secs: u64) -> String {
    match secs {
        0..=59 => format!("{}s", secs),
        60..=3599 => format!("{}m", secs / 60),
        3600..=86399 => {
            let (h, m) = (secs / 3600, (secs % 3600) / 60);
            if m > 0 {
                format!("{}h{}m", h, m)
            } else {
                format!("{}h", h)
            }
        }
        _ => format!("{}d", secs / 86400),
    }
}

/// Age of `then` relative to `now`; instants in the future read as `"0s"`.
pub fn format_age(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    format_elapsed((now - then).num_seconds().max(0) as u64)
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;

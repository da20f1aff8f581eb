// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

// --- State directory ---

/// Resolve state directory: OQ_STATE_DIR > XDG_STATE_HOME/oq > ~/.local/state/oq
pub fn state_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("OQ_STATE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("oq"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| anyhow!("cannot locate state directory: set OQ_STATE_DIR or HOME"))?;
    Ok(PathBuf::from(home).join(".local/state/oq"))
}

// --- Network ---

/// Connectivity probe URL override
pub fn probe_url() -> Option<String> {
    std::env::var("OQ_PROBE_URL").ok().filter(|s| !s.is_empty())
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-owner lock on the state directory

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use fs2::FileExt;

pub const LOCK_FILE: &str = "queue.lock";

/// Exclusive advisory lock held for the lifetime of one `oq` command.
///
/// Released when dropped (the OS releases it if the process dies).
#[derive(Debug)]
pub struct StateLock {
    _file: File,
}

impl StateLock {
    pub fn acquire(state_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(state_dir)
            .with_context(|| format!("failed to create {}", state_dir.display()))?;
        let path = state_dir.join(LOCK_FILE);

        // Don't truncate before holding the lock; it would wipe the owner's PID
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .with_context(|| format!("failed to open {}", path.display()))?;

        if file.try_lock_exclusive().is_err() {
            let owner = std::fs::read_to_string(&path).unwrap_or_default();
            let owner = owner.trim();
            return Err(if owner.is_empty() {
                anyhow!("queue is in use by another oq process")
            } else {
                anyhow!("queue is in use by another oq process (pid {})", owner)
            });
        }

        file.set_len(0)?;
        writeln!(file, "{}", std::process::id())?;

        Ok(Self { _file: file })
    }
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;

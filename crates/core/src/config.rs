// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Queue limits.
//!
//! Missing keys fall back to the defaults; zero values are rejected.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on the number of queued items.
pub const DEFAULT_MAX_QUEUE_SIZE: usize = 500;

/// Default number of failed replays before an item is discarded.
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be at least 1")]
    Zero { field: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Oldest items are evicted once this many are queued
    pub max_queue_size: usize,
    /// Failed replays allowed before an item is dropped
    pub retry_attempts: u32,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_queue_size: DEFAULT_MAX_QUEUE_SIZE,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
        }
    }
}

impl QueueConfig {
    pub fn new(max_queue_size: usize, retry_attempts: u32) -> Result<Self, ConfigError> {
        Self {
            max_queue_size,
            retry_attempts,
        }
        .validated()
    }

    /// Reject limits that would make the queue unusable.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.max_queue_size == 0 {
            return Err(ConfigError::Zero {
                field: "max_queue_size",
            });
        }
        if self.retry_attempts == 0 {
            return Err(ConfigError::Zero {
                field: "retry_attempts",
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Key-value persistence interface

use thiserror::Error;

/// Errors that can occur in storage operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("unreadable value under {key:?}: {reason}")]
    Corrupt { key: String, reason: String },
}

/// String-valued key-value slot, the moral equivalent of browser local storage.
///
/// Implementations must be safe to share across threads; the queue calls
/// them from whichever task performs the mutation.
pub trait KeyValueStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Move the value under `from` to `to`, replacing any value there.
    /// The stored bytes move as they are, readable or not. Renaming a
    /// missing key is not an error.
    fn rename(&self, from: &str, to: &str) -> Result<(), StoreError>;
}

/// Keys must be non-empty, start with an alphanumeric character, and
/// contain only `[A-Za-z0-9_.-]`, so they map safely onto file names.
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = key
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric())
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
#[path = "kv_tests.rs"]
mod tests;

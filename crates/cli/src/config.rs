// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `<state_dir>/config.toml`
//!
//! ```toml
//! [queue]
//! max_queue_size = 500
//! retry_attempts = 3
//!
//! [network]
//! probe_url = "https://api.example.com/health"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use oq_core::QueueConfig;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub probe_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub queue: QueueConfig,
    pub network: NetworkConfig,
}

impl AppConfig {
    /// Parse and validate config text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut config: AppConfig = toml::from_str(text).context("invalid config")?;
        config.queue = config.queue.validated()?;
        Ok(config)
    }

    /// Load from the state directory; a missing file yields defaults.
    ///
    /// `OQ_PROBE_URL` takes precedence over `[network] probe_url`.
    pub fn load(state_dir: &Path) -> Result<Self> {
        let path = state_dir.join(CONFIG_FILE);
        let mut config = match std::fs::read_to_string(&path) {
            Ok(text) => {
                Self::parse(&text).with_context(|| format!("in {}", path.display()))?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()))
            }
        };
        if let Some(url) = crate::env::probe_url() {
            config.network.probe_url = Some(url);
        }
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Composition root: wires the queue to its production adapters.

use std::path::PathBuf;

use anyhow::Result;
use oq_adapters::{ConnectivityProbe, HttpProbe, ReqwestHttpAdapter, StaticProbe, TracedHttp};
use oq_core::SystemClock;
use oq_engine::{DropLog, OfflineQueue, OfflineQueueConfig, QueueDeps};
use oq_storage::{FileKeyValueStore, KvQueueStore};
use tracing::debug;

use crate::config::AppConfig;
use crate::lock::StateLock;

pub const DROP_LOG_FILE: &str = "dropped.log";

pub type Queue =
    OfflineQueue<TracedHttp<ReqwestHttpAdapter>, KvQueueStore<FileKeyValueStore>, SystemClock>;

/// State directory, its config, and the lock that makes this process its owner
pub struct AppContext {
    pub state_dir: PathBuf,
    pub config: AppConfig,
    _lock: StateLock,
}

impl AppContext {
    pub fn open() -> Result<Self> {
        let state_dir = crate::env::state_dir()?;
        let lock = StateLock::acquire(&state_dir)?;
        let config = AppConfig::load(&state_dir)?;
        debug!(state_dir = %state_dir.display(), "opened state directory");
        Ok(Self {
            state_dir,
            config,
            _lock: lock,
        })
    }

    /// Build the queue over the state directory.
    ///
    /// Commands that never replay pass `initially_online = false` so that
    /// enqueuing does not start a drain behind their back.
    pub fn queue(&self, initially_online: bool) -> Queue {
        OfflineQueue::new(
            QueueDeps {
                http: TracedHttp::new(ReqwestHttpAdapter::new()),
                store: KvQueueStore::new(FileKeyValueStore::new(&self.state_dir)),
            },
            SystemClock,
            OfflineQueueConfig {
                limits: self.config.queue,
                initially_online,
                drop_log: Some(DropLog::new(self.state_dir.join(DROP_LOG_FILE))),
            },
        )
    }

    /// Probe once, or honor an explicit override.
    pub async fn check_online(&self, force: Option<bool>) -> bool {
        if let Some(online) = force {
            return StaticProbe(online).check().await;
        }
        match &self.config.network.probe_url {
            Some(url) => HttpProbe::new(url.clone()).check().await,
            None => {
                debug!("no probe URL configured, assuming online");
                StaticProbe(true).check().await
            }
        }
    }
}

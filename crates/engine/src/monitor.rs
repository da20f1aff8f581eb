// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Connectivity monitoring.
//!
//! Polls a [`ConnectivityProbe`] and forwards state changes to the queue.
//! While online it also asks the queue to drain on a fixed cadence, so items
//! that failed a pass are retried without waiting for the next reconnect.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use oq_adapters::{ConnectivityProbe, HttpAdapter};
use oq_core::Clock;
use oq_storage::QueueStore;

use crate::queue::OfflineQueue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    pub probe_interval: Duration,
    pub retry_interval: Duration,
}

impl MonitorConfig {
    /// Intervals from `OQ_PROBE_INTERVAL_MS` and `OQ_RETRY_INTERVAL_MS`.
    pub fn from_env() -> Self {
        Self {
            probe_interval: crate::env::probe_interval(),
            retry_interval: crate::env::retry_interval(),
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

pub struct ConnectivityMonitor<P, H, S, C> {
    probe: P,
    queue: OfflineQueue<H, S, C>,
    config: MonitorConfig,
}

impl<P, H, S, C> ConnectivityMonitor<P, H, S, C>
where
    P: ConnectivityProbe,
    H: HttpAdapter,
    S: QueueStore,
    C: Clock,
{
    pub fn new(probe: P, queue: OfflineQueue<H, S, C>, config: MonitorConfig) -> Self {
        Self {
            probe,
            queue,
            config,
        }
    }

    /// Probe once and forward the result to the queue.
    pub async fn check_once(&self) -> bool {
        let online = self.probe.check().await;
        if online != self.queue.is_online() {
            self.queue.on_connectivity_change(online);
        }
        online
    }

    /// Run the monitor loop on the current runtime until shut down.
    pub fn spawn(self) -> MonitorHandle {
        let shutdown = Arc::new(Notify::new());
        let task = tokio::spawn(self.run(Arc::clone(&shutdown)));
        MonitorHandle { shutdown, task }
    }

    async fn run(self, shutdown: Arc<Notify>) {
        info!(
            probe_interval_ms = self.config.probe_interval.as_millis() as u64,
            retry_interval_ms = self.config.retry_interval.as_millis() as u64,
            "connectivity monitor started"
        );

        // Created outside the loop; select! re-evaluates its branches on
        // every iteration.
        let mut probe_tick = tokio::time::interval(self.config.probe_interval);
        probe_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut retry_tick = tokio::time::interval_at(
            Instant::now() + self.config.retry_interval,
            self.config.retry_interval,
        );
        retry_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.notified() => break,

                _ = probe_tick.tick() => {
                    self.check_once().await;
                }

                _ = retry_tick.tick() => {
                    if self.queue.is_online() && !self.queue.is_empty() {
                        debug!(items = self.queue.len(), "periodic retry");
                        self.queue.spawn_drain("retry");
                    }
                }
            }
        }

        info!("connectivity monitor stopped");
    }
}

/// Handle to a running monitor
pub struct MonitorHandle {
    shutdown: Arc<Notify>,
    task: JoinHandle<()>,
}

impl MonitorHandle {
    /// Stop the monitor and wait for its task to finish.
    ///
    /// A drain already in progress is left to complete on its own.
    pub async fn shutdown(self) {
        self.shutdown.notify_one();
        if let Err(e) = self.task.await {
            debug!(error = %e, "monitor task ended abnormally");
        }
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;

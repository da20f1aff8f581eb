// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Offline request queue.
//!
//! Buffers outgoing write requests while offline and replays them in
//! submission order once connectivity returns.
//!
//! Item lifecycle:
//!
//! ```text
//! PENDING --(replay ok)--------------------------> REMOVED
//! PENDING --(replay failed, retries < limit)-----> PENDING(retries + 1)
//! PENDING --(replay failed, retries reach limit)-> REMOVED (dropped, logged)
//! ```
//!
//! Queue lifecycle: `IDLE -> DRAINING -> IDLE`. The `draining` flag is the
//! only mutual exclusion; a drain requested while one is running is a no-op.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use oq_adapters::{HttpAdapter, HttpError, HttpResponse};
use oq_core::{
    Clock, DrainReport, ItemId, QueueConfig, QueueItem, QueueStatus, RequestSpec, SkipReason,
    SystemClock,
};
use oq_storage::QueueStore;

use crate::drop_log::DropLog;

/// Queue adapter dependencies
pub struct QueueDeps<H, S> {
    pub http: H,
    pub store: S,
}

/// Manager settings
#[derive(Debug, Clone, Default)]
pub struct OfflineQueueConfig {
    pub limits: QueueConfig,
    /// Connectivity assumed until the first signal arrives
    pub initially_online: bool,
    /// Where to record terminally dropped items, if anywhere
    pub drop_log: Option<DropLog>,
}

#[derive(Debug, Default)]
struct QueueState {
    items: Vec<QueueItem>,
    online: bool,
    draining: bool,
    /// Work was enqueued while a pass was running
    rerun: bool,
    /// Connectivity came back while a pass was running
    reconnected: bool,
}

struct Shared<H, S, C> {
    http: H,
    store: S,
    clock: C,
    config: OfflineQueueConfig,
    state: Mutex<QueueState>,
}

/// Handle to an offline queue. Clones share the same queue.
pub struct OfflineQueue<H, S, C = SystemClock> {
    inner: Arc<Shared<H, S, C>>,
}

impl<H, S, C> Clone for OfflineQueue<H, S, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Items attempted by one pass, captured when the pass starts
type Batch = Vec<(ItemId, RequestSpec)>;

impl<H, S, C> OfflineQueue<H, S, C>
where
    H: HttpAdapter,
    S: QueueStore,
    C: Clock,
{
    /// Create a queue, loading any persisted items.
    ///
    /// A load failure is logged and the queue starts empty.
    pub fn new(deps: QueueDeps<H, S>, clock: C, config: OfflineQueueConfig) -> Self {
        let mut items = match deps.store.load() {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "failed to load persisted queue, starting empty");
                Vec::new()
            }
        };

        let max = config.limits.max_queue_size;
        if items.len() > max {
            let excess = items.len() - max;
            warn!(
                loaded = items.len(),
                max, "persisted queue exceeds capacity, evicting oldest items"
            );
            items.drain(..excess);
        }

        if !items.is_empty() {
            info!(items = items.len(), "restored offline queue");
        }

        let state = QueueState {
            items,
            online: config.initially_online,
            draining: false,
            rerun: false,
            reconnected: false,
        };

        Self {
            inner: Arc::new(Shared {
                http: deps.http,
                store: deps.store,
                clock,
                config,
                state: Mutex::new(state),
            }),
        }
    }

    /// Buffer a request for replay. Never fails.
    ///
    /// At capacity the oldest item is evicted first. When online, a drain
    /// is started in the background without waiting for it.
    pub fn enqueue(&self, request: RequestSpec) -> ItemId {
        let now = self.inner.clock.now();
        let id = ItemId::generate(self.inner.clock.epoch_ms());
        let max = self.inner.config.limits.max_queue_size;

        let start_drain = {
            let mut state = self.inner.state.lock();
            while state.items.len() >= max && !state.items.is_empty() {
                let evicted = state.items.remove(0);
                warn!(
                    evicted = %evicted.id,
                    url = %evicted.request_spec.url,
                    max,
                    "queue full, evicting oldest request"
                );
            }

            info!(
                id = %id,
                method = %request.method,
                url = %request.url,
                "request queued"
            );
            state
                .items
                .push(QueueItem::new(id.clone(), now, request));
            self.persist(&state.items);

            if state.draining {
                state.rerun = true;
            }
            state.online && !state.draining
        };

        if start_drain {
            self.spawn_drain("enqueue");
        }
        id
    }

    /// Connectivity notification from the environment.
    ///
    /// Coming online starts a drain, or, when a pass is already running,
    /// makes that drain finish with a full pass over the queue. Going offline
    /// only records the state; a pass already in flight keeps going and its
    /// replays fail naturally.
    pub fn on_connectivity_change(&self, online: bool) {
        let (was_online, draining) = {
            let mut state = self.inner.state.lock();
            let was_online = std::mem::replace(&mut state.online, online);
            if !was_online && online && state.draining {
                state.reconnected = true;
            }
            (was_online, state.draining)
        };

        match (was_online, online) {
            (false, true) if draining => {
                info!("connectivity restored mid-drain, queue will be retried");
            }
            (false, true) => {
                info!("connectivity restored");
                self.spawn_drain("reconnect");
            }
            (true, false) => info!("connectivity lost"),
            _ => debug!(online, "connectivity unchanged"),
        }
    }

    pub fn is_online(&self) -> bool {
        self.inner.state.lock().online
    }

    pub fn is_draining(&self) -> bool {
        self.inner.state.lock().draining
    }

    /// Replay every queued item once, oldest first.
    ///
    /// No-op when a pass is already running, when offline, or when the
    /// queue is empty. Items are replayed one at a time; a failure never
    /// stops the pass. Items enqueued during the pass get a follow-up pass
    /// of their own before the drain finishes. A reconnect during the pass
    /// makes the follow-up cover every remaining item.
    pub async fn drain(&self) -> DrainReport {
        let mut batch = match self.begin_drain() {
            Ok(batch) => batch,
            Err(reason) => {
                debug!(%reason, "drain skipped");
                return DrainReport::skipped(reason);
            }
        };

        info!(items = batch.len(), "drain started");
        let mut attempted: HashSet<ItemId> = HashSet::new();
        let mut report = DrainReport::default();

        loop {
            attempted.extend(batch.iter().map(|(id, _)| id.clone()));
            let pass = self.run_pass(batch).await;
            report.merge(pass);

            match self.next_batch(&attempted) {
                Some(next) => {
                    debug!(items = next.len(), "follow-up pass");
                    batch = next;
                }
                None => break,
            }
        }

        info!(
            replayed = report.replayed.len(),
            retained = report.retained.len(),
            dropped = report.dropped.len(),
            remaining = self.inner.state.lock().items.len(),
            "drain finished"
        );
        report
    }

    /// Read-only snapshot for status displays.
    pub fn status(&self) -> QueueStatus {
        let state = self.inner.state.lock();
        QueueStatus {
            is_online: state.online,
            queue_size: state.items.len(),
            is_syncing: state.draining,
            items: state.items.iter().map(QueueItem::summary).collect(),
        }
    }

    /// Current items in queue order.
    pub fn items(&self) -> Vec<QueueItem> {
        self.inner.state.lock().items.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.state.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every item and persist the empty queue.
    ///
    /// Returns the number of items removed.
    pub fn clear(&self) -> usize {
        let mut state = self.inner.state.lock();
        let removed = state.items.len();
        state.items.clear();
        self.persist(&state.items);
        info!(removed, "queue cleared");
        removed
    }

    /// Full queue contents as pretty-printed JSON, for troubleshooting.
    pub fn export_json(&self) -> String {
        let items = self.items();
        serde_json::to_string_pretty(&items).unwrap_or_else(|e| {
            warn!(error = %e, "failed to serialize queue export");
            "[]".to_string()
        })
    }

    pub(crate) fn spawn_drain(&self, trigger: &'static str) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let queue = self.clone();
                handle.spawn(async move {
                    queue.drain().await;
                });
            }
            Err(_) => debug!(trigger, "no async runtime, drain deferred"),
        }
    }

    fn begin_drain(&self) -> Result<Batch, SkipReason> {
        let mut state = self.inner.state.lock();
        if state.draining {
            return Err(SkipReason::AlreadyDraining);
        }
        if !state.online {
            return Err(SkipReason::Offline);
        }
        if state.items.is_empty() {
            return Err(SkipReason::Empty);
        }
        state.draining = true;
        state.rerun = false;
        state.reconnected = false;
        Ok(snapshot(state.items.iter()))
    }

    /// Items enqueued during the drain that have not been attempted yet,
    /// or every remaining item after a reconnect. Clears `draining` when
    /// there is nothing more to do.
    fn next_batch(&self, attempted: &HashSet<ItemId>) -> Option<Batch> {
        let mut state = self.inner.state.lock();
        let rerun = std::mem::take(&mut state.rerun);
        let reconnected = std::mem::take(&mut state.reconnected);
        if state.online && (rerun || reconnected) {
            let next = if reconnected {
                snapshot(state.items.iter())
            } else {
                snapshot(state.items.iter().filter(|i| !attempted.contains(&i.id)))
            };
            if !next.is_empty() {
                return Some(next);
            }
        }
        state.draining = false;
        None
    }

    async fn run_pass(&self, batch: Batch) -> DrainReport {
        let mut report = DrainReport::default();
        let mut finished: HashSet<ItemId> = HashSet::new();

        for (id, request) in batch {
            let result = self.inner.http.send(&request).await;
            self.apply_outcome(id, result, &mut finished, &mut report);
        }

        let mut state = self.inner.state.lock();
        state.items.retain(|item| !finished.contains(&item.id));
        self.persist(&state.items);
        report
    }

    fn apply_outcome(
        &self,
        id: ItemId,
        result: Result<HttpResponse, HttpError>,
        finished: &mut HashSet<ItemId>,
        report: &mut DrainReport,
    ) {
        let retry_attempts = self.inner.config.limits.retry_attempts;
        let dropped = {
            let mut state = self.inner.state.lock();
            let Some(item) = state.items.iter_mut().find(|i| i.id == id) else {
                debug!(id = %id, "item left the queue during replay, ignoring outcome");
                return;
            };

            match result {
                Ok(response) => {
                    debug!(id = %id, status = response.status, "replay succeeded");
                    finished.insert(id.clone());
                    report.replayed.push(id);
                    None
                }
                Err(e) => {
                    if item.record_failure(e.to_string(), retry_attempts) {
                        error!(
                            id = %id,
                            url = %item.request_spec.url,
                            retries = item.retries,
                            error = %e,
                            retryable = e.is_retryable(),
                            "retry budget exhausted, dropping request"
                        );
                        finished.insert(id.clone());
                        report.dropped.push(id);
                        Some(item.clone())
                    } else {
                        warn!(
                            id = %id,
                            retries = item.retries,
                            retry_attempts,
                            error = %e,
                            retryable = e.is_retryable(),
                            "replay failed, will retry"
                        );
                        report.retained.push(id);
                        None
                    }
                }
            }
        };

        if let (Some(item), Some(log)) = (dropped, &self.inner.config.drop_log) {
            log.append(self.inner.clock.now(), &item);
        }
    }

    fn persist(&self, items: &[QueueItem]) {
        if let Err(e) = self.inner.store.save(items) {
            warn!(
                error = %e,
                items = items.len(),
                "failed to persist queue, keeping in-memory state"
            );
        }
    }
}

fn snapshot<'a>(items: impl Iterator<Item = &'a QueueItem>) -> Batch {
    items
        .map(|i| (i.id.clone(), i.request_spec.clone()))
        .collect()
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `oq run` - Keep the queue draining while connectivity comes and goes

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use oq_adapters::{HttpProbe, StaticProbe};
use oq_core::RequestSpec;
use oq_engine::{ConnectivityMonitor, MonitorConfig, MonitorHandle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::commands::NetworkArgs;
use crate::context::{AppContext, Queue};
use crate::output::{print_json, OutputFormat};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Enqueue newline-delimited request JSON from stdin; exit at end of input
    #[arg(long)]
    pub stdin: bool,

    #[command(flatten)]
    pub network: NetworkArgs,
}

pub async fn handle(args: RunArgs, ctx: &AppContext, format: OutputFormat) -> Result<()> {
    let force = args.network.force();
    let online = ctx.check_online(force).await;
    let queue = ctx.queue(online);
    info!(items = queue.len(), online, "offline queue running");

    // Restored items get their pass before new input is read
    queue.drain().await;
    let monitor = spawn_monitor(ctx, &queue, force);

    let mut enqueued = 0usize;
    if args.stdin {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            tokio::select! {
                line = lines.next_line() => match line {
                    Ok(Some(line)) => {
                        if enqueue_line(&queue, &line) {
                            enqueued += 1;
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        warn!(error = %e, "failed to read stdin");
                        break;
                    }
                },
                _ = tokio::signal::ctrl_c() => break,
            }
        }
        settle(&queue).await;
    } else {
        tokio::signal::ctrl_c().await?;
    }

    monitor.shutdown().await;
    // Let an in-flight pass record its outcomes before exiting
    settle(&queue).await;

    let status = queue.status();
    info!(enqueued, remaining = status.queue_size, "offline queue stopped");
    match format {
        OutputFormat::Text => println!(
            "Enqueued {}, {} item(s) remaining",
            enqueued, status.queue_size
        ),
        OutputFormat::Json => print_json(&serde_json::json!({
            "enqueued": enqueued,
            "queueSize": status.queue_size,
        }))?,
    }
    Ok(())
}

fn spawn_monitor(ctx: &AppContext, queue: &Queue, force: Option<bool>) -> MonitorHandle {
    let config = MonitorConfig::from_env();
    match (force, &ctx.config.network.probe_url) {
        (Some(online), _) => {
            ConnectivityMonitor::new(StaticProbe(online), queue.clone(), config).spawn()
        }
        (None, Some(url)) => {
            info!(url = %url, "probing connectivity");
            ConnectivityMonitor::new(HttpProbe::new(url.clone()), queue.clone(), config).spawn()
        }
        (None, None) => {
            ConnectivityMonitor::new(StaticProbe(true), queue.clone(), config).spawn()
        }
    }
}

/// Parse one line of request JSON and enqueue it. Blank lines are skipped.
fn enqueue_line(queue: &Queue, line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() {
        return false;
    }
    match serde_json::from_str::<RequestSpec>(line) {
        Ok(request) => {
            queue.enqueue(request);
            true
        }
        Err(e) => {
            warn!(error = %e, "skipping invalid request line");
            false
        }
    }
}

/// Wait until no pass is running and, while online, every item has been
/// attempted at least once. Drains started by `enqueue` cover new items.
async fn settle(queue: &Queue) {
    loop {
        tokio::task::yield_now().await;
        let pending = queue.is_online() && queue.items().iter().any(|i| i.retries == 0);
        if !queue.is_draining() && !pending {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

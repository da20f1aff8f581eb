// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `oq status` - Connectivity and queue contents

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use oq_core::{format_age, QueueStatus};

use crate::color;
use crate::context::AppContext;
use crate::output::{print_json, OutputFormat};
use crate::table::{Column, Table};

pub async fn handle(ctx: &AppContext, format: OutputFormat) -> Result<()> {
    let online = ctx.check_online(None).await;
    let status = ctx.queue(online).status();

    match format {
        OutputFormat::Text => {
            let mut out = std::io::stdout().lock();
            render(&status, Utc::now(), Table::new, &mut out);
        }
        OutputFormat::Json => print_json(&status)?,
    }
    Ok(())
}

/// Header line, then one row per item (or a note when empty).
pub(crate) fn render(
    status: &QueueStatus,
    now: DateTime<Utc>,
    make_table: impl FnOnce(Vec<Column>) -> Table,
    out: &mut impl Write,
) {
    let connectivity = if status.is_online { "online" } else { "offline" };
    let syncing = if status.is_syncing { "syncing" } else { "idle" };
    let _ = writeln!(
        out,
        "{} {}  {} {}  {} {}",
        color::header("Network:"),
        color::status(connectivity),
        color::header("Queued:"),
        status.queue_size,
        color::header("Sync:"),
        color::status(syncing),
    );

    if status.items.is_empty() {
        let _ = writeln!(out, "\nQueue is empty");
        return;
    }

    let mut table = make_table(vec![
        Column::muted("ID").with_max(24),
        Column::left("METHOD"),
        Column::left("URL").with_max(60),
        Column::right("RETRIES"),
        Column::left("AGE"),
        Column::left("LAST ERROR"),
    ]);
    for item in &status.items {
        table.row(vec![
            item.id.to_string(),
            item.method.to_string(),
            item.url.clone(),
            item.retries.to_string(),
            format_age(now, item.timestamp),
            item.last_error.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    let _ = writeln!(out);
    table.render(out);
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `oq drain` - Run one replay pass now

use anyhow::Result;
use clap::Args;
use oq_core::DrainReport;

use crate::color;
use crate::commands::NetworkArgs;
use crate::context::AppContext;
use crate::output::{print_json, OutputFormat};

#[derive(Args, Debug)]
pub struct DrainArgs {
    #[command(flatten)]
    pub network: NetworkArgs,
}

pub async fn handle(args: DrainArgs, ctx: &AppContext, format: OutputFormat) -> Result<()> {
    let online = ctx.check_online(args.network.force()).await;
    let queue = ctx.queue(online);
    let report = queue.drain().await;

    match format {
        OutputFormat::Text => println!("{}", summary(&report, queue.len())),
        OutputFormat::Json => print_json(&report)?,
    }
    Ok(())
}

pub(crate) fn summary(report: &DrainReport, remaining: usize) -> String {
    if let Some(reason) = report.skipped {
        return format!("Nothing replayed: {}", reason);
    }
    format!(
        "{} {}, {} {}, {} {} ({} remaining)",
        color::status("replayed"),
        report.replayed.len(),
        color::status("retained"),
        report.retained.len(),
        color::status("dropped"),
        report.dropped.len(),
        remaining,
    )
}

#[cfg(test)]
#[path = "drain_tests.rs"]
mod tests;

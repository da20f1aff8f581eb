// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `oq export` - Dump the full queue as JSON

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::context::AppContext;
use crate::output::{print_result, OutputFormat};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(long, short = 'O')]
    pub out: Option<PathBuf>,
}

pub fn handle(args: ExportArgs, ctx: &AppContext, format: OutputFormat) -> Result<()> {
    let queue = ctx.queue(false);
    let json = queue.export_json();

    let Some(path) = args.out else {
        // Already JSON; --output does not change it
        println!("{}", json);
        return Ok(());
    };

    std::fs::write(&path, format!("{}\n", json))
        .with_context(|| format!("failed to write {}", path.display()))?;
    let count = queue.len();
    print_result(
        format,
        &format!("Exported {} item(s) to {}", count, path.display()),
        &serde_json::json!({ "path": path, "items": count }),
    )
}

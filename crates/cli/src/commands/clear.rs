// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `oq clear` - Discard every queued request

use anyhow::Result;

use crate::context::AppContext;
use crate::output::{print_result, OutputFormat};

pub fn handle(ctx: &AppContext, format: OutputFormat) -> Result<()> {
    let removed = ctx.queue(false).clear();
    print_result(
        format,
        &format!("Removed {} item(s)", removed),
        &serde_json::json!({ "removed": removed }),
    )
}

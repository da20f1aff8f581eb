// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `oq enqueue` - Buffer a request for later replay

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use oq_core::{HttpMethod, RequestSpec};

use crate::context::AppContext;
use crate::output::{print_result, OutputFormat};

#[derive(Args, Debug)]
pub struct EnqueueArgs {
    /// Absolute http(s) URL to replay against
    #[arg(long)]
    pub url: String,

    /// HTTP method
    #[arg(short = 'X', long, default_value = "POST")]
    pub method: HttpMethod,

    /// Request header, repeatable (e.g. -H 'Content-Type: application/json')
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Request body, sent verbatim
    #[arg(long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the request body from a file
    #[arg(long)]
    pub body_file: Option<PathBuf>,
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    RequestSpec::parse_header_line(s)
        .ok_or_else(|| format!("invalid header `{s}`: expected 'Name: value'"))
}

/// Turn arguments into a request, reading `--body-file` if given.
pub fn build_request(args: EnqueueArgs) -> Result<RequestSpec> {
    if !(args.url.starts_with("http://") || args.url.starts_with("https://")) {
        bail!("invalid URL '{}': must start with http:// or https://", args.url);
    }

    let mut request = RequestSpec::new(args.method, args.url);
    for (name, value) in args.headers {
        request = request.header(name, value);
    }

    let body = match (args.body, args.body_file) {
        (Some(body), _) => Some(body),
        (None, Some(path)) => Some(
            std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read body file {}", path.display()))?,
        ),
        (None, None) => None,
    };
    if let Some(body) = body {
        request = request.body(body);
    }
    Ok(request)
}

pub fn handle(args: EnqueueArgs, ctx: &AppContext, format: OutputFormat) -> Result<()> {
    let request = build_request(args)?;
    let queue = ctx.queue(false);
    let id = queue.enqueue(request);

    print_result(
        format,
        id.as_str(),
        &serde_json::json!({ "id": id, "queueSize": queue.len() }),
    )
}

#[cfg(test)]
#[path = "enqueue_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! oq - offline request queue

mod color;
mod commands;
mod config;
mod context;
mod env;
mod lock;
mod logging;
mod output;
mod table;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{clear, drain, enqueue, export, run, status};
use output::OutputFormat;

use crate::context::AppContext;

#[derive(Parser)]
#[command(
    name = "oq",
    version,
    about = "Offline request queue - buffer writes while offline, replay them in order when back online"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Queue a request for replay
    Enqueue(enqueue::EnqueueArgs),
    /// Show connectivity and queued requests
    Status,
    /// Dump the full queue as JSON
    Export(export::ExportArgs),
    /// Discard every queued request
    Clear,
    /// Run one replay pass now
    Drain(drain::DrainArgs),
    /// Monitor connectivity and replay until interrupted
    Run(run::RunArgs),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped (common when thiserror variants embed their
/// source). Otherwise the full chain is rendered so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let ctx = AppContext::open()?;

    // File logging for the long-running mode; stderr otherwise
    let _log_guard = match &command {
        Commands::Run(_) => Some(logging::init_file(&ctx.state_dir)?),
        _ => {
            logging::init_stderr();
            None
        }
    };

    match command {
        Commands::Enqueue(args) => enqueue::handle(args, &ctx, format)?,
        Commands::Status => status::handle(&ctx, format).await?,
        Commands::Export(args) => export::handle(args, &ctx, format)?,
        Commands::Clear => clear::handle(&ctx, format)?,
        Commands::Drain(args) => drain::handle(args, &ctx, format).await?,
        Commands::Run(args) => run::handle(args, &ctx, format).await?,
    }

    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print `text` in text mode, or `json` in JSON mode.
pub fn print_result<T: Serialize>(format: OutputFormat, text: &str, json: &T) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", text),
        OutputFormat::Json => print_json(json)?,
    }
    Ok(())
}

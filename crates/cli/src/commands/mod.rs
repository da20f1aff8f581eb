// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod clear;
pub mod drain;
pub mod enqueue;
pub mod export;
pub mod run;
pub mod status;

use clap::Args;

/// Connectivity override shared by `drain` and `run`
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct NetworkArgs {
    /// Skip the probe and treat the network as reachable
    #[arg(long, conflicts_with = "offline")]
    pub online: bool,

    /// Skip the probe and treat the network as unreachable
    #[arg(long)]
    pub offline: bool,
}

impl NetworkArgs {
    pub fn force(&self) -> Option<bool> {
        match (self.online, self.offline) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

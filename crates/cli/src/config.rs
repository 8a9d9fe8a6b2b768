// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::Parser;

use crate::command::Command;

/// Invoicing and cargo-manifest client for the billing API.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
pub struct Config {
    /// Base URL of the remote API.
    #[arg(long, env = "FOLIO_API_URL", default_value = "http://127.0.0.1:8000/api")]
    pub api_url: String,

    /// Directory for persisted session state.
    #[arg(long, env = "FOLIO_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    /// Log format (json or text).
    #[arg(long, env = "FOLIO_LOG_FORMAT", default_value = "text")]
    pub log_format: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "FOLIO_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

impl Config {
    /// Resolve the state directory.
    ///
    /// Checks the explicit flag, then `$XDG_STATE_HOME/folio`, then
    /// `$HOME/.local/state/folio`, then falls back to `.folio`.
    pub fn state_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.state_dir {
            return dir.clone();
        }
        if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
            return PathBuf::from(xdg).join("folio");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local/state/folio");
        }
        PathBuf::from(".folio")
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

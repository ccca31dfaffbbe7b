// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --set KEY=VAL     ← Direct config override (can repeat)
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (defaults to debug)
//! --log-file FILE   ← Also log to FILE
//!
//! Precedence: --set > env > --config > wordma.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append, global = true)]
    pub configs: Vec<PathBuf>,

    /// Sets an option, such as 'theme.reconcile=keep-new'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", action = clap::ArgAction::Append, global = true)]
    pub options: Vec<String>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, only used with --log-file.
    #[arg(long = "file-log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Console level, `warn` unless given.
    #[must_use]
    pub fn console_level(&self) -> LogLevel {
        self.log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(LogLevel::WARN)
    }

    /// File level, `debug` unless given.
    #[must_use]
    pub fn file_level(&self) -> LogLevel {
        self.file_log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(LogLevel::DEBUG)
    }

    /// Splits `--set` values into `(key, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns the offending option if it has no `=` or an empty key.
    pub fn overrides(&self) -> Result<Vec<(String, String)>, String> {
        self.options
            .iter()
            .map(|option| match option.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => {
                    Ok((key.trim().to_string(), value.trim().to_string()))
                }
                _ => Err(option.clone()),
            })
            .collect()
    }
}

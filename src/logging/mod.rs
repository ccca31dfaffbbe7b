// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Diagnostic logging using the `tracing` ecosystem.
//!
//! User-facing messages go through [`crate::console`]; tracing carries the
//! diagnostic trail (git invocations, update state transitions), which is
//! why the console layer defaults to `warn`.
//!
//! ```text
//! init_logging(&LogConfig)
//!        |
//!        v
//!    registry
//!    |       |
//!    v       v
//! Console   File (optional, appended)
//! stderr    non_blocking
//! no time   timestamps, targets
//!        |
//!        v
//!    LogGuard (flush on drop)
//!
//! LogLevel:  0=off  1=error  2=warn  3=info  4=debug  5=trace
//! ```

use std::fmt;
use std::fs::OpenOptions;
use std::path::Path;

use anyhow::Context;
use bon::Builder;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt as tracing_fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

/// Targets raised above `warn` by [`LogLevel::filter`]: the library and the
/// binary. Dependencies (reqwest, hyper) stay at `warn`.
const OWN_TARGETS: [&str; 2] = ["wordma_rs", "wordma"];

/// Verbosity from `-l` / `--file-log-level`, 0 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogLevel(u8);

impl Default for LogLevel {
    fn default() -> Self {
        Self::WARN
    }
}

impl LogLevel {
    pub const SILENT: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);

    /// `None` above 5.
    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        if level <= Self::TRACE.0 {
            Some(Self(level))
        } else {
            None
        }
    }

    /// `tracing` directive name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.0 {
            0 => "off",
            1 => "error",
            2 => "warn",
            3 => "info",
            4 => "debug",
            _ => "trace",
        }
    }

    /// `EnvFilter` directives for this level.
    ///
    /// Up to `warn` the level applies to everything; above it only this
    /// crate's targets get louder.
    #[must_use]
    pub fn filter(self) -> String {
        if self <= Self::WARN {
            return self.name().to_string();
        }
        let mut directives = vec![Self::WARN.name().to_string()];
        directives.extend(OWN_TARGETS.iter().map(|t| format!("{t}={}", self.name())));
        directives.join(",")
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Logging setup derived from the global CLI options.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::WARN)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::DEBUG)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }
}

/// Keeps the file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// The log file, if any, is appended to so that consecutive runs (an
/// update, then its retry) end up in one trail.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
///
/// # Example
///
/// ```no_run
/// use wordma_rs::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::WARN)
///     .with_log_file("wordma.log".to_string())
///     .build();
///
/// let _guard = init_logging(&config)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    // stderr so that piped command output stays clean
    let console_layer = tracing_fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_filter(EnvFilter::new(config.console_level().filter()));

    let (file_layer, file_guard) = match config.log_file() {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(Path::new(path))?);
            let layer = tracing_fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_filter(EnvFilter::new(config.file_level().filter()));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

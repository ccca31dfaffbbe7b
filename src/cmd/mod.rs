// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   init, add, install, script (dev/build), update,
//!   deploy, doctor, version, config
//! ```
//!
//! Handlers print through a [`Report`]. When a failure has already been
//! explained (with hints) they return [`bail_out`] so `main` only sets the
//! exit code.

pub mod add;
pub mod config;
pub mod deploy;
pub mod doctor;
pub mod init;
pub mod install;
pub mod script;
pub mod update;
pub mod version;


use crate::console::Report;
use crate::core::process::builder::ProcessBuilder;
use crate::core::tools::Tool;
use crate::error::{WordmaError, bail_out};
use crate::project::ThemeEntry;

/// Resolves `tool`, or reports it as missing with its install hint.
///
/// # Errors
///
/// Returns an already-reported error if the tool is not on PATH.
pub(crate) fn require_tool(
    tool: Tool,
    purpose: &str,
    reporter: &dyn Report,
) -> Result<ProcessBuilder, WordmaError> {
    tool.require().map_err(|e| {
        reporter.error(&format!("{tool} is required for {purpose}"));
        reporter.detail(tool.install_hint());
        bail_out(e.to_string())
    })
}

/// Prints `Available themes:` followed by one line per theme.
pub(crate) fn report_available_themes(themes: &[String], reporter: &dyn Report) {
    reporter.info("Available themes:");
    if themes.is_empty() {
        reporter.detail("No themes found");
    }
    for theme in themes {
        reporter.detail(&format!("- {theme}"));
    }
}

/// Theme names for [`report_available_themes`], without git annotations.
pub(crate) fn theme_names(themes: &[ThemeEntry]) -> Vec<String> {
    themes.iter().map(|t| t.name.clone()).collect()
}

/// Prints `Next steps:` and the numbered steps.
pub(crate) fn report_next_steps(steps: &[String], reporter: &dyn Report) {
    reporter.info("Next steps:");
    for (i, step) in steps.iter().enumerate() {
        reporter.detail(&format!("{}. {step}", i + 1));
    }
}

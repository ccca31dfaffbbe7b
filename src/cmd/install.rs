// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `wordma install`.

use anyhow::Context;

use crate::cmd::require_tool;
use crate::console::Report;
use crate::core::tools::Tool;
use crate::error::{Result, bail_out};
use crate::project::{PACKAGE_JSON, find_project_root};

/// Runs `pnpm install` in the project root.
///
/// # Errors
///
/// Returns an error if pnpm is missing, there is no `package.json`, or the
/// install fails.
pub async fn run_install_command(reporter: &dyn Report) -> Result<()> {
    let pnpm = require_tool(Tool::Pnpm, "installing dependencies", reporter)?;

    let root = find_project_root().context("failed to find project root")?;
    if !root.join(PACKAGE_JSON).is_file() {
        reporter.error("No package.json found in project root");
        reporter.info("Make sure you are in a wordma project directory");
        return Err(bail_out("package.json not found").into());
    }

    reporter.info("Installing dependencies with pnpm...");
    pnpm.arg("install")
        .cwd(&root)
        .inherit_stdio()
        .run()
        .await
        .context("failed to install dependencies")?;

    reporter.success("Dependencies installed successfully!");
    Ok(())
}

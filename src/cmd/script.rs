// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `wordma dev <theme>` and `wordma build <theme>`.

use std::fmt;

use anyhow::Context;

use crate::cmd::{report_available_themes, require_tool, theme_names};
use crate::console::Report;
use crate::core::tools::Tool;
use crate::error::{Result, bail_out};
use crate::project::{PACKAGE_JSON, THEMES_DIR, find_project_root, list_themes};

/// Package script run inside a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeScript {
    Dev,
    Build,
}

impl ThemeScript {
    /// Name of the `package.json` script.
    #[must_use]
    pub const fn script(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Build => "build",
        }
    }

    const fn purpose(self) -> &'static str {
        match self {
            Self::Dev => "running the development server",
            Self::Build => "building themes",
        }
    }
}

impl fmt::Display for ThemeScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.script())
    }
}

/// Runs `pnpm run <script>` inside `themes/<theme>`.
///
/// # Errors
///
/// Returns an error if pnpm is missing, the theme or its `package.json` does
/// not exist, or the script fails.
pub async fn run_script_command(
    script: ThemeScript,
    theme: &str,
    reporter: &dyn Report,
) -> Result<()> {
    let pnpm = require_tool(Tool::Pnpm, script.purpose(), reporter)?;

    let root = find_project_root().context("failed to find project root")?;
    let theme_path = root.join(THEMES_DIR).join(theme);
    if !theme_path.is_dir() {
        reporter.error(&format!("Theme '{theme}' not found in themes directory"));
        report_available_themes(&theme_names(&list_themes(&root)), reporter);
        return Err(bail_out(format!("theme '{theme}' not found")).into());
    }
    if !theme_path.join(PACKAGE_JSON).is_file() {
        reporter.error(&format!("No package.json found in theme '{theme}'"));
        return Err(bail_out(format!("theme '{theme}' has no package.json")).into());
    }

    match script {
        ThemeScript::Dev => reporter.info(&format!("Starting development server for theme '{theme}'...")),
        ThemeScript::Build => reporter.info(&format!("Building theme '{theme}'...")),
    }

    pnpm.args(["run", script.script()])
        .cwd(&theme_path)
        .inherit_stdio()
        .run()
        .await
        .with_context(|| format!("failed to run '{script}' script for theme '{theme}'"))?;

    if script == ThemeScript::Build {
        reporter.success(&format!("Theme '{theme}' built successfully!"));
    }
    Ok(())
}

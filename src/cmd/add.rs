// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `wordma add theme <git-url>`.

use std::sync::LazyLock;

use anyhow::Context;
use regex::Regex;
use tracing::debug;

use crate::cmd::{report_next_steps, require_tool};
use crate::config::Config;
use crate::console::Report;
use crate::core::tools::Tool;
use crate::error::{FsError, GitError, Result, bail_out};
use crate::git;
use crate::project::{THEMES_DIR, find_project_root};
use crate::utility::fs::copy::remove_dir_if_exists;

/// `https://host/path` or `git://host/path`.
static URL_FORM: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:https|git)://[^/ \t]+/[^ \t]+$").ok());

/// `git@host:path`.
static SCP_FORM: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^git@[^: \t]+:[^ \t]+$").ok());

/// Whether `url` is a repository URL `add theme` accepts.
#[must_use]
pub fn is_valid_git_url(url: &str) -> bool {
    URL_FORM
        .iter()
        .chain(SCP_FORM.iter())
        .any(|re| re.is_match(url))
}

/// Theme name for a repository URL: its last path segment without `.git`.
///
/// # Errors
///
/// Returns [`GitError::InvalidUrl`] if the URL is not accepted or names no
/// repository.
pub fn theme_name_from_url(url: &str) -> std::result::Result<String, GitError> {
    let invalid = |reason: &str| GitError::InvalidUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };
    if !is_valid_git_url(url) {
        return Err(invalid("expected https://, git:// or git@host:path"));
    }

    let path = url
        .split_once("://")
        .map_or_else(|| url.replacen(':', "/", 1), |(_, rest)| rest.to_string());
    let name = path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .trim_end_matches(".git");

    if name.is_empty() || name == "." || name == ".." {
        return Err(invalid("no repository name in URL"));
    }
    Ok(name.to_string())
}

/// Clones a theme into `themes/<name>`.
///
/// # Errors
///
/// Returns an error if git is missing, the URL is invalid, the theme already
/// exists, or the clone fails.
pub async fn run_add_theme_command(
    git_url: &str,
    config: &Config,
    reporter: &dyn Report,
) -> Result<()> {
    require_tool(Tool::Git, "adding themes", reporter)?;

    let name = match theme_name_from_url(git_url) {
        Ok(name) => name,
        Err(e) => {
            reporter.error("Invalid git URL format");
            reporter.info("Examples of valid URLs:");
            reporter.detail("- https://github.com/user/theme.git");
            reporter.detail("- git@github.com:user/theme.git");
            return Err(bail_out(e.to_string()).into());
        }
    };

    let root = find_project_root().context("failed to find project root")?;
    let themes_dir = root.join(THEMES_DIR);
    if !themes_dir.is_dir() {
        std::fs::create_dir_all(&themes_dir).map_err(|e| FsError::io(&themes_dir, e))?;
        reporter.info("Created themes directory");
    }

    let theme_path = themes_dir.join(&name);
    if theme_path.exists() {
        reporter.error(&format!("Theme '{name}' already exists in themes directory"));
        return Err(bail_out(format!("theme '{name}' already exists")).into());
    }

    reporter.info(&format!("Adding theme '{name}' from {git_url}..."));
    git::cmd::clone(git_url, &theme_path, None).await?;

    if !config.theme.keep_git_on_add {
        let git_dir = theme_path.join(".git");
        debug!(path = %git_dir.display(), "removing theme history");
        match remove_dir_if_exists(&git_dir) {
            Ok(()) => reporter.info("Removed theme .git directory"),
            Err(e) => reporter.warning(&format!("Failed to remove theme .git directory: {e}")),
        }
    }

    reporter.success(&format!("Theme '{name}' added successfully!"));
    report_next_steps(
        &[
            "wordma install (if not already done)".to_string(),
            format!("wordma dev {name}"),
        ],
        reporter,
    );
    Ok(())
}

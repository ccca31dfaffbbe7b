// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scaffolding git commands whose output belongs on the terminal.
//!
//! ```text
//! clone() / init_repo() --> ProcessBuilder(git).inherit_stdio()
//! ```

use std::path::Path;

use anyhow::Context;

use crate::core::tools::Tool;
use crate::error::{GitError, Result};

/// Clone `url` into `dest`, optionally checking out `branch`.
///
/// Progress is shown on the terminal.
///
/// # Errors
///
/// Returns an error if git is missing or the clone fails.
pub async fn clone(url: &str, dest: &Path, branch: Option<&str>) -> Result<()> {
    let mut git = Tool::Git
        .require()?
        .env("GCM_INTERACTIVE", "never")
        .arg("clone");
    if let Some(branch) = branch {
        git = git.args(["-b", branch]);
    }
    git.arg(url)
        .arg(dest)
        .inherit_stdio()
        .run()
        .await
        .map_err(|e| GitError::CloneFailed {
            url: url.to_string(),
            message: format!("{e:#}"),
        })?;
    Ok(())
}

/// Initialize a new repository in `path`.
///
/// # Errors
///
/// Returns an error if git is missing or `git init` fails.
pub async fn init_repo(path: &Path) -> Result<()> {
    Tool::Git
        .require()?
        .args(["init", "--quiet"])
        .cwd(path)
        .capture_stderr()
        .run()
        .await
        .with_context(|| format!("failed to initialize git repository in {}", path.display()))?;
    Ok(())
}

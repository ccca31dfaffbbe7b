// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `wordma init <name>`.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cmd::deploy::write_deploy_scaffold;
use crate::cmd::{report_next_steps, require_tool};
use crate::config::Config;
use crate::console::Report;
use crate::core::tools::Tool;
use crate::error::{FsError, Result, bail_out};
use crate::git;
use crate::utility::fs::copy::remove_dir_if_exists;

/// Absolute path of the project `name` would create when run from `cwd`.
#[must_use]
pub fn project_path(cwd: &Path, name: &str) -> PathBuf {
    let name = Path::new(name);
    if name.is_absolute() {
        name.to_path_buf()
    } else {
        cwd.join(name)
    }
}

/// Clones the blog template and prepares its deploy directory.
///
/// # Errors
///
/// Returns an error if git is missing, the target exists, or cloning or
/// initializing the deploy repository fails.
pub async fn run_init_command(name: &str, config: &Config, reporter: &dyn Report) -> Result<()> {
    require_tool(Tool::Git, "project initialization", reporter)?;

    let cwd = std::env::current_dir().context("failed to get current directory")?;
    let path = project_path(&cwd, name);
    if path.exists() {
        reporter.error(&format!("Directory '{}' already exists", path.display()));
        return Err(bail_out(format!("{} already exists", path.display())).into());
    }

    reporter.info(&format!("Initializing wordma project in '{}'...", path.display()));
    reporter.info("Cloning wordma template repository...");
    git::cmd::clone(&config.template.repo, &path, Some(&config.template.branch)).await?;
    reporter.success("Repository cloned successfully");

    let deploy_dir = path.join(&config.deploy.dir);
    let shown = config.deploy.dir.display();
    reporter.info(&format!("Initializing {shown} directory as git repository..."));
    std::fs::create_dir_all(&deploy_dir).map_err(|e| FsError::io(&deploy_dir, e))?;
    git::cmd::init_repo(&deploy_dir).await?;

    let project_name = path
        .file_name()
        .map_or_else(|| name.to_string(), |n| n.to_string_lossy().into_owned());
    write_deploy_scaffold(&deploy_dir, &project_name)?;
    reporter.success(&format!("{shown} directory initialized as git repository"));

    let template_git = path.join(".git");
    match remove_dir_if_exists(&template_git) {
        Ok(()) => reporter.info("Removed original .git directory"),
        Err(e) => reporter.warning(&format!("Failed to remove original .git directory: {e}")),
    }

    println!();
    reporter.success(&format!("Wordma project '{project_name}' initialized successfully!"));
    report_next_steps(
        &[
            format!("cd {}", path.display()),
            "wordma install".to_string(),
            "wordma dev <theme-name>".to_string(),
        ],
        reporter,
    );
    Ok(())
}

// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `wordma deploy init <git-url>` and the deploy directory scaffold.

use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::cmd::{report_next_steps, require_tool};
use crate::config::Config;
use crate::console::{Report, confirm};
use crate::core::tools::Tool;
use crate::error::{FsError, Result, bail_out};
use crate::git;
use crate::project::is_wordma_project;
use crate::utility::fs::copy::remove_dir_if_exists;

/// Ignore rules written into a fresh deploy directory.
pub const DEPLOY_GITIGNORE: &str = "\
# Temporary build directory
.temp/

# Node.js dependencies and cache
node_modules/
npm-debug.log*
yarn-debug.log*
yarn-error.log*
pnpm-debug.log*

# Build cache
.cache/
.parcel-cache/
.next/
.nuxt/

# Environment files
.env
.env.local
.env.*.local

# Editors
.vscode/
.idea/
*.swp
*.swo
*~

# OS files
.DS_Store
._*
Thumbs.db
ehthumbs.db

# Logs
*.log
logs/

# Coverage
coverage/
*.lcov

# Misc
*.tgz
tmp/
temp/
";

/// `README.md` written into a fresh deploy directory.
#[must_use]
pub fn deploy_readme(project_name: &str) -> String {
    format!(
        "# {project_name} - Deploy Directory

This directory contains the built static files for the {project_name} wordma blog.

## About

This directory is managed by the wordma CLI:
- Built files from themes are placed here
- Each theme build creates a subdirectory named after the theme
- This directory is a git repository used for deployment

## Usage

- Run `wordma build <theme-name>` to build a theme
- The built files are placed in the `<theme-name>/` subdirectory
- Deploy these files to any static hosting service (GitHub Pages, Netlify, Vercel, ...)

## Note

Do not edit files in this directory by hand; they are overwritten on the next build.
"
    )
}

/// Writes the deploy `README.md` and `.gitignore` into `dir`.
///
/// # Errors
///
/// Returns an error if either file cannot be written.
pub fn write_deploy_scaffold(dir: &Path, project_name: &str) -> std::result::Result<(), FsError> {
    let readme = dir.join("README.md");
    std::fs::write(&readme, deploy_readme(project_name)).map_err(|e| FsError::io(&readme, e))?;
    let gitignore = dir.join(".gitignore");
    std::fs::write(&gitignore, DEPLOY_GITIGNORE).map_err(|e| FsError::io(&gitignore, e))?;
    Ok(())
}

/// Replaces the deploy directory with a clone of `git_url`.
///
/// # Errors
///
/// Returns an error if the current directory is not a wordma project, git
/// is missing, the old directory cannot be removed, or the clone fails.
pub async fn run_deploy_init_command(
    git_url: &str,
    config: &Config,
    reporter: &dyn Report,
) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    if !is_wordma_project(&cwd) {
        reporter.error("Not in a wordma project directory");
        reporter.info("Please run this command in the root directory of a wordma project");
        reporter.info("(Directory should contain themes/ folder or package.json)");
        return Err(bail_out("not in a wordma project").into());
    }

    require_tool(Tool::Git, "deploy directory initialization", reporter)?;

    let deploy_dir = cwd.join(&config.deploy.dir);
    let shown = config.deploy.dir.display();
    if deploy_dir.exists() {
        reporter.warning(&format!("{shown} directory already exists"));
        reporter.info("Do you want to reinitialize it? This will remove all existing content.");
        if !confirm("Continue? (y/N): ") {
            reporter.info("Operation cancelled");
            return Ok(());
        }

        reporter.info(&format!("Removing existing {shown} directory..."));
        debug!(path = %deploy_dir.display(), "removing deploy directory");
        remove_dir_if_exists(&deploy_dir).map_err(|e| FsError::io(&deploy_dir, e))?;
    }

    reporter.info(&format!("Cloning repository from {git_url}..."));
    git::cmd::clone(git_url, &deploy_dir, None).await?;

    reporter.success("Repository cloned successfully!");
    report_next_steps(
        &[
            "wordma build <theme-name>  # Build a theme".to_string(),
            format!("cd {shown}  # Enter the deploy directory"),
            "git add .  # Stage files for deployment".to_string(),
            "git commit -m \"Deploy\"  # Commit changes".to_string(),
            "git push  # Push to the remote repository".to_string(),
        ],
        reporter,
    );
    Ok(())
}

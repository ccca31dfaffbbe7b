// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `wordma update` (self-update) and `wordma update theme <name>`.

use anyhow::Context;
use tracing::{debug, info};

use crate::build_info::BuildInfo;
use crate::cmd::{report_available_themes, report_next_steps, require_tool};
use crate::config::Config;
use crate::console::{Report, confirm};
use crate::core::tools::Tool;
use crate::error::{Result, ThemeError, WordmaError, bail_out};
use crate::git::backend::ShellBackend;
use crate::project::find_project_root;
use crate::release::install::{current_asset_name, install_update};
use crate::release::{VersionCheck, fetch_latest};
use crate::theme::{ThemeUpdater, UpdateSummary};

/// Replaces the running executable with the latest release.
///
/// # Errors
///
/// Returns an error if the release cannot be fetched, no asset exists for
/// this platform, or the download or replacement fails.
pub async fn run_self_update_command(
    build: &BuildInfo,
    config: &Config,
    reporter: &dyn Report,
) -> Result<()> {
    reporter.info("Checking for updates...");
    let release = match fetch_latest(&config.release).await {
        Ok(release) => release,
        Err(e) => {
            reporter.error(&format!("Failed to check for updates: {e}"));
            return Err(bail_out(e.to_string()).into());
        }
    };

    let check = VersionCheck::new(build.version(), release);
    reporter.detail(&format!("Current version: {}", check.current));
    reporter.detail(&format!("Latest version: {}", check.latest));

    if check.current.is_dev() {
        reporter.warning("You are using a development version.");
        reporter.info("Auto-update is not available for development builds.");
        reporter.info(&format!(
            "Please download the latest release from: {}",
            config.release.releases_page()
        ));
        return Ok(());
    }
    if !check.needs_update() {
        reporter.success("You are already using the latest version!");
        return Ok(());
    }

    reporter.info(&format!("A new version ({}) is available!", check.latest));
    if !confirm("Do you want to update? (y/N): ") {
        reporter.info("Update cancelled.");
        return Ok(());
    }

    let Some(asset) = current_asset_name() else {
        reporter.error(&format!(
            "No release is published for {}",
            BuildInfo::platform()
        ));
        reporter.info(&format!(
            "Please download a build manually from: {}",
            config.release.releases_page()
        ));
        return Err(bail_out("unsupported platform").into());
    };
    let url = config
        .release
        .asset_url(check.release.version_string(), &asset);
    let exe = std::env::current_exe().context("failed to locate the running executable")?;
    info!(url = %url, exe = %exe.display(), "installing update");

    reporter.info(&format!("Downloading version {}...", check.latest));
    if let Err(e) = install_update(&url, &exe).await {
        reporter.error(&format!("Update failed: {e:#}"));
        return Err(bail_out(e.to_string()).into());
    }

    reporter.success(&format!("Successfully updated to version {}!", check.latest));
    reporter.info("Please restart wordma to use the new version.");
    if let Some(notes) = check.release.notes() {
        println!();
        reporter.info("Release Notes:");
        println!("{notes}");
    }
    Ok(())
}

/// Updates `themes/<name>` from its remote, protecting its `config/`.
///
/// # Errors
///
/// Returns an error if git is missing, the theme cannot be updated, or any
/// step before the pull completes fails.
pub fn run_update_theme_command(
    name: &str,
    config: &Config,
    reporter: &dyn Report,
) -> Result<UpdateSummary> {
    require_tool(Tool::Git, "updating themes", reporter)?;

    let root = find_project_root().context("failed to find project root")?;
    debug!(root = %root.display(), theme = name, "updating theme");

    let mut updater = ThemeUpdater::new(ShellBackend, &config.theme.reconcile, reporter)
        .with_remote(&config.theme.remote);

    let summary = match updater.update(&root, name) {
        Ok(summary) => summary,
        Err(WordmaError::Theme(e)) => return Err(report_theme_error(*e, reporter).into()),
        Err(e) => return Err(e.into()),
    };
    debug!(state = %updater.state(), "theme update finished");

    println!();
    report_next_steps(
        &[
            "wordma install (to update dependencies if needed)".to_string(),
            format!("wordma dev {name} (to test the updated theme)"),
        ],
        reporter,
    );
    Ok(summary)
}

/// Explains the precondition failures; other errors pass through unchanged.
fn report_theme_error(error: ThemeError, reporter: &dyn Report) -> WordmaError {
    match error {
        ThemeError::NotFound { name, available } => {
            reporter.error(&format!("Theme '{name}' not found in themes directory"));
            report_available_themes(&available, reporter);
            bail_out(format!("theme '{name}' not found"))
        }
        ThemeError::NotVersionControlled { name } => {
            reporter.error(&format!("Theme '{name}' is not a git repository"));
            reporter.info("This theme cannot be updated automatically");
            reporter.info(
                "You may need to manually update it or re-add it using 'wordma add theme <git-url>'",
            );
            bail_out(format!("theme '{name}' is not a git repository"))
        }
        other => other.into(),
    }
}

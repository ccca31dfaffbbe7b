// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `wordma version`.

use colored::Colorize;

use crate::build_info::BuildInfo;
use crate::config::Config;
use crate::console::Report;
use crate::release::{VersionCheck, fetch_latest};

/// Prints the running version and compares it with the latest release.
///
/// A failed release lookup is reported; the local version is still shown.
pub async fn run_version_command(build: &BuildInfo, config: &Config, reporter: &dyn Report) {
    let release = match fetch_latest(&config.release).await {
        Ok(release) => release,
        Err(e) => {
            reporter.error(&format!("Failed to check version: {e}"));
            println!("wordma {}", build.long_version());
            return;
        }
    };
    let check = VersionCheck::new(build.version(), release);

    println!();
    println!("{}", "Wordma CLI Version Information".bold());
    println!("{}", "-".repeat(40));
    println!("Current Version: {}", check.current.to_string().cyan());
    println!("Latest Version:  {}", check.latest.to_string().green());
    println!("Platform:        {}", BuildInfo::platform());
    println!();

    if check.current.is_dev() {
        reporter.warning("You are using a development build");
        reporter.info(&format!("Release page: {}", check.release.html_url));
    } else if check.needs_update() {
        reporter.warning("A new version is available!");
        reporter.info(&format!("To update, run: {}", "wordma update".bold()));
        reporter.info(&format!("Release page: {}", check.release.html_url));
    } else {
        reporter.success("You are using the latest version");
    }
}

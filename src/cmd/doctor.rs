// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `wordma doctor`.

use tracing::debug;

use crate::console::Report;
use crate::core::tools::Tool;

/// Checks every [`Tool`] and prints its version or an install hint.
///
/// Returns the number of missing tools. A missing tool is reported, not
/// treated as a failure.
pub async fn run_doctor_command(reporter: &dyn Report) -> usize {
    reporter.info("Checking system environment...");
    println!();

    let mut missing = 0;
    for tool in Tool::ALL {
        if !tool.is_available() {
            missing += 1;
            reporter.error(&format!("{tool} is not installed"));
            reporter.detail(tool.install_hint());
            continue;
        }

        match tool.version().await {
            Ok(version) => reporter.success(&format!("{tool}: {version}")),
            Err(e) => {
                debug!(tool = tool.binary(), error = %e, "version probe failed");
                reporter.warning(&format!("{tool} is installed but version check failed"));
            }
        }
    }

    println!();
    if missing == 0 {
        reporter.success("All required tools are installed!");
    } else {
        reporter.warning(&format!(
            "{missing} required tool(s) missing. Please install them to use wordma."
        ));
    }
    missing
}

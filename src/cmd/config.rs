// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `wordma config`.

use crate::config::Config;

/// Prints the effective options, then the files they were read from.
pub fn run_config_command(config: &Config, config_files: &[String]) {
    for line in config.format_options() {
        println!("{line}");
    }

    println!();
    if config_files.is_empty() {
        println!("No configuration files loaded");
    } else {
        println!("Configuration files:");
        for line in config_files {
            println!("  {line}");
        }
    }
}

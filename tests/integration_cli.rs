// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use wordma_rs::build_info::BuildInfo;
use wordma_rs::cli::theme::{AddCommand, UpdateCommand};
use wordma_rs::cli::{Command, DeployCommand, command, try_parse_from};
use wordma_rs::logging::LogLevel;

fn info() -> BuildInfo {
    BuildInfo::new("0.3.0", "2026-05-06T07:08:09Z", "0a1b2c3")
}

// =============================================================================
// Commands
// =============================================================================

#[test]
fn cli_init() {
    let cli = try_parse_from(&info(), ["wordma", "init", "my-blog"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Init(args)) if args.name == "my-blog"));
}

#[test]
fn cli_add_theme_requires_url() {
    assert!(try_parse_from(&info(), ["wordma", "add", "theme"]).is_err());
    assert!(try_parse_from(&info(), ["wordma", "add"]).is_err());

    let cli = try_parse_from(
        &info(),
        ["wordma", "add", "theme", "git@github.com:user/aurora.git"],
    )
    .unwrap();
    let Some(Command::Add(args)) = cli.command else {
        panic!("expected add");
    };
    let AddCommand::Theme { git_url } = args.command;
    assert_eq!(git_url, "git@github.com:user/aurora.git");
}

#[test]
fn cli_update_variants() {
    let cli = try_parse_from(&info(), ["wordma", "update"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Update(args)) if args.command.is_none()));

    let cli = try_parse_from(&info(), ["wordma", "update", "theme", "aurora"]).unwrap();
    let Some(Command::Update(args)) = cli.command else {
        panic!("expected update");
    };
    assert!(matches!(args.command, Some(UpdateCommand::Theme { name }) if name == "aurora"));
}

#[test]
fn cli_update_theme_requires_name() {
    assert!(try_parse_from(&info(), ["wordma", "update", "theme"]).is_err());
}

#[test]
fn cli_deploy_init() {
    let cli = try_parse_from(
        &info(),
        ["wordma", "deploy", "init", "https://github.com/u/u.github.io.git"],
    )
    .unwrap();
    let Some(Command::Deploy(args)) = cli.command else {
        panic!("expected deploy");
    };
    let DeployCommand::Init { git_url } = args.command;
    assert_eq!(git_url, "https://github.com/u/u.github.io.git");
}

#[test]
fn cli_simple_commands() {
    for (arg, expected) in [
        ("install", "Install"),
        ("i", "Install"),
        ("doctor", "Doctor"),
        ("version", "Version"),
        ("config", "Config"),
    ] {
        let cli = try_parse_from(&info(), ["wordma", arg]).unwrap();
        assert_eq!(format!("{:?}", cli.command.unwrap()), expected);
    }
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(try_parse_from(&info(), ["wordma", "publish"]).is_err());
}

// =============================================================================
// Global options
// =============================================================================

#[test]
fn cli_global_options_before_command() {
    let cli = try_parse_from(
        &info(),
        [
            "wordma",
            "-l",
            "0",
            "--file-log-level",
            "5",
            "--log-file",
            "logs/wordma.log",
            "-s",
            "deploy.dir=site",
            "dev",
            "aurora",
        ],
    )
    .unwrap();

    assert_eq!(cli.global.console_level(), LogLevel::SILENT);
    assert_eq!(cli.global.file_level(), LogLevel::TRACE);
    assert_eq!(
        cli.global.log_file.as_deref(),
        Some(std::path::Path::new("logs/wordma.log"))
    );
    assert_eq!(
        cli.global.overrides().unwrap(),
        vec![("deploy.dir".to_string(), "site".to_string())]
    );
}

// =============================================================================
// Help and version
// =============================================================================

#[test]
fn cli_help_lists_commands() {
    let help = command(&info()).render_help().to_string();
    for name in [
        "init", "add", "install", "dev", "build", "update", "deploy", "doctor", "version",
        "config",
    ] {
        assert!(help.contains(name), "help is missing {name}");
    }
}

#[test]
fn cli_long_version() {
    let err = try_parse_from(&info(), ["wordma", "-V"]).unwrap_err();
    insta::assert_snapshot!(
        err.to_string().trim_end(),
        @"wordma 0.3.0 (built at 2026-05-06T07:08:09Z, commit 0a1b2c3)"
    );
}

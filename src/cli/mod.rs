// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for wordma-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! wordma [global options] <command>
//! init <name>
//! add theme <git-url>
//! install | i
//! dev <theme>
//! build <theme>
//! update [theme <name>]
//! deploy init <git-url>
//! doctor
//! version
//! config
//! ```

pub mod global;
pub mod theme;


use crate::build_info::BuildInfo;
use crate::cli::global::GlobalOptions;
use crate::cli::theme::{AddArgs, UpdateArgs};
use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand};

/// Scaffolding and theme management for wordma blogs
#[derive(Debug, Parser)]
#[command(
    name = "wordma",
    author,
    about = "Scaffolding and theme management for wordma blogs",
    long_about = "wordma-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Creates wordma blog projects, adds and updates themes, and\n\
                  runs the theme's dev server and build through pnpm.\n\
                  `wordma update theme <name>` pulls a theme while keeping\n\
                  your edits to its config/ directory.",
    after_help = "CONFIGURATION:\n\n\
                  Settings are read from `wordma.toml` in the project root (the\n\
                  nearest directory with a package.json), then from every file\n\
                  given with --config, then from WORDMA_* environment variables,\n\
                  e.g. WORDMA_THEME__RECONCILE=keep-new. `wordma config` shows\n\
                  the result."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Creates a new blog project from the template.
    Init(InitArgs),

    /// Adds a theme or other component.
    Add(AddArgs),

    /// Installs project dependencies with pnpm.
    #[command(visible_alias = "i")]
    Install,

    /// Starts a theme's development server.
    Dev(ScriptArgs),

    /// Builds a theme for production.
    Build(ScriptArgs),

    /// Updates wordma itself, or a theme with `update theme <name>`.
    Update(UpdateArgs),

    /// Manages the deployment directory.
    Deploy(DeployArgs),

    /// Checks that node, pnpm and git are installed.
    Doctor,

    /// Shows the version and checks for a newer release.
    Version,

    /// Lists the effective configuration and the files it came from.
    Config,
}

/// Arguments for `init`.
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Directory to create the project in.
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for `dev` and `build`.
#[derive(Debug, Clone, Args)]
pub struct ScriptArgs {
    /// Theme directory name under themes/.
    #[arg(value_name = "THEME")]
    pub theme: String,
}

/// Arguments for `deploy`.
#[derive(Debug, Clone, Args)]
pub struct DeployArgs {
    #[command(subcommand)]
    pub command: DeployCommand,
}

/// Deployment subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum DeployCommand {
    /// Clones the deployment repository into the deploy directory.
    Init {
        /// Git URL of the repository the built site is pushed to.
        #[arg(value_name = "GIT_URL")]
        git_url: String,
    },
}

/// Builds the clap command with the version string taken from `build_info`.
#[must_use]
pub fn command(build_info: &BuildInfo) -> clap::Command {
    Cli::command().version(build_info.long_version())
}

/// Parses command-line arguments.
///
/// Exits the process on `--help`, `--version` or invalid arguments.
#[must_use]
pub fn parse(build_info: &BuildInfo) -> Cli {
    let matches = command(build_info).get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

/// Tries to parse command-line arguments from an iterator.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse_from<I, T>(build_info: &BuildInfo, iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = command(build_info).try_get_matches_from(iter)?;
    Cli::from_arg_matches(&matches)
}

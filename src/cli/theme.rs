// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Theme-related CLI arguments.
//!
//! ```text
//! add theme <git-url>
//! update                 self-update
//! update theme <name>    config-aware theme pull
//! ```

use clap::{Args, Subcommand};

/// Arguments for `add`.
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    #[command(subcommand)]
    pub command: AddCommand,
}

/// What to add.
#[derive(Debug, Clone, Subcommand)]
pub enum AddCommand {
    /// Clones a theme into themes/<name>.
    ///
    /// The name is the last path segment of the URL without `.git`.
    Theme {
        /// https://, git:// or git@host:path URL of the theme repository.
        #[arg(value_name = "GIT_URL")]
        git_url: String,
    },
}

/// Arguments for `update`.
#[derive(Debug, Clone, Args)]
pub struct UpdateArgs {
    /// Update a theme instead of wordma itself.
    #[command(subcommand)]
    pub command: Option<UpdateCommand>,
}

/// What to update.
#[derive(Debug, Clone, Subcommand)]
pub enum UpdateCommand {
    /// Pulls the latest theme version, keeping local config/ edits.
    ///
    /// Uncommitted changes outside config/ are stashed and left for you to
    /// pop. If the pull changes config/, you choose which version to keep
    /// (or set theme.reconcile in wordma.toml).
    Theme {
        /// Theme directory name under themes/.
        #[arg(value_name = "NAME")]
        name: String,
    },
}

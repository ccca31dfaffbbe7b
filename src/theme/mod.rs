// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-aware theme updates.
//!
//! ```text
//! project::locate_theme    themes/<name> with .git
//!          |
//! classify::ChangeSet      git status --porcelain -> config / non-config
//!          |
//! snapshot::ConfigSnapshot config/ -> .wordma-config-backup/
//!          |
//! stash::StashPolicy       shelve what the snapshot does not protect
//!          |
//!   git fetch + git pull
//!          |
//! reconcile::reconcile     restore / keep new / keep both
//! ```
//!
//! [`update::ThemeUpdater`] drives the whole sequence.

pub mod classify;
pub mod reconcile;
pub mod snapshot;
pub mod stash;
pub mod update;

#[cfg(test)]
mod tests;

pub use classify::ChangeSet;
pub use reconcile::{DecisionSource, FixedDecision, ReconcileDecision, ReconcileOutcome, StdinPrompt};
pub use snapshot::ConfigSnapshot;
pub use stash::StashPolicy;
pub use update::{ThemeUpdater, UpdateState, UpdateSummary};

/// The theme's configuration directory.
pub const CONFIG_DIR: &str = "config";

/// Where `config/` is copied for the duration of an update.
pub const BACKUP_DIR: &str = ".wordma-config-backup";

/// Status paths under this prefix are configuration. Also the pathspec
/// staged while shelving non-config changes.
pub const CONFIG_PREFIX: &str = "config/";

/// Status paths under this prefix belong to a leftover backup.
pub const BACKUP_PREFIX: &str = ".wordma-config-backup/";

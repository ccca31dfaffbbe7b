// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backup of a theme's `config/` directory across an update.
//!
//! ```text
//! take()        config/ --copy--> .wordma-config-backup/
//! has_changed() file list of config/ vs file list of the backup
//! restore()     rm config; backup --copy--> config/; rm backup
//! discard()     rm backup
//! ```
//!
//! The backup lives inside the theme, so there is at most one per theme.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{BACKUP_DIR, CONFIG_DIR};
use crate::error::ThemeError;
use crate::utility::fs::copy::{copy_dir_all, remove_dir_if_exists, remove_path_if_exists};
use crate::utility::fs::walk::{WalkOptions, list_files};

/// A copy of `config/` taken before an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSnapshot {
    source: PathBuf,
    backup: PathBuf,
    files: Vec<PathBuf>,
}

impl ConfigSnapshot {
    /// Copies `<theme>/config` to `<theme>/.wordma-config-backup`.
    ///
    /// Returns `None` without touching the disk when there is no `config/`.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::BackupConflict`] if a stale backup cannot be removed.
    /// - [`ThemeError::BackupFailed`] if the copy fails.
    pub fn take(theme_path: &Path) -> Result<Option<Self>, ThemeError> {
        let source = theme_path.join(CONFIG_DIR);
        if !source.is_dir() {
            debug!(path = %source.display(), "no config directory, nothing to snapshot");
            return Ok(None);
        }

        let backup = theme_path.join(BACKUP_DIR);
        remove_dir_if_exists(&backup).map_err(|source| ThemeError::BackupConflict {
            path: backup.display().to_string(),
            source,
        })?;

        copy_dir_all(&source, &backup).map_err(|e| ThemeError::BackupFailed {
            message: e.to_string(),
        })?;

        let files = file_list(&backup).map_err(|e| ThemeError::BackupFailed {
            message: format!("{e:#}"),
        })?;
        debug!(files = files.len(), backup = %backup.display(), "config snapshot taken");

        Ok(Some(Self {
            source,
            backup,
            files,
        }))
    }

    /// The live `config/` directory.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The backup directory.
    #[must_use]
    pub fn backup(&self) -> &Path {
        &self.backup
    }

    /// Relative paths of the files in the snapshot, sorted.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Whether `config/` still exists.
    #[must_use]
    pub fn source_exists(&self) -> bool {
        self.source.is_dir()
    }

    /// Whether the current `config/` has a different file list than the
    /// snapshot. Only names are compared, never content.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Reconcile`] if either directory cannot be walked.
    pub fn has_changed(&self) -> Result<bool, ThemeError> {
        let current = file_list(&self.source).map_err(reconcile_error)?;
        let saved = file_list(&self.backup).map_err(reconcile_error)?;

        if current.len() != saved.len() {
            return Ok(true);
        }
        let saved: BTreeSet<_> = saved.into_iter().collect();
        Ok(current.iter().any(|f| !saved.contains(f)))
    }

    /// Puts the snapshot back in place of `config/` and removes the backup.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Reconcile`] naming the step that failed.
    pub fn restore(&self) -> Result<(), ThemeError> {
        // the pull may have left a file or symlink named `config`
        remove_path_if_exists(&self.source).map_err(|e| ThemeError::Reconcile {
            message: format!("failed to remove {}: {e}", self.source.display()),
        })?;
        copy_dir_all(&self.backup, &self.source).map_err(|e| ThemeError::Reconcile {
            message: format!("failed to restore config: {e}"),
        })?;
        self.discard()
    }

    /// Removes the backup directory. Safe to call more than once.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Reconcile`] if the directory cannot be removed.
    pub fn discard(&self) -> Result<(), ThemeError> {
        remove_dir_if_exists(&self.backup).map_err(|e| ThemeError::Reconcile {
            message: format!("failed to remove backup {}: {e}", self.backup.display()),
        })
    }
}

fn file_list(dir: &Path) -> crate::error::Result<Vec<PathBuf>> {
    list_files(dir, &WalkOptions::exhaustive())
}

fn reconcile_error(e: anyhow::Error) -> ThemeError {
    ThemeError::Reconcile {
        message: format!("{e:#}"),
    }
}

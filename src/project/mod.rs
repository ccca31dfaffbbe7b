// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project layout discovery.
//!
//! ```text
//! <project root>/            nearest ancestor with package.json
//!   package.json
//!   wordma.toml              optional tool configuration
//!   themes/
//!     <name>/
//!       .git/                existence only
//!       config/
//!       .wordma-config-backup/
//!   .deploy/
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ThemeError, WordmaResult};
use crate::git::backend::GitQuery;

/// Directory holding one subdirectory per theme.
pub const THEMES_DIR: &str = "themes";

/// Marker file of the project root.
pub const PACKAGE_JSON: &str = "package.json";

/// Files any one of which marks a directory as a wordma project.
const WORDMA_MARKERS: [&str; 3] = ["wordma.config.js", "wordma.config.json", ".wordmarc"];

/// Nearest ancestor of the current directory containing `package.json`.
///
/// Falls back to the current directory itself.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn find_project_root() -> std::io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(project_root_from(&cwd))
}

/// [`find_project_root`] starting at `start` instead of the current directory.
#[must_use]
pub fn project_root_from(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(PACKAGE_JSON).is_file())
        .unwrap_or(start)
        .to_path_buf()
}

/// Whether `dir` looks like a wordma project.
///
/// Any one of `themes/`, `package.json` or a wordma config file is enough;
/// a single-theme checkout has no `themes/`.
#[must_use]
pub fn is_wordma_project(dir: &Path) -> bool {
    dir.join(THEMES_DIR).is_dir()
        || dir.join(PACKAGE_JSON).is_file()
        || WORDMA_MARKERS.iter().any(|m| dir.join(m).exists())
}

/// A theme directory found under `themes/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeEntry {
    pub name: String,
    pub is_git: bool,
}

impl ThemeEntry {
    /// `name (git repository)` or `name (not a git repository)`.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.is_git {
            format!("{} (git repository)", self.name)
        } else {
            format!("{} (not a git repository)", self.name)
        }
    }
}

/// Lists the theme directories of the project at `root`, sorted by name.
///
/// A missing or unreadable `themes/` yields an empty list.
#[must_use]
pub fn list_themes(root: &Path) -> Vec<ThemeEntry> {
    let Ok(entries) = std::fs::read_dir(root.join(THEMES_DIR)) else {
        return Vec::new();
    };

    let mut themes: Vec<ThemeEntry> = entries
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_ok_and(|ft| ft.is_dir()))
        .map(|e| ThemeEntry {
            name: e.file_name().to_string_lossy().into_owned(),
            is_git: e.path().join(".git").exists(),
        })
        .collect();
    themes.sort_by(|a, b| a.name.cmp(&b.name));
    themes
}

/// A theme checked out under `themes/<name>` that can be updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeWorkingTree {
    pub name: String,
    pub path: PathBuf,
    pub has_version_control: bool,
    /// Filled in by [`ThemeWorkingTree::inspect_branch`].
    pub current_branch: Option<String>,
}

impl ThemeWorkingTree {
    /// Queries and records the checked-out branch.
    ///
    /// # Errors
    ///
    /// Returns the git error if `rev-parse` fails.
    pub fn inspect_branch(&mut self, git: &impl GitQuery) -> WordmaResult<&str> {
        let branch = git.current_branch(&self.path)?;
        Ok(self.current_branch.insert(branch))
    }
}

/// Resolves `themes/<name>` under `root` and checks it is a git checkout.
///
/// Nothing is modified.
///
/// # Errors
///
/// - [`ThemeError::NotFound`] if the directory is missing; the error lists
///   the themes that do exist.
/// - [`ThemeError::NotVersionControlled`] if it has no `.git`.
pub fn locate_theme(root: &Path, name: &str) -> Result<ThemeWorkingTree, ThemeError> {
    let path = root.join(THEMES_DIR).join(name);
    debug!(theme = name, path = %path.display(), "locating theme");

    if !path.is_dir() {
        return Err(ThemeError::NotFound {
            name: name.to_string(),
            available: list_themes(root).iter().map(ThemeEntry::describe).collect(),
        });
    }
    if !path.join(".git").exists() {
        return Err(ThemeError::NotVersionControlled {
            name: name.to_string(),
        });
    }

    Ok(ThemeWorkingTree {
        name: name.to_string(),
        path,
        has_version_control: true,
        current_branch: None,
    })
}

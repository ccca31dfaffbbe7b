// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Classification of `git status --porcelain` output.
//!
//! ```text
//! XY PATH            XY = two status columns, either may be a space
//! XY ORIG -> PATH    renames and copies: both sides are classified
//! ^^^
//! fixed 3-char prefix, cut by width
//! ```

use super::{BACKUP_PREFIX, CONFIG_PREFIX};

/// Width of the `XY ` status prefix of a porcelain line.
const STATUS_WIDTH: usize = 3;

/// What kinds of local changes a theme working tree has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub has_any_changes: bool,
    pub has_config_changes: bool,
    pub has_non_config_changes: bool,
}

impl ChangeSet {
    /// Classifies raw porcelain output.
    ///
    /// The output must not have been trimmed: a leading space is the
    /// first status column of the first line.
    #[must_use]
    pub fn from_porcelain(status: &str) -> Self {
        let mut set = Self::default();

        for path in status.lines().flat_map(changed_paths) {
            if is_config_path(path) {
                set.has_config_changes = true;
            } else {
                set.has_non_config_changes = true;
            }
        }

        set.has_any_changes = set.has_config_changes || set.has_non_config_changes;
        set
    }

    /// Whether there is nothing to protect.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        !self.has_any_changes
    }
}

/// Paths named by one porcelain line; empty for blank or malformed lines.
fn changed_paths(line: &str) -> Vec<&str> {
    let Some(rest) = line.get(STATUS_WIDTH..).filter(|r| !r.is_empty()) else {
        return Vec::new();
    };

    rest.split(" -> ").map(unquote).collect()
}

/// Strips the C-style quotes git puts around paths with unusual characters.
///
/// Escapes inside are left alone; only the prefix matters here.
fn unquote(path: &str) -> &str {
    path.strip_prefix('"')
        .map_or(path, |p| p.strip_suffix('"').unwrap_or(p))
}

/// Whether a theme-relative path belongs to the configuration set.
///
/// The backup directory counts as configuration so a stale backup never
/// triggers a stash.
#[must_use]
pub fn is_config_path(path: &str) -> bool {
    path.starts_with(CONFIG_PREFIX) || path.starts_with(BACKUP_PREFIX)
}

// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shelving local changes before a pull.
//!
//! ```text
//! config  non-config   policy
//!   no       no        Nothing
//!   no       yes       ShelveAll           stash push -m ...
//!   yes      no        ConfigOnly          (snapshot protects config/)
//!   yes      yes       ShelveExceptConfig  add config/
//!                                          stash push -m ... --keep-index
//!                                          reset HEAD config/
//! ```
//!
//! A failure part-way through the three-step dance is not rolled back: the
//! index may be left with `config/` staged.
//!
//! `git stash push` succeeds without creating an entry when only untracked
//! files differ, so an entry counts as made only if the top of the stash
//! moved.

use std::path::Path;

use tracing::debug;

use super::CONFIG_PREFIX;
use super::classify::ChangeSet;
use crate::console::Report;
use crate::error::{StashStep, ThemeError, WordmaError};
use crate::git::backend::GitBackend;

/// Stash message when every local change is shelved.
pub const STASH_ALL_MESSAGE: &str = "wordma-cli auto stash before update";

/// Stash message when config changes are kept in the working tree.
pub const STASH_NON_CONFIG_MESSAGE: &str = "wordma-cli auto stash non-config changes";

/// What to do with local changes before pulling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StashPolicy {
    Nothing,
    ShelveAll,
    ConfigOnly,
    ShelveExceptConfig,
}

impl StashPolicy {
    /// Picks the policy for a classified working tree.
    #[must_use]
    pub const fn select(changes: &ChangeSet) -> Self {
        if changes.is_clean() {
            return Self::Nothing;
        }
        match (changes.has_config_changes, changes.has_non_config_changes) {
            (true, false) => Self::ConfigOnly,
            (false, true) => Self::ShelveAll,
            _ => Self::ShelveExceptConfig,
        }
    }

    /// Carries out the policy in `repo`.
    ///
    /// Returns whether a stash entry was created; `false` when git found
    /// nothing it would stash.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::StashFailed`] naming the step that failed.
    pub fn apply(
        self,
        git: &impl GitBackend,
        repo: &Path,
        reporter: &dyn Report,
    ) -> Result<bool, ThemeError> {
        debug!(policy = ?self, repo = %repo.display(), "applying stash policy");

        match self {
            Self::Nothing => Ok(false),
            Self::ConfigOnly => {
                reporter.info("Detected config file changes - these will be protected during update");
                Ok(false)
            }
            Self::ShelveAll => {
                reporter.warning("Theme has uncommitted local changes");
                reporter.info("Stashing local changes before update...");
                let created = push_entry(git, repo, STASH_ALL_MESSAGE, false, StashStep::ShelveAll)?;
                report_push(created, "Local changes stashed successfully", reporter);
                Ok(created)
            }
            Self::ShelveExceptConfig => {
                reporter.warning("Theme has uncommitted local changes (including config files)");
                reporter.info("Stashing non-config changes before update...");
                git.stage(repo, CONFIG_PREFIX)
                    .map_err(|e| stash_failed(StashStep::StageConfig, e))?;
                let created = push_entry(
                    git,
                    repo,
                    STASH_NON_CONFIG_MESSAGE,
                    true,
                    StashStep::ShelveRemainder,
                )?;
                git.unstage(repo, CONFIG_PREFIX)
                    .map_err(|e| stash_failed(StashStep::UnstageConfig, e))?;
                report_push(created, "Non-config changes stashed successfully", reporter);
                Ok(created)
            }
        }
    }
}

/// `git stash push`, then whether the newest entry is a new one.
fn push_entry(
    git: &impl GitBackend,
    repo: &Path,
    message: &str,
    keep_index: bool,
    step: StashStep,
) -> Result<bool, ThemeError> {
    let before = git.stash_top(repo).map_err(|e| stash_failed(step, e))?;
    git.stash_push(repo, message, keep_index)
        .map_err(|e| stash_failed(step, e))?;
    let after = git.stash_top(repo).map_err(|e| stash_failed(step, e))?;

    let created = after.is_some() && after != before;
    debug!(created, top = ?after, "stash push");
    Ok(created)
}

fn report_push(created: bool, stashed: &str, reporter: &dyn Report) {
    if created {
        reporter.info(stashed);
    } else {
        reporter.info("Nothing was stashed; untracked files stay in the theme directory");
    }
}

fn stash_failed(step: StashStep, err: WordmaError) -> ThemeError {
    ThemeError::StashFailed {
        step,
        message: err.to_string(),
    }
}

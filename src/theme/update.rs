// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `update theme` procedure.
//!
//! ```text
//! Idle -> Located -> Classified -> Snapshotted -> Stashed
//!      -> Fetched -> Pulled -> Reconciled -> Done
//!
//! any step before Reconciled may end in Failed
//! pull failure with a stash: best-effort `stash pop`, then Failed
//! reconcile failure: reported, update Done with warnings
//! ```

use std::fmt;
use std::path::Path;

use tracing::debug;

use super::classify::ChangeSet;
use super::reconcile::{DecisionSource, ReconcileOutcome, reconcile};
use super::snapshot::ConfigSnapshot;
use super::stash::StashPolicy;
use crate::console::Report;
use crate::error::{ThemeError, WordmaResult};
use crate::git::backend::GitBackend;
use crate::project::{ThemeWorkingTree, locate_theme};

/// Progress of one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateState {
    Idle,
    Located,
    Classified,
    Snapshotted,
    Stashed,
    Fetched,
    Pulled,
    Reconciled,
    Done,
    Failed,
}

impl fmt::Display for UpdateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Located => "located",
            Self::Classified => "classified",
            Self::Snapshotted => "snapshotted",
            Self::Stashed => "stashed",
            Self::Fetched => "fetched",
            Self::Pulled => "pulled",
            Self::Reconciled => "reconciled",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Result of a completed update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    pub theme: ThemeWorkingTree,
    pub changes: ChangeSet,
    /// A stash entry was created and is still on the stash stack.
    pub stashed: bool,
    /// `None` when the theme had no `config/` or reconciliation failed.
    pub reconcile: Option<ReconcileOutcome>,
    /// Reconciliation failed after a successful pull.
    pub has_warnings: bool,
}

/// Runs theme updates against a git backend.
pub struct ThemeUpdater<'a, G: GitBackend> {
    git: G,
    decisions: &'a dyn DecisionSource,
    reporter: &'a dyn Report,
    remote: String,
    state: UpdateState,
}

impl<'a, G: GitBackend> ThemeUpdater<'a, G> {
    /// Creates an updater pulling from `origin`.
    pub fn new(git: G, decisions: &'a dyn DecisionSource, reporter: &'a dyn Report) -> Self {
        Self {
            git,
            decisions,
            reporter,
            remote: "origin".to_string(),
            state: UpdateState::Idle,
        }
    }

    /// Remote to fetch and pull from.
    #[must_use]
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    /// State reached by the last [`ThemeUpdater::update`] call.
    #[must_use]
    pub const fn state(&self) -> UpdateState {
        self.state
    }

    fn advance(&mut self, next: UpdateState) {
        debug!(from = %self.state, to = %next, "theme update");
        self.state = next;
    }

    /// Updates `themes/<name>` under `project_root`.
    ///
    /// # Errors
    ///
    /// Returns the error that stopped the update; the state is then
    /// [`UpdateState::Failed`]. Reconciliation errors do not fail the update.
    pub fn update(&mut self, project_root: &Path, name: &str) -> WordmaResult<UpdateSummary> {
        self.state = UpdateState::Idle;
        let result = self.run(project_root, name);
        if result.is_err() {
            self.advance(UpdateState::Failed);
        }
        result
    }

    fn run(&mut self, project_root: &Path, name: &str) -> WordmaResult<UpdateSummary> {
        let mut theme = locate_theme(project_root, name)?;
        self.advance(UpdateState::Located);
        self.reporter.info(&format!("Updating theme '{name}'..."));

        let status = self
            .git
            .status_porcelain(&theme.path)
            .map_err(inspection_error)?;
        let changes = ChangeSet::from_porcelain(&status);
        let branch = theme
            .inspect_branch(&self.git)
            .map_err(inspection_error)?
            .to_string();
        debug!(?changes, %branch, "working tree inspected");
        self.advance(UpdateState::Classified);

        let snapshot = ConfigSnapshot::take(&theme.path)?;
        if let Some(snapshot) = &snapshot {
            self.reporter.info(&format!(
                "Configuration files backed up ({} files)",
                snapshot.files().len()
            ));
        }
        self.advance(UpdateState::Snapshotted);

        let stashed = StashPolicy::select(&changes).apply(&self.git, &theme.path, self.reporter)?;
        self.advance(UpdateState::Stashed);

        self.reporter.info("Fetching latest changes...");
        self.git
            .fetch(&theme.path, &self.remote)
            .map_err(|e| ThemeError::FetchFailed {
                message: e.to_string(),
            })?;
        self.advance(UpdateState::Fetched);

        self.reporter
            .info(&format!("Pulling latest changes from {branch}..."));
        if let Err(e) = self.git.pull(&theme.path, &self.remote, &branch) {
            if stashed {
                self.pop_after_failed_pull(&theme.path);
            }
            return Err(ThemeError::PullFailed {
                message: e.to_string(),
            }
            .into());
        }
        self.advance(UpdateState::Pulled);

        let mut has_warnings = false;
        let reconcile = match &snapshot {
            Some(snapshot) => match reconcile(snapshot, self.decisions, self.reporter) {
                Ok(outcome) => Some(outcome),
                Err(e) => {
                    self.reporter.error(&e.to_string());
                    has_warnings = true;
                    None
                }
            },
            None => None,
        };
        self.advance(UpdateState::Reconciled);

        if has_warnings {
            self.reporter
                .warning(&format!("Theme '{name}' update completed with warnings"));
            if let Some(snapshot) = snapshot.as_ref().filter(|s| s.backup().exists()) {
                self.reporter.info("Your previous configuration is kept at:");
                self.reporter.detail(&snapshot.backup().display().to_string());
            }
        } else if stashed {
            self.reporter.info("Update completed successfully");
        } else {
            self.reporter
                .success(&format!("Theme '{name}' updated successfully!"));
        }
        if stashed {
            self.reporter.warning("Your non-config changes were stashed");
            self.reporter.info("To restore your non-config changes, run:");
            self.reporter
                .detail(&format!("cd {}", theme.path.display()));
            self.reporter.detail("git stash pop");
        }
        self.advance(UpdateState::Done);

        Ok(UpdateSummary {
            theme,
            changes,
            stashed,
            reconcile,
            has_warnings,
        })
    }

    fn pop_after_failed_pull(&self, repo: &Path) {
        self.reporter.info("Attempting to restore stashed changes...");
        if let Err(e) = self.git.stash_pop(repo) {
            debug!(error = %e, "stash pop after failed pull");
            self.reporter.warning(
                "Failed to restore stashed changes. You may need to manually run 'git stash pop' in the theme directory",
            );
        }
    }
}

fn inspection_error(e: crate::error::WordmaError) -> ThemeError {
    ThemeError::Inspection {
        message: e.to_string(),
    }
}

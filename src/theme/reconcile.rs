// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settling `config/` after a pull.
//!
//! ```text
//!                     snapshot
//!                        |
//!          config/ gone? --yes--> restore            Restored
//!                        | no
//!       same file list? --yes--> discard backup      Unchanged
//!                        | no
//!             DecisionSource::decide()
//!          /             |              \
//!   RestoreOld        KeepNew         PreserveBoth
//!   restore()       keep backup      keep both dirs
//! ```

use std::path::PathBuf;

use tracing::debug;

use super::snapshot::ConfigSnapshot;
use crate::config::types::ReconcilePolicy;
use crate::console::{Report, prompt_line};
use crate::error::ThemeError;

/// How to settle a `config/` directory the pull changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReconcileDecision {
    /// Put the user's configuration back.
    #[default]
    RestoreOld,
    /// Keep the theme's new configuration, leave the backup for reference.
    KeepNew,
    /// Keep both for a manual merge.
    PreserveBoth,
}

impl ReconcileDecision {
    /// Interprets one line of user input.
    ///
    /// `1`/`2`/`3` or the decision names; anything else, blank included,
    /// means [`ReconcileDecision::RestoreOld`].
    #[must_use]
    pub fn from_choice(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "2" | "keep-new" | "new" => Self::KeepNew,
            "3" | "preserve-both" | "both" | "merge" => Self::PreserveBoth,
            _ => Self::RestoreOld,
        }
    }
}

/// Supplies the decision when the pull changed the configuration.
pub trait DecisionSource {
    fn decide(&self, reporter: &dyn Report) -> ReconcileDecision;
}

/// Asks on the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompt;

impl DecisionSource for StdinPrompt {
    fn decide(&self, reporter: &dyn Report) -> ReconcileDecision {
        reporter.info("Your options:");
        reporter.detail("1. Keep your current configuration (recommended)");
        reporter.detail("2. Use the new default configuration");
        reporter.detail("3. Keep backup for manual merge");
        ReconcileDecision::from_choice(&prompt_line("Please choose an option (1-3) [1]: "))
    }
}

/// Always answers the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDecision(pub ReconcileDecision);

impl DecisionSource for FixedDecision {
    fn decide(&self, _reporter: &dyn Report) -> ReconcileDecision {
        self.0
    }
}

impl DecisionSource for ReconcilePolicy {
    fn decide(&self, reporter: &dyn Report) -> ReconcileDecision {
        match self {
            Self::Prompt => StdinPrompt.decide(reporter),
            Self::RestoreOld => ReconcileDecision::RestoreOld,
            Self::KeepNew => ReconcileDecision::KeepNew,
            Self::PreserveBoth => ReconcileDecision::PreserveBoth,
        }
    }
}

/// What reconciliation ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The pull removed `config/`; the snapshot was put back.
    Restored,
    /// Same file list as before; backup discarded.
    Unchanged,
    /// The user's configuration replaced the new one.
    RestoredOld,
    /// The new configuration stays; the old one is at `backup`.
    KeptNew { backup: PathBuf },
    /// Both directories left in place.
    PreservedBoth { backup: PathBuf, config: PathBuf },
}

/// Settles `config/` against `snapshot` after a successful pull.
///
/// # Errors
///
/// Returns [`ThemeError::Reconcile`] if comparing or restoring fails. The
/// pull itself is not undone.
pub fn reconcile(
    snapshot: &ConfigSnapshot,
    source: &dyn DecisionSource,
    reporter: &dyn Report,
) -> Result<ReconcileOutcome, ThemeError> {
    if !snapshot.source_exists() {
        debug!("config directory removed by pull, restoring snapshot");
        snapshot.restore()?;
        reporter.success("Configuration files restored");
        return Ok(ReconcileOutcome::Restored);
    }

    if !snapshot.has_changed()? {
        snapshot.discard()?;
        reporter.info("Configuration files unchanged");
        return Ok(ReconcileOutcome::Unchanged);
    }

    reporter.warning("Configuration files have been updated in the new theme version");
    let decision = source.decide(reporter);
    debug!(?decision, "reconcile decision");

    match decision {
        ReconcileDecision::RestoreOld => {
            snapshot.restore()?;
            reporter.success("Your configuration has been restored");
            Ok(ReconcileOutcome::RestoredOld)
        }
        ReconcileDecision::KeepNew => {
            reporter.info("Using new default configuration");
            reporter.detail(&format!(
                "Your old configuration is backed up at: {}",
                snapshot.backup().display()
            ));
            Ok(ReconcileOutcome::KeptNew {
                backup: snapshot.backup().to_path_buf(),
            })
        }
        ReconcileDecision::PreserveBoth => {
            reporter.info("Configuration backup preserved for manual merge:");
            reporter.detail(&format!("Old config backup: {}", snapshot.backup().display()));
            reporter.detail(&format!("New config: {}", snapshot.source().display()));
            reporter.detail("You can manually compare and merge the configurations");
            Ok(ReconcileOutcome::PreservedBoth {
                backup: snapshot.backup().to_path_buf(),
                config: snapshot.source().to_path_buf(),
            })
        }
    }
}

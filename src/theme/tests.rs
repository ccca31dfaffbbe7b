// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use crate::console::{MemoryConsole, Severity};
use crate::error::{GitError, StashStep, ThemeError, WordmaError, WordmaResult};
use crate::git::backend::{GitMutation, GitQuery};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =============================================================================
// Fixtures
// =============================================================================

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Creates `themes/<name>` with an empty `.git` and the given config files.
fn make_theme(root: &Path, name: &str, config_files: &[&str]) -> PathBuf {
    let theme = root.join("themes").join(name);
    fs::create_dir_all(theme.join(".git")).unwrap();
    for file in config_files {
        let path = theme.join(CONFIG_DIR).join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, format!("# {file}\n")).unwrap();
    }
    theme
}

type PullHook = Box<dyn Fn(&Path)>;

/// Git double: scripted status, recorded calls, injectable failures.
#[derive(Default)]
struct FakeGit {
    status: String,
    branch: String,
    failing: Vec<&'static str>,
    on_pull: Option<PullHook>,
    untracked_only: bool,
    stashes: RefCell<Vec<String>>,
    calls: RefCell<Vec<String>>,
}

impl FakeGit {
    fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            branch: "main".to_string(),
            ..Self::default()
        }
    }

    fn failing(mut self, op: &'static str) -> Self {
        self.failing.push(op);
        self
    }

    fn on_pull(mut self, hook: impl Fn(&Path) + 'static) -> Self {
        self.on_pull = Some(Box::new(hook));
        self
    }

    /// `stash push` succeeds without creating an entry.
    fn untracked_only(mut self) -> Self {
        self.untracked_only = true;
        self
    }

    fn with_stash(self, message: &str) -> Self {
        self.stashes.borrow_mut().push(message.to_string());
        self
    }

    fn stashes(&self) -> Vec<String> {
        self.stashes.borrow().clone()
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, op: &'static str, call: String) -> WordmaResult<()> {
        self.calls.borrow_mut().push(call.clone());
        if self.failing.contains(&op) {
            return Err(GitError::CommandFailed {
                command: format!("git {call}"),
                message: format!("{op} refused"),
            }
            .into());
        }
        Ok(())
    }
}

impl GitQuery for FakeGit {
    fn status_porcelain(&self, _repo: &Path) -> WordmaResult<String> {
        self.record("status", "status --porcelain".to_string())?;
        Ok(self.status.clone())
    }

    fn current_branch(&self, _repo: &Path) -> WordmaResult<String> {
        self.record("rev-parse", "rev-parse --abbrev-ref HEAD".to_string())?;
        Ok(self.branch.clone())
    }

    fn stash_top(&self, _repo: &Path) -> WordmaResult<Option<String>> {
        let stashes = self.stashes.borrow();
        Ok(stashes.last().map(|m| format!("{}:{m}", stashes.len())))
    }
}

impl GitMutation for FakeGit {
    fn fetch(&self, _repo: &Path, remote: &str) -> WordmaResult<()> {
        self.record("fetch", format!("fetch {remote}"))
    }

    fn pull(&self, repo: &Path, remote: &str, branch: &str) -> WordmaResult<()> {
        self.record("pull", format!("pull {remote} {branch}"))?;
        if let Some(hook) = &self.on_pull {
            hook(repo);
        }
        Ok(())
    }

    fn stash_push(&self, _repo: &Path, message: &str, keep_index: bool) -> WordmaResult<()> {
        let suffix = if keep_index { " --keep-index" } else { "" };
        self.record("stash push", format!("stash push -m {message}{suffix}"))?;
        if !self.untracked_only {
            self.stashes.borrow_mut().push(message.to_string());
        }
        Ok(())
    }

    fn stash_pop(&self, _repo: &Path) -> WordmaResult<()> {
        self.record("stash pop", "stash pop".to_string())?;
        self.stashes.borrow_mut().pop();
        Ok(())
    }

    fn stage(&self, _repo: &Path, pathspec: &str) -> WordmaResult<()> {
        self.record("add", format!("add {pathspec}"))
    }

    fn unstage(&self, _repo: &Path, pathspec: &str) -> WordmaResult<()> {
        self.record("reset", format!("reset HEAD {pathspec}"))
    }
}

fn mutations(calls: &[String]) -> Vec<&str> {
    calls
        .iter()
        .map(String::as_str)
        .filter(|c| !c.starts_with("status") && !c.starts_with("rev-parse"))
        .collect()
}

// =============================================================================
// Classifier
// =============================================================================

#[test]
fn test_classify_empty_status() {
    let changes = ChangeSet::from_porcelain("");
    assert_eq!(changes, ChangeSet::default());
    assert!(changes.is_clean());
}

#[test]
fn test_classify_leading_space_config_line() {
    let changes = ChangeSet::from_porcelain(" M config/x.yml\n");
    assert!(changes.has_any_changes);
    assert!(changes.has_config_changes);
    assert!(!changes.has_non_config_changes);
}

#[test]
fn test_classify_leading_space_source_line() {
    let changes = ChangeSet::from_porcelain(" M src/y.js\n");
    assert!(changes.has_any_changes);
    assert!(!changes.has_config_changes);
    assert!(changes.has_non_config_changes);
}

#[test]
fn test_classify_backup_is_never_non_config() {
    let changes = ChangeSet::from_porcelain(
        " M config/site.yml\n?? .wordma-config-backup/\n?? .wordma-config-backup/site.yml\n",
    );
    assert!(changes.has_config_changes);
    assert!(!changes.has_non_config_changes);
}

#[test]
fn test_classify_mixed() {
    let changes = ChangeSet::from_porcelain("M  config/site.yml\n?? layouts/post.njk\n");
    assert!(changes.has_config_changes);
    assert!(changes.has_non_config_changes);
}

#[test]
fn test_classify_config_prefix_needs_slash() {
    let changes = ChangeSet::from_porcelain("?? config-backup.json\n");
    assert!(!changes.has_config_changes);
    assert!(changes.has_non_config_changes);
}

#[test]
fn test_classify_quoted_and_renamed_paths() {
    let quoted = ChangeSet::from_porcelain("?? \"config/my site.yml\"\n");
    assert!(quoted.has_config_changes);
    assert!(!quoted.has_non_config_changes);

    let renamed = ChangeSet::from_porcelain("R  config/old.yml -> src/new.yml\n");
    assert!(renamed.has_config_changes);
    assert!(renamed.has_non_config_changes);
}

#[test]
fn test_classify_ignores_short_lines() {
    let changes = ChangeSet::from_porcelain("\n M\n");
    assert!(changes.is_clean());
}

// =============================================================================
// Snapshot
// =============================================================================

#[test]
fn test_snapshot_without_config_is_none() {
    let temp = temp_dir();
    let theme = make_theme(temp.path(), "aurora", &[]);

    assert!(ConfigSnapshot::take(&theme).unwrap().is_none());
    assert!(!theme.join(BACKUP_DIR).exists());
}

#[test]
fn test_snapshot_replaces_stale_backup() {
    let temp = temp_dir();
    let theme = make_theme(temp.path(), "aurora", &["site.yml"]);
    fs::create_dir(theme.join(BACKUP_DIR)).unwrap();
    fs::write(theme.join(BACKUP_DIR).join("stale.yml"), "").unwrap();

    let snapshot = ConfigSnapshot::take(&theme).unwrap().unwrap();

    assert_eq!(snapshot.files(), [PathBuf::from("site.yml")]);
    assert!(!theme.join(BACKUP_DIR).join("stale.yml").exists());
}

#[test]
fn test_snapshot_counts_hidden_and_nested_files() {
    let temp = temp_dir();
    let theme = make_theme(temp.path(), "aurora", &["site.yml", ".env", "nav/menu.yml"]);

    let snapshot = ConfigSnapshot::take(&theme).unwrap().unwrap();

    assert_eq!(
        snapshot.files(),
        [
            PathBuf::from(".env"),
            PathBuf::from("nav").join("menu.yml"),
            PathBuf::from("site.yml"),
        ]
    );
}

#[test]
fn test_discard_is_idempotent() {
    let temp = temp_dir();
    let theme = make_theme(temp.path(), "aurora", &["site.yml"]);
    let snapshot = ConfigSnapshot::take(&theme).unwrap().unwrap();

    snapshot.discard().unwrap();
    snapshot.discard().unwrap();

    assert!(!snapshot.backup().exists());
}

#[test]
fn test_snapshot_restore_round_trip() {
    let temp = temp_dir();
    let theme = make_theme(temp.path(), "aurora", &["site.yml", "nav/menu.yml"]);
    let site = theme.join(CONFIG_DIR).join("site.yml");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&site, fs::Permissions::from_mode(0o600)).unwrap();
    }

    let snapshot = ConfigSnapshot::take(&theme).unwrap().unwrap();
    snapshot.restore().unwrap();

    assert_eq!(fs::read_to_string(&site).unwrap(), "# site.yml\n");
    assert_eq!(
        fs::read_to_string(theme.join(CONFIG_DIR).join("nav").join("menu.yml")).unwrap(),
        "# nav/menu.yml\n"
    );
    assert!(!snapshot.backup().exists());
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&site).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[test]
fn test_has_changed_is_structural() {
    let temp = temp_dir();
    let theme = make_theme(temp.path(), "aurora", &["site.yml"]);
    let snapshot = ConfigSnapshot::take(&theme).unwrap().unwrap();

    fs::write(theme.join(CONFIG_DIR).join("site.yml"), "title: edited\n").unwrap();
    assert!(!snapshot.has_changed().unwrap());

    fs::write(theme.join(CONFIG_DIR).join("extra.yml"), "").unwrap();
    assert!(snapshot.has_changed().unwrap());
}

#[test]
fn test_has_changed_same_count_different_names() {
    let temp = temp_dir();
    let theme = make_theme(temp.path(), "aurora", &["site.yml"]);
    let snapshot = ConfigSnapshot::take(&theme).unwrap().unwrap();

    fs::rename(
        theme.join(CONFIG_DIR).join("site.yml"),
        theme.join(CONFIG_DIR).join("site.yaml"),
    )
    .unwrap();

    assert!(snapshot.has_changed().unwrap());
}

// =============================================================================
// Stash coordinator
// =============================================================================

#[test]
fn test_stash_policy_selection() {
    let set = |config, non_config| ChangeSet {
        has_any_changes: config || non_config,
        has_config_changes: config,
        has_non_config_changes: non_config,
    };
    assert_eq!(StashPolicy::select(&set(false, false)), StashPolicy::Nothing);
    assert_eq!(StashPolicy::select(&set(false, true)), StashPolicy::ShelveAll);
    assert_eq!(StashPolicy::select(&set(true, false)), StashPolicy::ConfigOnly);
    assert_eq!(
        StashPolicy::select(&set(true, true)),
        StashPolicy::ShelveExceptConfig
    );
}

#[test]
fn test_shelve_except_config_runs_three_steps() {
    let git = FakeGit::with_status("");
    let console = MemoryConsole::new();

    let stashed = StashPolicy::ShelveExceptConfig
        .apply(&git, Path::new("."), &console)
        .unwrap();

    assert!(stashed);
    assert_eq!(
        git.calls(),
        vec![
            "add config/",
            "stash push -m wordma-cli auto stash non-config changes --keep-index",
            "reset HEAD config/",
        ]
    );
}

#[test]
fn test_shelve_failure_after_staging_is_not_rolled_back() {
    let git = FakeGit::with_status("").failing("stash push");
    let console = MemoryConsole::new();

    let err = StashPolicy::ShelveExceptConfig
        .apply(&git, Path::new("."), &console)
        .unwrap_err();

    assert!(matches!(
        err,
        ThemeError::StashFailed {
            step: StashStep::ShelveRemainder,
            ..
        }
    ));
    // No reset after the failed stash
    assert_eq!(git.calls().len(), 2);
}

#[test]
fn test_shelve_all_with_nothing_stashable_reports_no_stash() {
    let git = FakeGit::with_status("")
        .with_stash("user-wip")
        .untracked_only();
    let console = MemoryConsole::new();

    let stashed = StashPolicy::ShelveAll
        .apply(&git, Path::new("."), &console)
        .unwrap();

    assert!(!stashed);
    assert_eq!(git.stashes(), vec!["user-wip"]);
    assert!(console.contains("Nothing was stashed"));
    assert!(!console.contains("Local changes stashed successfully"));
}

#[test]
fn test_shelve_except_config_still_unstages_when_nothing_stashed() {
    let git = FakeGit::with_status("").untracked_only();
    let console = MemoryConsole::new();

    let stashed = StashPolicy::ShelveExceptConfig
        .apply(&git, Path::new("."), &console)
        .unwrap();

    assert!(!stashed);
    assert_eq!(git.calls().last().map(String::as_str), Some("reset HEAD config/"));
}

#[test]
fn test_config_only_policy_touches_nothing() {
    let git = FakeGit::with_status("");
    let console = MemoryConsole::new();

    let stashed = StashPolicy::ConfigOnly
        .apply(&git, Path::new("."), &console)
        .unwrap();

    assert!(!stashed);
    assert!(git.calls().is_empty());
    assert!(console.contains("these will be protected during update"));
}

// =============================================================================
// Reconcile
// =============================================================================

#[test]
fn test_decision_from_choice() {
    assert_eq!(ReconcileDecision::from_choice(""), ReconcileDecision::RestoreOld);
    assert_eq!(ReconcileDecision::from_choice("1"), ReconcileDecision::RestoreOld);
    assert_eq!(ReconcileDecision::from_choice(" 2 "), ReconcileDecision::KeepNew);
    assert_eq!(ReconcileDecision::from_choice("3"), ReconcileDecision::PreserveBoth);
    assert_eq!(ReconcileDecision::from_choice("9"), ReconcileDecision::RestoreOld);
    assert_eq!(
        ReconcileDecision::from_choice("Keep-New"),
        ReconcileDecision::KeepNew
    );
}

#[test]
fn test_policy_as_decision_source() {
    use crate::config::types::ReconcilePolicy;

    let console = MemoryConsole::new();
    assert_eq!(
        ReconcilePolicy::KeepNew.decide(&console),
        ReconcileDecision::KeepNew
    );
    assert_eq!(
        ReconcilePolicy::PreserveBoth.decide(&console),
        ReconcileDecision::PreserveBoth
    );
    assert!(console.lines().is_empty());
}

#[test]
fn test_reconcile_restores_missing_config() {
    let temp = temp_dir();
    let theme = make_theme(temp.path(), "aurora", &["site.yml"]);
    let snapshot = ConfigSnapshot::take(&theme).unwrap().unwrap();
    fs::remove_dir_all(theme.join(CONFIG_DIR)).unwrap();
    let console = MemoryConsole::new();

    let outcome = reconcile::reconcile(
        &snapshot,
        &FixedDecision(ReconcileDecision::KeepNew),
        &console,
    )
    .unwrap();

    assert_eq!(outcome, ReconcileOutcome::Restored);
    assert!(theme.join(CONFIG_DIR).join("site.yml").exists());
    assert!(!theme.join(BACKUP_DIR).exists());
}

#[test]
fn test_reconcile_restores_over_plain_file() {
    let temp = temp_dir();
    let theme = make_theme(temp.path(), "aurora", &["site.yml"]);
    let snapshot = ConfigSnapshot::take(&theme).unwrap().unwrap();
    fs::remove_dir_all(theme.join(CONFIG_DIR)).unwrap();
    fs::write(theme.join(CONFIG_DIR), "moved upstream\n").unwrap();
    let console = MemoryConsole::new();

    let outcome = reconcile::reconcile(
        &snapshot,
        &FixedDecision(ReconcileDecision::RestoreOld),
        &console,
    )
    .unwrap();

    assert_eq!(outcome, ReconcileOutcome::Restored);
    assert!(theme.join(CONFIG_DIR).is_dir());
    assert_eq!(
        fs::read_to_string(theme.join(CONFIG_DIR).join("site.yml")).unwrap(),
        "# site.yml\n"
    );
    assert!(!theme.join(BACKUP_DIR).exists());
}

#[test]
fn test_reconcile_keep_new_leaves_backup() {
    let temp = temp_dir();
    let theme = make_theme(temp.path(), "aurora", &["site.yml"]);
    let snapshot = ConfigSnapshot::take(&theme).unwrap().unwrap();
    fs::write(theme.join(CONFIG_DIR).join("new.yml"), "").unwrap();
    let console = MemoryConsole::new();

    let outcome = reconcile::reconcile(
        &snapshot,
        &FixedDecision(ReconcileDecision::KeepNew),
        &console,
    )
    .unwrap();

    assert_eq!(
        outcome,
        ReconcileOutcome::KeptNew {
            backup: theme.join(BACKUP_DIR)
        }
    );
    assert!(theme.join(CONFIG_DIR).join("new.yml").exists());
    assert!(theme.join(BACKUP_DIR).join("site.yml").exists());
    assert!(console.contains("Your old configuration is backed up at:"));
}

#[test]
fn test_reconcile_preserve_both() {
    let temp = temp_dir();
    let theme = make_theme(temp.path(), "aurora", &["site.yml"]);
    let snapshot = ConfigSnapshot::take(&theme).unwrap().unwrap();
    fs::remove_file(theme.join(CONFIG_DIR).join("site.yml")).unwrap();
    fs::write(theme.join(CONFIG_DIR).join("theme.yml"), "").unwrap();
    let console = MemoryConsole::new();

    let outcome = reconcile::reconcile(
        &snapshot,
        &FixedDecision(ReconcileDecision::PreserveBoth),
        &console,
    )
    .unwrap();

    assert!(matches!(outcome, ReconcileOutcome::PreservedBoth { .. }));
    assert!(theme.join(CONFIG_DIR).join("theme.yml").exists());
    assert!(theme.join(BACKUP_DIR).join("site.yml").exists());
    assert!(console.contains("You can manually compare and merge the configurations"));
}

// =============================================================================
// Update flow
// =============================================================================

#[test]
fn test_update_scenario_a_unchanged_config() {
    let temp = temp_dir();
    let theme = make_theme(temp.path(), "aurora", &["a.yml"]);
    let git = FakeGit::with_status("");
    let console = MemoryConsole::new();
    let decisions = FixedDecision(ReconcileDecision::KeepNew);

    let mut updater = ThemeUpdater::new(&git, &decisions, &console);
    let summary = updater.update(temp.path(), "aurora").unwrap();

    assert_eq!(updater.state(), UpdateState::Done);
    assert_eq!(summary.reconcile, Some(ReconcileOutcome::Unchanged));
    assert!(!summary.stashed);
    assert!(!theme.join(BACKUP_DIR).exists());
    assert_eq!(mutations(&git.calls()), vec!["fetch origin", "pull origin main"]);
    assert!(console.contains("Theme 'aurora' updated successfully!"));
    assert!(!console.contains("Your non-config changes were stashed"));
}

#[test]
fn test_update_scenario_b_plain_stash_left_shelved() {
    let temp = temp_dir();
    make_theme(temp.path(), "aurora", &[]);
    let git = FakeGit::with_status(" M src/y.js\n");
    let console = MemoryConsole::new();
    let decisions = FixedDecision(ReconcileDecision::RestoreOld);

    let summary = ThemeUpdater::new(&git, &decisions, &console)
        .update(temp.path(), "aurora")
        .unwrap();

    assert!(summary.changes.has_non_config_changes);
    assert!(!summary.changes.has_config_changes);
    assert!(summary.stashed);
    assert_eq!(summary.reconcile, None);
    assert_eq!(
        mutations(&git.calls()),
        vec![
            "stash push -m wordma-cli auto stash before update",
            "fetch origin",
            "pull origin main",
        ]
    );
    assert!(console.contains("Your non-config changes were stashed"));
    assert!(console.contains("  git stash pop"));
    assert!(!console.contains("updated successfully!"));
}

#[test]
fn test_update_scenario_c_pull_and_pop_fail() {
    let temp = temp_dir();
    make_theme(temp.path(), "aurora", &[]);
    let git = FakeGit::with_status(" M src/y.js\n")
        .failing("pull")
        .failing("stash pop");
    let console = MemoryConsole::new();
    let decisions = FixedDecision(ReconcileDecision::RestoreOld);

    let mut updater = ThemeUpdater::new(&git, &decisions, &console);
    let err = updater.update(temp.path(), "aurora").unwrap_err();

    assert_eq!(updater.state(), UpdateState::Failed);
    match err {
        WordmaError::Theme(boxed) => assert!(matches!(*boxed, ThemeError::PullFailed { .. })),
        other => panic!("expected PullFailed, got {other:?}"),
    }
    assert_eq!(git.calls().last().map(String::as_str), Some("stash pop"));
    assert_eq!(console.count(Severity::Warning), 2);
    assert!(console.contains("Failed to restore stashed changes"));
}

#[test]
fn test_update_pull_failure_without_stash_does_not_pop() {
    let temp = temp_dir();
    make_theme(temp.path(), "aurora", &[]);
    let git = FakeGit::with_status("").failing("pull");
    let console = MemoryConsole::new();
    let decisions = FixedDecision(ReconcileDecision::RestoreOld);

    let result = ThemeUpdater::new(&git, &decisions, &console).update(temp.path(), "aurora");

    assert!(result.is_err());
    assert!(!git.calls().iter().any(|c| c == "stash pop"));
}

#[test]
fn test_update_untracked_only_pull_failure_keeps_existing_stash() {
    let temp = temp_dir();
    make_theme(temp.path(), "aurora", &[]);
    let git = FakeGit::with_status("?? notes.txt\n")
        .with_stash("user-wip")
        .untracked_only()
        .failing("pull");
    let console = MemoryConsole::new();
    let decisions = FixedDecision(ReconcileDecision::RestoreOld);

    let result = ThemeUpdater::new(&git, &decisions, &console).update(temp.path(), "aurora");

    assert!(result.is_err());
    assert!(!git.calls().iter().any(|c| c == "stash pop"));
    assert_eq!(git.stashes(), vec!["user-wip"]);
}

#[test]
fn test_update_untracked_only_does_not_ask_for_pop() {
    let temp = temp_dir();
    make_theme(temp.path(), "aurora", &[]);
    let git = FakeGit::with_status("?? notes.txt\n").untracked_only();
    let console = MemoryConsole::new();
    let decisions = FixedDecision(ReconcileDecision::RestoreOld);

    let summary = ThemeUpdater::new(&git, &decisions, &console)
        .update(temp.path(), "aurora")
        .unwrap();

    assert!(!summary.stashed);
    assert!(!console.contains("git stash pop"));
    assert!(console.contains("Theme 'aurora' updated successfully!"));
}

#[test]
fn test_update_scenario_d_blank_answer_restores_old() {
    let temp = temp_dir();
    let theme = make_theme(temp.path(), "aurora", &["site.yml"]);
    fs::write(theme.join(CONFIG_DIR).join("site.yml"), "title: mine\n").unwrap();
    let git = FakeGit::with_status(" M config/site.yml\n").on_pull(|repo| {
        let config = repo.join(CONFIG_DIR);
        fs::write(config.join("site.yml"), "title: upstream\n").unwrap();
        fs::write(config.join("widgets.yml"), "").unwrap();
    });
    let console = MemoryConsole::new();
    let decisions = FixedDecision(ReconcileDecision::from_choice(""));

    let summary = ThemeUpdater::new(&git, &decisions, &console)
        .update(temp.path(), "aurora")
        .unwrap();

    assert_eq!(summary.reconcile, Some(ReconcileOutcome::RestoredOld));
    assert!(!summary.stashed);
    assert_eq!(
        fs::read_to_string(theme.join(CONFIG_DIR).join("site.yml")).unwrap(),
        "title: mine\n"
    );
    assert!(!theme.join(CONFIG_DIR).join("widgets.yml").exists());
    assert!(!theme.join(BACKUP_DIR).exists());
    assert!(console.contains("Your configuration has been restored"));
}

#[test]
fn test_update_reconcile_failure_reports_warnings() {
    let temp = temp_dir();
    let theme = make_theme(temp.path(), "aurora", &["site.yml"]);
    let git = FakeGit::with_status("").on_pull(|repo| {
        fs::write(repo.join(CONFIG_DIR).join("widgets.yml"), "").unwrap();
        let backup = repo.join(BACKUP_DIR);
        fs::remove_dir_all(&backup).unwrap();
        fs::write(&backup, "").unwrap();
    });
    let console = MemoryConsole::new();
    let decisions = FixedDecision(ReconcileDecision::RestoreOld);

    let mut updater = ThemeUpdater::new(&git, &decisions, &console);
    let summary = updater.update(temp.path(), "aurora").unwrap();

    assert_eq!(updater.state(), UpdateState::Done);
    assert!(summary.has_warnings);
    assert_eq!(summary.reconcile, None);
    assert_eq!(console.count(Severity::Error), 1);
    assert!(console.contains("Theme 'aurora' update completed with warnings"));
    assert!(!console.contains("updated successfully!"));
    assert!(console.contains(&theme.join(BACKUP_DIR).display().to_string()));
}

#[test]
fn test_update_reports_backed_up_file_count() {
    let temp = temp_dir();
    make_theme(temp.path(), "aurora", &["site.yml", "nav/menu.yml"]);
    let git = FakeGit::with_status("");
    let console = MemoryConsole::new();
    let decisions = FixedDecision(ReconcileDecision::RestoreOld);

    ThemeUpdater::new(&git, &decisions, &console)
        .update(temp.path(), "aurora")
        .unwrap();

    assert!(console.contains("Configuration files backed up (2 files)"));
}

#[test]
fn test_update_uses_configured_remote_and_branch() {
    let temp = temp_dir();
    make_theme(temp.path(), "aurora", &[]);
    let git = FakeGit {
        branch: "next".to_string(),
        ..FakeGit::with_status("")
    };
    let console = MemoryConsole::new();
    let decisions = FixedDecision(ReconcileDecision::RestoreOld);

    ThemeUpdater::new(&git, &decisions, &console)
        .with_remote("upstream")
        .update(temp.path(), "aurora")
        .unwrap();

    assert_eq!(
        mutations(&git.calls()),
        vec!["fetch upstream", "pull upstream next"]
    );
    assert!(console.contains("Pulling latest changes from next..."));
}

#[test]
fn test_update_inspects_before_mutating() {
    let temp = temp_dir();
    make_theme(temp.path(), "aurora", &["site.yml"]);
    let git = FakeGit::with_status("").failing("rev-parse");
    let console = MemoryConsole::new();
    let decisions = FixedDecision(ReconcileDecision::RestoreOld);

    let err = ThemeUpdater::new(&git, &decisions, &console)
        .update(temp.path(), "aurora")
        .unwrap_err();

    assert!(err.to_string().starts_with("failed to inspect theme"));
    assert!(mutations(&git.calls()).is_empty());
    assert!(!temp.path().join("themes/aurora").join(BACKUP_DIR).exists());
}

#[test]
fn test_update_missing_theme_fails_before_git() {
    let temp = temp_dir();
    let git = FakeGit::with_status("");
    let console = MemoryConsole::new();
    let decisions = FixedDecision(ReconcileDecision::RestoreOld);

    let mut updater = ThemeUpdater::new(&git, &decisions, &console);
    let err = updater.update(temp.path(), "aurora").unwrap_err();

    assert_eq!(err.to_string(), "theme 'aurora' not found in themes directory");
    assert_eq!(updater.state(), UpdateState::Failed);
    assert!(git.calls().is_empty());
}

#[test]
fn test_update_stash_failure_is_fatal() {
    let temp = temp_dir();
    make_theme(temp.path(), "aurora", &["site.yml"]);
    let git = FakeGit::with_status(" M config/site.yml\n M index.js\n").failing("add");
    let console = MemoryConsole::new();
    let decisions = FixedDecision(ReconcileDecision::RestoreOld);

    let err = ThemeUpdater::new(&git, &decisions, &console)
        .update(temp.path(), "aurora")
        .unwrap_err();

    assert!(err.to_string().starts_with("failed to stage config files"));
    assert!(!git.calls().iter().any(|c| c.starts_with("fetch")));
}

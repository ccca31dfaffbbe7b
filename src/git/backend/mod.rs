// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     status --porcelain, rev-parse --abbrev-ref HEAD,
//!                     stash list (newest entry)
//! GitMutation (write) fetch, pull, stash push/pop, add, reset
//!         \              /
//!          v            v
//!          ShellBackend (git CLI)
//! ```
//!
//! Every invocation sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`
//! so a missing credential fails instead of hanging. Queries capture stdout
//! untouched: porcelain output is column-sensitive, so nothing is trimmed.

use crate::error::{GitError, WordmaResult};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
pub trait GitQuery {
    /// Raw `git status --porcelain` output.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if git cannot be run or exits non-zero.
    fn status_porcelain(&self, repo: &Path) -> WordmaResult<String>;

    /// Name of the checked-out branch (`HEAD` when detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if git cannot be run or exits non-zero.
    fn current_branch(&self, repo: &Path) -> WordmaResult<String>;

    /// Commit id of the newest stash entry, `None` when the stash is empty.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if git cannot be run or exits non-zero.
    fn stash_top(&self, repo: &Path) -> WordmaResult<Option<String>>;
}

// --- Mutation Trait (Write operations) ---

/// Git operations that modify the repository or working tree.
pub trait GitMutation {
    /// `git fetch <remote>`
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the fetch fails.
    fn fetch(&self, repo: &Path, remote: &str) -> WordmaResult<()>;

    /// `git pull <remote> <branch>`
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the pull fails (conflicts, network, ...).
    fn pull(&self, repo: &Path, remote: &str, branch: &str) -> WordmaResult<()>;

    /// `git stash push -m <message> [--keep-index]`
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the stash cannot be created.
    fn stash_push(&self, repo: &Path, message: &str, keep_index: bool) -> WordmaResult<()>;

    /// `git stash pop`
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the stash cannot be applied cleanly.
    fn stash_pop(&self, repo: &Path) -> WordmaResult<()>;

    /// `git add <pathspec>`
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if staging fails.
    fn stage(&self, repo: &Path, pathspec: &str) -> WordmaResult<()>;

    /// `git reset HEAD <pathspec>`
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if unstaging fails.
    fn unstage(&self, repo: &Path, pathspec: &str) -> WordmaResult<()>;
}

/// Combined capability used by the theme updater.
pub trait GitBackend: GitQuery + GitMutation {}

impl<T: GitQuery + GitMutation> GitBackend for T {}

impl<T: GitQuery + ?Sized> GitQuery for &T {
    fn status_porcelain(&self, repo: &Path) -> WordmaResult<String> {
        (**self).status_porcelain(repo)
    }

    fn current_branch(&self, repo: &Path) -> WordmaResult<String> {
        (**self).current_branch(repo)
    }

    fn stash_top(&self, repo: &Path) -> WordmaResult<Option<String>> {
        (**self).stash_top(repo)
    }
}

impl<T: GitMutation + ?Sized> GitMutation for &T {
    fn fetch(&self, repo: &Path, remote: &str) -> WordmaResult<()> {
        (**self).fetch(repo, remote)
    }

    fn pull(&self, repo: &Path, remote: &str, branch: &str) -> WordmaResult<()> {
        (**self).pull(repo, remote, branch)
    }

    fn stash_push(&self, repo: &Path, message: &str, keep_index: bool) -> WordmaResult<()> {
        (**self).stash_push(repo, message, keep_index)
    }

    fn stash_pop(&self, repo: &Path) -> WordmaResult<()> {
        (**self).stash_pop(repo)
    }

    fn stage(&self, repo: &Path, pathspec: &str) -> WordmaResult<()> {
        (**self).stage(repo, pathspec)
    }

    fn unstage(&self, repo: &Path, pathspec: &str) -> WordmaResult<()> {
        (**self).unstage(repo, pathspec)
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Git backend that shells out to the installed `git` binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellBackend;

/// What happens to git's stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stdout {
    /// Returned to the caller.
    Capture,
    /// Shown to the user as it is produced.
    Inherit,
}

impl ShellBackend {
    /// Creates a new shell backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Execute a git command and return its stdout verbatim.
    pub(crate) fn git_output(args: &[&str], cwd: &Path) -> WordmaResult<String> {
        Self::git_command(args, cwd, Stdout::Capture)
    }

    /// Execute a git command with stdout on the terminal.
    ///
    /// stderr is captured so a failure can carry git's message; on success
    /// it is replayed to our stderr (hints, "Already up to date.", ...).
    pub(crate) fn git_passthrough(args: &[&str], cwd: &Path) -> WordmaResult<()> {
        Self::git_command(args, cwd, Stdout::Inherit).map(|_| ())
    }

    fn git_command(args: &[&str], cwd: &Path, stdout: Stdout) -> WordmaResult<String> {
        let command_line = format!("git {}", args.join(" "));
        debug!(cmd = %command_line, cwd = %cwd.display(), "git");

        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(match stdout {
                Stdout::Capture => Stdio::piped(),
                Stdout::Inherit => Stdio::inherit(),
            })
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| std::io::Error::new(e.kind(), format!("failed to execute git: {e}")))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: command_line,
                message: stderr.trim().to_string(),
            }
            .into());
        }

        if stdout == Stdout::Inherit && !stderr.is_empty() {
            let _ = std::io::stderr().write_all(stderr.as_bytes());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitQuery for ShellBackend {
    fn status_porcelain(&self, repo: &Path) -> WordmaResult<String> {
        Self::git_output(&["status", "--porcelain"], repo)
    }

    fn current_branch(&self, repo: &Path) -> WordmaResult<String> {
        Self::git_output(&["rev-parse", "--abbrev-ref", "HEAD"], repo)
            .map(|branch| branch.trim().to_string())
    }

    fn stash_top(&self, repo: &Path) -> WordmaResult<Option<String>> {
        // `stash list` exits 0 on an empty stash, unlike `rev-parse refs/stash`
        let top = Self::git_output(&["stash", "list", "--max-count=1", "--format=%H"], repo)?;
        let top = top.trim();
        Ok((!top.is_empty()).then(|| top.to_string()))
    }
}

impl GitMutation for ShellBackend {
    fn fetch(&self, repo: &Path, remote: &str) -> WordmaResult<()> {
        Self::git_passthrough(&["fetch", remote], repo)
    }

    fn pull(&self, repo: &Path, remote: &str, branch: &str) -> WordmaResult<()> {
        Self::git_passthrough(&["pull", remote, branch], repo)
    }

    fn stash_push(&self, repo: &Path, message: &str, keep_index: bool) -> WordmaResult<()> {
        let mut args = vec!["stash", "push", "-m", message];
        if keep_index {
            args.push("--keep-index");
        }
        Self::git_passthrough(&args, repo)
    }

    fn stash_pop(&self, repo: &Path) -> WordmaResult<()> {
        Self::git_passthrough(&["stash", "pop"], repo)
    }

    fn stage(&self, repo: &Path, pathspec: &str) -> WordmaResult<()> {
        Self::git_passthrough(&["add", pathspec], repo)
    }

    fn unstage(&self, repo: &Path, pathspec: &str) -> WordmaResult<()> {
        // `--quiet`: reset lists every unstaged path otherwise
        Self::git_passthrough(&["reset", "--quiet", "HEAD", pathspec], repo)
    }
}

// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              WordmaError (~24 bytes)
//!                     |
//!   +-------+-----+-----+-----+------+----+------+
//!   |       |     |     |     |      |    |      |
//!   v       v     v     v     v      v    v      v
//! Bail    Git   Net   Cfg   Proc    Fs  Theme  Io/Other
//!         Box   Box   Box   Box    Box   Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git     CommandFailed, CloneFailed, InvalidUrl
//!   Network Reqwest, HttpError, DownloadFailed, InvalidUrl,
//!           InvalidResponse
//!   Config  InvalidValue
//!   Process ExecutableNotFound, SpawnFailed, NonZeroExit, TimedOut
//!   Fs      IoError
//!   Theme   NotFound, NotVersionControlled, Inspection,
//!           BackupConflict, BackupFailed, StashFailed,
//!           FetchFailed, PullFailed, Reconcile
//!
//! All variants boxed => WordmaError fits in 24 bytes.
//! ```

use std::fmt;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`WordmaError`].
pub type WordmaResult<T> = std::result::Result<T, WordmaError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum WordmaError {
    /// Fatal error whose details were already shown to the user.
    ///
    /// `main` exits with a failure status without printing it again.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Theme update error.
    #[error("{0}")]
    Theme(#[from] Box<ThemeError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`WordmaError::Bailed`] after reporting it to the user.
pub fn bail_out(message: impl Into<String>) -> WordmaError {
    WordmaError::Bailed(message.into().into_boxed_str())
}

/// Whether `err` was already reported and only needs a failure exit code.
#[must_use]
pub fn is_reported(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<WordmaError>(), Some(WordmaError::Bailed(_)))
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for WordmaError {
                fn from(err: $error) -> Self {
                    WordmaError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    NetworkError => Network,
    ConfigError => Config,
    ProcessError => Process,
    FsError => Fs,
    ThemeError => Theme,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command exited with a non-zero status; `message` is git's stderr.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Clone operation failed.
    #[error("failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },

    /// Repository URL is not something git can clone.
    #[error("invalid git URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Download failed.
    #[error("download failed: {url} - {message}")]
    DownloadFailed { url: String, message: String },

    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Response body did not have the expected shape.
    #[error("unexpected response from {url}: {message}")]
    InvalidResponse { url: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Process was killed after running too long.
    #[error("process '{command}' did not finish within {limit:?}")]
    TimedOut {
        command: String,
        limit: std::time::Duration,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.display().to_string(),
            source,
        }
    }
}

// --- Theme Errors ---

/// Step of the stash dance that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StashStep {
    /// `git stash push` of every change.
    ShelveAll,
    /// `git add config/` before shelving the rest.
    StageConfig,
    /// `git stash push --keep-index` of non-config changes.
    ShelveRemainder,
    /// `git reset HEAD config/` after shelving.
    UnstageConfig,
}

impl fmt::Display for StashStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShelveAll => write!(f, "stash local changes"),
            Self::StageConfig => write!(f, "stage config files"),
            Self::ShelveRemainder => write!(f, "stash non-config changes"),
            Self::UnstageConfig => write!(f, "unstage config files"),
        }
    }
}

/// Errors raised while updating a theme.
///
/// Everything up to and including [`ThemeError::PullFailed`] aborts the
/// update; [`ThemeError::Reconcile`] is reported after a successful pull.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// `themes/<name>` does not exist.
    ///
    /// `available` lists the sibling theme directories, one entry per theme,
    /// already annotated with whether each is a git repository.
    #[error("theme '{name}' not found in themes directory")]
    NotFound {
        name: String,
        available: Vec<String>,
    },

    /// `themes/<name>/.git` does not exist.
    #[error("theme '{name}' is not a git repository")]
    NotVersionControlled { name: String },

    /// Inspecting the working tree failed before anything was touched.
    #[error("failed to inspect theme: {message}")]
    Inspection { message: String },

    /// A stale backup directory could not be removed.
    #[error("failed to remove existing backup {path}: {source}")]
    BackupConflict {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Copying `config/` into the backup directory failed.
    #[error("failed to backup config directory: {message}")]
    BackupFailed { message: String },

    /// One step of the stash dance failed.
    #[error("failed to {step}: {message}")]
    StashFailed { step: StashStep, message: String },

    /// `git fetch` failed.
    #[error("failed to fetch from remote: {message}")]
    FetchFailed { message: String },

    /// `git pull` failed.
    #[error("failed to pull latest changes: {message}")]
    PullFailed { message: String },

    /// Restoring or comparing the config snapshot failed after the pull.
    #[error("failed to handle config restore: {message}")]
    Reconcile { message: String },
}

#[cfg(test)]
mod tests;

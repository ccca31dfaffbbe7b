// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Describing a child process before it runs.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bitflags::bitflags;

use crate::error::ProcessError;

bitflags! {
    /// What happens to the lines of a piped output stream.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capture: u8 {
        /// Each line goes to the diagnostic log at `trace`.
        const TRACE = 1;
        /// Lines are collected into [`ProcessOutput`].
        const KEEP = 1 << 1;
    }
}

/// Where one of the child's output streams goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    /// Shared with wordma's own terminal.
    Terminal,
    /// Piped back to wordma; an empty [`Capture`] discards it.
    Piped(Capture),
}

impl Default for Stream {
    fn default() -> Self {
        Self::Piped(Capture::TRACE)
    }
}

impl Stream {
    /// The capture mode; nothing is captured from the terminal.
    #[must_use]
    pub const fn capture(self) -> Capture {
        match self {
            Self::Terminal => Capture::empty(),
            Self::Piped(capture) => capture,
        }
    }
}

/// Exit code and whatever output was kept.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    pub(super) code: i32,
    pub(super) stdout: String,
    pub(super) stderr: String,
}

impl ProcessOutput {
    /// `-1` when the child was killed by a signal.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code
    }

    /// Kept stdout lines joined with `\n`; empty unless captured.
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.code == 0
    }
}

/// A command line plus where its output goes.
#[derive(Debug)]
pub struct ProcessBuilder {
    pub(super) program: PathBuf,
    /// Short name used in logs and errors (`pnpm`, not `/usr/bin/pnpm`).
    pub(super) label: String,
    pub(super) args: Vec<OsString>,
    pub(super) cwd: Option<PathBuf>,
    pub(super) env: Vec<(String, String)>,
    pub(super) stdout: Stream,
    pub(super) stderr: Stream,
    pub(super) timeout: Option<Duration>,
}

impl ProcessBuilder {
    /// A builder for `program` as given; PATH lookup happens at spawn time.
    pub fn new(program: impl AsRef<Path>) -> Self {
        let program = program.as_ref().to_path_buf();
        let label = program
            .file_stem()
            .map_or_else(|| program.display().to_string(), |s| s.to_string_lossy().into_owned());
        Self {
            program,
            label,
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
            stdout: Stream::default(),
            stderr: Stream::default(),
            timeout: None,
        }
    }

    /// A builder for `program` resolved through PATH.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if `program` is not on PATH.
    pub fn which(program: &str) -> Result<Self, ProcessError> {
        let path = which::which(program).map_err(|_| ProcessError::ExecutableNotFound {
            name: program.to_string(),
        })?;
        let mut builder = Self::new(path);
        builder.label = program.to_string();
        Ok(builder)
    }

    /// Whether `program` is on PATH.
    #[must_use]
    pub fn exists(program: &str) -> bool {
        which::which(program).is_ok()
    }

    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_os_string()));
        self
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Adds a variable on top of the inherited environment.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Keeps stdout for [`ProcessOutput::stdout`].
    #[must_use]
    pub const fn capture_stdout(mut self) -> Self {
        self.stdout = Stream::Piped(Capture::KEEP);
        self
    }

    /// Keeps stderr for [`ProcessOutput::stderr`] and logs it as it arrives.
    #[must_use]
    pub const fn capture_stderr(mut self) -> Self {
        self.stderr = Stream::Piped(Capture::TRACE.union(Capture::KEEP));
        self
    }

    /// Hands the terminal (stdin included) to the child.
    #[must_use]
    pub const fn inherit_stdio(mut self) -> Self {
        self.stdout = Stream::Terminal;
        self.stderr = Stream::Terminal;
        self
    }

    /// Kills the child once `limit` has passed.
    #[must_use]
    pub const fn timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The command line as it would be typed, for logs and error messages.
impl fmt::Display for ProcessBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.contains(' ') {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

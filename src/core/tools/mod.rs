// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! External tools wordma drives.
//!
//! ```text
//! Tool::Pnpm.require()?   -> ProcessBuilder (resolved via PATH)
//! Tool::Git.version()     -> "git version 2.47.0"
//! Tool::Node.install_hint() -> per-OS instructions
//! ```

use std::time::Duration;

use crate::core::process::builder::ProcessBuilder;
use crate::error::{ProcessError, Result};

/// How long a `--version` probe may take before it is abandoned.
const VERSION_PROBE_TIMEOUT: Duration = Duration::from_secs(15);

/// Tools checked by `wordma doctor` and required by individual commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Node,
    Pnpm,
    Git,
}

impl Tool {
    /// Every tool, in the order `doctor` reports them.
    pub const ALL: [Self; 3] = [Self::Node, Self::Pnpm, Self::Git];

    /// Executable name looked up in PATH.
    #[must_use]
    pub const fn binary(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Pnpm => "pnpm",
            Self::Git => "git",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Node => "Node.js",
            Self::Pnpm => "pnpm",
            Self::Git => "Git",
        }
    }

    /// Install instructions for the running OS.
    #[must_use]
    pub fn install_hint(self) -> &'static str {
        self.install_hint_for(std::env::consts::OS)
    }

    /// Install instructions for `os` (a `std::env::consts::OS` value).
    #[must_use]
    pub fn install_hint_for(self, os: &str) -> &'static str {
        let windows = os == "windows";
        let macos = os == "macos";
        match self {
            Self::Node if windows => "Download and install Node.js from https://nodejs.org/",
            Self::Node if macos => "Install with Homebrew: brew install node, or visit https://nodejs.org/",
            Self::Node => {
                "Install with your package manager: sudo apt install nodejs npm, or visit https://nodejs.org/"
            }
            Self::Pnpm => "Install pnpm: npm install -g pnpm, or visit https://pnpm.io/",
            Self::Git if windows => "Download and install Git from https://git-scm.com/",
            Self::Git if macos => "Install with Homebrew: brew install git, or visit https://git-scm.com/",
            Self::Git => {
                "Install with your package manager: sudo apt install git, or visit https://git-scm.com/"
            }
        }
    }

    /// Whether the tool is on PATH.
    #[must_use]
    pub fn is_available(self) -> bool {
        ProcessBuilder::exists(self.binary())
    }

    /// A builder for the tool, or an error if it is not installed.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if the tool is not on PATH.
    pub fn require(self) -> std::result::Result<ProcessBuilder, ProcessError> {
        ProcessBuilder::which(self.binary())
    }

    /// First line of `<tool> --version`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool is missing, fails, or times out.
    pub async fn version(self) -> Result<String> {
        let output = self
            .require()?
            .arg("--version")
            .capture_stdout()
            .timeout(VERSION_PROBE_TIMEOUT)
            .run()
            .await?;
        Ok(output.stdout().lines().next().unwrap_or_default().trim().to_string())
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

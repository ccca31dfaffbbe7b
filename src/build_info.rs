// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version and build metadata.
//!
//! Created once in `main` and handed to whatever reports it. Release builds
//! inject values at compile time:
//!
//! ```text
//! WORDMA_VERSION=1.4.0 WORDMA_BUILD_TIME=2026-01-02T03:04:05Z \
//! WORDMA_GIT_COMMIT=abc1234 cargo build --release
//! ```

/// Immutable build metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    version: String,
    build_time: String,
    git_commit: String,
}

impl BuildInfo {
    /// Metadata of the running binary.
    #[must_use]
    pub fn current() -> Self {
        Self::new(
            option_env!("WORDMA_VERSION").unwrap_or(env!("CARGO_PKG_VERSION")),
            option_env!("WORDMA_BUILD_TIME").unwrap_or("unknown"),
            option_env!("WORDMA_GIT_COMMIT").unwrap_or("unknown"),
        )
    }

    pub fn new(
        version: impl Into<String>,
        build_time: impl Into<String>,
        git_commit: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            build_time: build_time.into(),
            git_commit: git_commit.into(),
        }
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn build_time(&self) -> &str {
        &self.build_time
    }

    #[must_use]
    pub fn git_commit(&self) -> &str {
        &self.git_commit
    }

    /// Development builds cannot self-update.
    #[must_use]
    pub fn is_dev(&self) -> bool {
        self.version == "dev"
    }

    /// `<version> (built at <time>, commit <hash>)`
    #[must_use]
    pub fn long_version(&self) -> String {
        format!(
            "{} (built at {}, commit {})",
            self.version, self.build_time, self.git_commit
        )
    }

    /// `<os>/<arch>` of the running binary.
    #[must_use]
    pub fn platform() -> String {
        format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH)
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! Config: TemplateConfig, ThemeConfig, DeployConfig, ReleaseConfig
//! ReconcilePolicy: prompt (default) | restore-old | keep-new | preserve-both
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Where `wordma init` clones the blog template from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Git URL of the template repository.
    pub repo: String,
    /// Branch to clone.
    pub branch: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            repo: "https://github.com/zwying0814/wordma.git".to_string(),
            branch: "main".to_string(),
        }
    }
}

/// How a changed `config/` directory is settled after a theme pull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReconcilePolicy {
    /// Ask on the terminal.
    #[default]
    Prompt,
    /// Always put the user's configuration back.
    RestoreOld,
    /// Always keep the configuration shipped by the theme.
    KeepNew,
    /// Leave both directories for a manual merge.
    PreserveBoth,
}

impl std::fmt::Display for ReconcilePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prompt => write!(f, "prompt"),
            Self::RestoreOld => write!(f, "restore-old"),
            Self::KeepNew => write!(f, "keep-new"),
            Self::PreserveBoth => write!(f, "preserve-both"),
        }
    }
}

impl std::str::FromStr for ReconcilePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "prompt" => Ok(Self::Prompt),
            "restore-old" | "restore" => Ok(Self::RestoreOld),
            "keep-new" => Ok(Self::KeepNew),
            "preserve-both" => Ok(Self::PreserveBoth),
            _ => Err(ConfigError::InvalidValue {
                section: "theme".to_string(),
                key: "reconcile".to_string(),
                message: format!(
                    "expected 'prompt', 'restore-old', 'keep-new' or 'preserve-both', got '{s}'"
                ),
            }),
        }
    }
}

/// Theme management options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Remote fetched and pulled by `wordma update theme`.
    pub remote: String,
    /// Reconciliation choice when the theme ships a different `config/`.
    pub reconcile: ReconcilePolicy,
    /// Keep `.git` in themes added with `wordma add theme`, so they stay
    /// updatable.
    pub keep_git_on_add: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            reconcile: ReconcilePolicy::Prompt,
            keep_git_on_add: true,
        }
    }
}

/// Deployment staging options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployConfig {
    /// Staging directory, relative to the project root.
    pub dir: PathBuf,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".deploy"),
        }
    }
}

/// Where releases of wordma itself are published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReleaseConfig {
    /// `owner/name` of the GitHub repository.
    pub repo: String,
    /// Base URL of the GitHub REST API.
    pub api_base: String,
    /// Base URL release assets are downloaded from.
    pub download_base: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            repo: "zwying0814/wordma-cli".to_string(),
            api_base: "https://api.github.com".to_string(),
            download_base: "https://github.com".to_string(),
        }
    }
}

impl ReleaseConfig {
    /// `GET` endpoint describing the latest release.
    #[must_use]
    pub fn latest_release_url(&self) -> String {
        format!(
            "{}/repos/{}/releases/latest",
            self.api_base.trim_end_matches('/'),
            self.repo
        )
    }

    /// Human-facing releases page.
    #[must_use]
    pub fn releases_page(&self) -> String {
        format!(
            "{}/{}/releases",
            self.download_base.trim_end_matches('/'),
            self.repo
        )
    }

    /// Download URL of `asset` for release `version` (without the `v` prefix).
    #[must_use]
    pub fn asset_url(&self, version: &str, asset: &str) -> String {
        format!(
            "{}/{}/releases/download/v{version}/{asset}",
            self.download_base.trim_end_matches('/'),
            self.repo
        )
    }
}

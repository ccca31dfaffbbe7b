// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for wordma-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. wordma.toml in the project root
//! 3. --config FILE (repeatable)
//! 4. WORDMA_* env vars
//! 5. --set section.key=value
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! WORDMA_THEME__RECONCILE=keep-new   → theme.reconcile = "keep-new"
//! WORDMA_THEME__KEEP_GIT_ON_ADD=false → theme.keep_git_on_add = false
//! WORDMA_RELEASE__API_BASE=http://…  → release.api_base = "http://…"
//! ```
//!
//! # Example
//!
//! ```toml
//! [template]
//! repo = "https://github.com/zwying0814/wordma.git"
//! branch = "main"
//!
//! [theme]
//! remote = "origin"
//! reconcile = "restore-old"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{DeployConfig, ReleaseConfig, TemplateConfig, ThemeConfig};

/// Name of the optional per-project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "wordma.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Blog template used by `init`.
    pub template: TemplateConfig,
    /// Theme management.
    pub theme: ThemeConfig,
    /// Deployment staging.
    pub deploy: DeployConfig,
    /// Self-update source.
    pub release: ReleaseConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wordma_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("wordma.toml")
    ///     .with_env_prefix("WORDMA")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Reject values that would only fail later, mid-operation.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` naming the offending key.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let invalid = |section: &str, key: &str, message: &str| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: message.to_string(),
        };

        if self.template.repo.trim().is_empty() {
            return Err(invalid("template", "repo", "must not be empty"));
        }
        if self.template.branch.trim().is_empty() {
            return Err(invalid("template", "branch", "must not be empty"));
        }
        if self.theme.remote.trim().is_empty() {
            return Err(invalid("theme", "remote", "must not be empty"));
        }
        if self.deploy.dir.as_os_str().is_empty() || self.deploy.dir.is_absolute() {
            return Err(invalid(
                "deploy",
                "dir",
                "must be a relative path inside the project",
            ));
        }
        let mut parts = self.release.repo.split('/');
        let well_formed = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
        );
        if !well_formed {
            return Err(invalid("release", "repo", "expected 'owner/name'"));
        }
        Ok(())
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("template.repo", self.template.repo.clone());
        options.insert("template.branch", self.template.branch.clone());
        options.insert("theme.remote", self.theme.remote.clone());
        options.insert("theme.reconcile", self.theme.reconcile.to_string());
        options.insert(
            "theme.keep_git_on_add",
            self.theme.keep_git_on_add.to_string(),
        );
        options.insert("deploy.dir", self.deploy.dir.display().to_string());
        options.insert("release.repo", self.release.repo.clone());
        options.insert("release.api_base", self.release.api_base.clone());
        options.insert("release.download_base", self.release.download_base.clone());

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}

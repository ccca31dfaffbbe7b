// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional(<root>/wordma.toml)   [project]
//!   .add_toml_file(--config FILE)                 [file]
//!   .add_toml_str(...)                            [string]
//!   .with_env_prefix("WORDMA")                    WORDMA_THEME__REMOTE
//!   .set(key, value)                              --set, always wins
//!        |
//!        v
//!    build() --> Config (validated)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

use super::Config;
use crate::error::Result;

/// A configuration file (or string) that contributed to the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `wordma.toml` found in the project root.
    Project(PathBuf),
    /// A file passed with `--config`.
    File(PathBuf),
    /// TOML given inline.
    Inline,
}

impl ConfigSource {
    /// Path of the file, if the source is one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Project(path) | Self::File(path) => Some(path),
            Self::Inline => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project(path) => write!(f, "[project] {}", path.display()),
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::Inline => write!(f, "[string] <string>"),
        }
    }
}

/// Collects configuration layers; later layers override earlier ones.
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    fn push_file(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        self
    }

    /// Adds a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        let mut loader = self.push_file(path, true);
        loader.sources.push(ConfigSource::File(path.to_path_buf()));
        loader
    }

    /// Adds the project file; a missing file is skipped silently.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        let mut loader = self.push_file(path, false);
        if path.is_file() {
            loader.sources.push(ConfigSource::Project(path.to_path_buf()));
        }
        loader
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` environment variables on `build()`.
    ///
    /// Sections and keys are split on a double underscore so that keys such
    /// as `keep_git_on_add` survive.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Overrides `key` (dotted, e.g. `theme.reconcile`) regardless of the
    /// other layers.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be parsed as a config path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("invalid override '{key}': {e}"))?;
        Ok(self)
    }

    /// Merges all layers into a validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing or malformed, a value
    /// has the wrong type, a key is unknown, or validation fails.
    pub fn build(self) -> Result<Config> {
        let mut builder = self.builder;
        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// The layers added so far, in priority order (lowest first).
    #[must_use]
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// One numbered line per source, for `wordma config`.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

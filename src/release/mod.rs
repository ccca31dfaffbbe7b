// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release lookup and self-update.
//!
//! ```text
//! fetch_latest(ReleaseConfig)
//!     GET {api_base}/repos/{repo}/releases/latest
//!         -> ReleaseInfo { tag_name, name, body, html_url }
//!
//! VersionCheck::new(current, latest)
//!     current < latest  -> update available ("dev" is older than all)
//!
//! install::install_update(asset url, current exe)
//! ```

pub mod install;
pub mod version;


use serde::Deserialize;
use tracing::debug;

use crate::config::types::ReleaseConfig;
use crate::error::{NetworkError, WordmaResult};
use crate::net::Downloader;

pub use version::Version;

/// The fields of a GitHub release we use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReleaseInfo {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub html_url: String,
}

impl ReleaseInfo {
    /// Parses a release object as returned by the GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidResponse`] if `json` is not a release.
    pub fn from_json(json: &str, url: &str) -> Result<Self, NetworkError> {
        serde_json::from_str(json).map_err(|e| NetworkError::InvalidResponse {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    /// Tag without the `v` prefix.
    #[must_use]
    pub fn version_string(&self) -> &str {
        self.tag_name.trim_start_matches('v')
    }

    #[must_use]
    pub fn version(&self) -> Version {
        Version::parse(&self.tag_name)
    }

    /// Release notes, if any were written.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.body.as_deref().map(str::trim).filter(|b| !b.is_empty())
    }
}

/// Fetches the latest published release.
///
/// # Errors
///
/// Returns a [`NetworkError`] if the request fails or the body is not a
/// release object.
pub async fn fetch_latest(config: &ReleaseConfig) -> WordmaResult<ReleaseInfo> {
    let url = config.latest_release_url();
    let body = Downloader::new()
        .url(&url)
        .header("Accept", "application/vnd.github+json")
        .silent()
        .download_string()
        .await?;
    let release = ReleaseInfo::from_json(&body, &url)?;
    debug!(tag = %release.tag_name, "latest release");
    Ok(release)
}

/// Current version compared against the latest release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCheck {
    pub current: Version,
    pub latest: Version,
    pub release: ReleaseInfo,
}

impl VersionCheck {
    #[must_use]
    pub fn new(current: &str, release: ReleaseInfo) -> Self {
        Self {
            current: Version::parse(current),
            latest: release.version(),
            release,
        }
    }

    /// Whether the latest release is newer than the running build.
    #[must_use]
    pub fn needs_update(&self) -> bool {
        self.current.is_older_than(&self.latest)
    }
}

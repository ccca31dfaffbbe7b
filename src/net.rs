// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP for `wordma version` and `wordma update`.
//!
//! ```text
//! Downloader::new().url(..).header(..)
//!        |
//!        +-- download_string()   release metadata (GitHub API)
//!        |
//!        +-- .file(path).download()
//!               streamed to disk, progress on stderr
//!               bar when the size is known, spinner otherwise
//!               partial file removed on failure
//! ```

use std::path::PathBuf;
use std::sync::LazyLock;

use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, Response};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::{NetworkError, WordmaResult};

/// One client per process; GitHub rejects requests without a user agent.
static CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .user_agent(concat!("wordma-rs/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Deletes the file at `path` when dropped, unless disarmed first.
struct RemoveOnDrop(Option<PathBuf>);

impl RemoveOnDrop {
    fn disarm(&mut self) {
        self.0 = None;
    }
}

impl Drop for RemoveOnDrop {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

fn progress_for(length: Option<u64>) -> ProgressBar {
    match length.filter(|&len| len > 0) {
        Some(len) => {
            let style = ProgressStyle::with_template(
                "{spinner:.green} [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
            ProgressBar::new(len).with_style(style)
        }
        None => {
            let style = ProgressStyle::with_template("{spinner:.green} {bytes} @ {binary_bytes_per_sec}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
            ProgressBar::new_spinner().with_style(style)
        }
    }
}

/// A GET request, read into memory or streamed to a file.
///
/// # Example
/// ```no_run
/// use wordma_rs::net::Downloader;
///
/// # async fn run() -> wordma_rs::error::WordmaResult<()> {
/// Downloader::new()
///     .url("https://github.com/zwying0814/wordma-cli/releases/download/v1.2.0/wordma-linux-amd64")
///     .file("/tmp/wordma-new")
///     .download()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Downloader {
    url: Option<String>,
    file: Option<PathBuf>,
    headers: Vec<(String, String)>,
    show_progress: bool,
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Downloader {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            url: None,
            file: None,
            headers: Vec::new(),
            show_progress: true,
        }
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Destination for [`Downloader::download`].
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// No progress output.
    #[must_use]
    pub const fn silent(mut self) -> Self {
        self.show_progress = false;
        self
    }

    fn target_url(&self) -> Result<&str, NetworkError> {
        self.url
            .as_deref()
            .ok_or_else(|| NetworkError::InvalidUrl("no URL provided".to_string()))
    }

    async fn get(&self, url: &str) -> Result<Response, NetworkError> {
        debug!(url, "GET");
        let request = self
            .headers
            .iter()
            .fold(CLIENT.get(url), |request, (name, value)| {
                request.header(name.as_str(), value.as_str())
            });

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(NetworkError::HttpError {
                status: status.as_u16(),
                url: url.to_string(),
            })
        }
    }

    /// Streams the body into the configured file, creating parent
    /// directories. Nothing is left behind if the transfer fails.
    ///
    /// # Errors
    ///
    /// Returns a [`NetworkError`] if no URL or file is set, the server
    /// answers with a non-success status, or the file cannot be written.
    pub async fn download(&self) -> WordmaResult<()> {
        let url = self.target_url()?;
        let Some(path) = self.file.as_deref() else {
            return Err(NetworkError::DownloadFailed {
                url: url.to_string(),
                message: "no output file specified".to_string(),
            }
            .into());
        };
        let failed = |what: &str, e: std::io::Error| NetworkError::DownloadFailed {
            url: url.to_string(),
            message: format!("cannot {what} {}: {e}", path.display()),
        };

        let response = self.get(url).await?;
        let progress = self
            .show_progress
            .then(|| progress_for(response.content_length()));

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| failed("create the directory for", e))?;
        }
        let mut file = tokio::fs::File::create(path)
            .await
            .map_err(|e| failed("create", e))?;
        let mut cleanup = RemoveOnDrop(Some(path.to_path_buf()));

        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(NetworkError::Reqwest)?;
            file.write_all(&chunk).await.map_err(|e| failed("write", e))?;
            if let Some(bar) = &progress {
                bar.inc(chunk.len() as u64);
            }
        }
        file.flush().await.map_err(|e| failed("flush", e))?;
        cleanup.disarm();

        if let Some(bar) = progress {
            bar.finish_and_clear();
        }
        debug!(path = %path.display(), "downloaded");
        Ok(())
    }

    /// The whole body as text.
    ///
    /// # Errors
    ///
    /// Returns a [`NetworkError`] if no URL is set or the request fails.
    pub async fn download_string(&self) -> WordmaResult<String> {
        let url = self.target_url()?;
        let text = self.get(url).await?.text().await.map_err(NetworkError::Reqwest)?;
        Ok(text)
    }
}

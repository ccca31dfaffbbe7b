// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Replacing the running executable.
//!
//! ```text
//! download  -> <exe dir>/.wordma-update-XXXX   (tempfile, removed on drop)
//! backup    exe -> <exe>.backup
//! replace   temp -> exe           (Windows: exe -> <exe>.old first)
//!   failure: <exe>.backup -> exe
//! cleanup   rm <exe>.backup
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, warn};

use crate::error::{FsError, Result};
use crate::net::Downloader;

/// Release asset name for an OS/architecture pair as reported by
/// `std::env::consts`.
///
/// Returns `None` for platforms no asset is published for.
#[must_use]
pub fn asset_name(os: &str, arch: &str) -> Option<String> {
    let os = match os {
        "linux" => "linux",
        "macos" => "darwin",
        "windows" => "windows",
        _ => return None,
    };
    let arch = match arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        "arm" => "arm",
        _ => return None,
    };
    let ext = if os == "windows" { ".exe" } else { "" };
    Some(format!("wordma-{os}-{arch}{ext}"))
}

/// Asset name for the platform this binary was built for.
#[must_use]
pub fn current_asset_name() -> Option<String> {
    asset_name(std::env::consts::OS, std::env::consts::ARCH)
}

fn sibling(exe: &Path, suffix: &str) -> PathBuf {
    let mut name = exe.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Downloads `url` and installs it in place of `exe`.
///
/// # Errors
///
/// Returns an error if the download fails or the executable cannot be
/// replaced. On a failed replacement the previous executable is put back.
pub async fn install_update(url: &str, exe: &Path) -> Result<()> {
    let dir = exe
        .parent()
        .with_context(|| format!("executable has no parent directory: {}", exe.display()))?;
    let staged = tempfile::Builder::new()
        .prefix(".wordma-update-")
        .tempfile_in(dir)
        .map_err(|e| FsError::io(dir, e))?;

    Downloader::new()
        .url(url)
        .file(staged.path())
        .download()
        .await
        .context("failed to download update")?;

    replace_executable(staged.path(), exe)
}

/// Replaces `exe` with `new`, keeping a backup until the swap succeeded.
///
/// # Errors
///
/// Returns an error if the backup or the replacement fails.
pub fn replace_executable(new: &Path, exe: &Path) -> Result<()> {
    let backup = sibling(exe, ".backup");
    fs::copy(exe, &backup)
        .map_err(|e| FsError::io(&backup, e))
        .context("failed to backup current executable")?;

    if let Err(e) = swap_in(new, exe) {
        if let Err(restore) = fs::copy(&backup, exe) {
            warn!(error = %restore, backup = %backup.display(), "could not restore executable");
        }
        let _ = fs::remove_file(&backup);
        return Err(e.context("failed to replace executable"));
    }

    if let Err(e) = fs::remove_file(&backup) {
        debug!(error = %e, "leaving executable backup in place");
    }
    Ok(())
}

#[cfg(not(windows))]
fn swap_in(new: &Path, exe: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(new, fs::Permissions::from_mode(0o755))
        .map_err(|e| FsError::io(new, e))?;
    // A running binary can be replaced by copying over a fresh inode
    let _ = fs::remove_file(exe);
    fs::copy(new, exe).map_err(|e| FsError::io(exe, e))?;
    Ok(())
}

#[cfg(windows)]
fn swap_in(new: &Path, exe: &Path) -> Result<()> {
    if fs::copy(new, exe).is_ok() {
        return Ok(());
    }

    // The running executable is locked but can be renamed
    let old = sibling(exe, ".old");
    let _ = fs::remove_file(&old);
    fs::rename(exe, &old).map_err(|e| FsError::io(exe, e))?;
    if let Err(e) = fs::copy(new, exe) {
        let _ = fs::rename(&old, exe);
        return Err(FsError::io(exe, e).into());
    }
    let _ = fs::remove_file(&old);
    Ok(())
}

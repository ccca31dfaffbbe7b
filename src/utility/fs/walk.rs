// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use ignore::{DirEntry, WalkBuilder};

use crate::error::Result;

/// Which files [`list_files`] reports.
///
/// The default mirrors what `git status` would look at: dotfiles and
/// ignored paths are left out.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    #[builder(setters(name = with_hidden), default = false)]
    hidden: bool,
    /// Honour `.gitignore`, `.ignore` and git's exclude files.
    #[builder(setters(name = with_gitignore), default = true)]
    gitignore: bool,
    /// Directory names never descended into, wherever they appear.
    #[builder(setters(name = with_skip_dirs), default)]
    skip_dirs: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    /// Every regular file, hidden or ignored ones included.
    ///
    /// Config snapshots use this: a dotfile or a file the theme's
    /// `.gitignore` excludes is still user configuration.
    #[must_use]
    pub fn exhaustive() -> Self {
        Self::builder()
            .with_hidden(true)
            .with_gitignore(false)
            .build()
    }

    fn walker(&self, root: &Path) -> WalkBuilder {
        let mut walker = WalkBuilder::new(root);
        walker
            .hidden(!self.hidden)
            .ignore(self.gitignore)
            .parents(self.gitignore)
            .git_ignore(self.gitignore)
            .git_global(self.gitignore)
            .git_exclude(self.gitignore);

        if !self.skip_dirs.is_empty() {
            let skip_dirs = self.skip_dirs.clone();
            walker.filter_entry(move |entry| !is_skipped(entry, &skip_dirs));
        }
        walker
    }
}

fn is_skipped(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir())
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| skip_dirs.iter().any(|skip| skip == name))
}

/// Lists the regular files under `root`, relative to it and sorted.
///
/// # Errors
///
/// Returns an error if `root` does not exist or an entry cannot be read.
///
/// # Example
/// ```no_run
/// use wordma_rs::utility::fs::walk::{list_files, WalkOptions};
///
/// let files = list_files("themes/aurora/config", &WalkOptions::exhaustive())?;
/// println!("{} config files", files.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn list_files<P: AsRef<Path>>(root: P, options: &WalkOptions) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    anyhow::ensure!(root.exists(), "directory does not exist: {}", root.display());

    let mut files = options
        .walker(root)
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) if !entry.file_type().is_some_and(|ft| ft.is_file()) => None,
            Ok(entry) => entry
                .path()
                .strip_prefix(root)
                .ok()
                .map(|relative| Ok(relative.to_path_buf())),
            Err(e) => Some(Err(e)),
        })
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("failed to walk {}", root.display()))?;
    files.sort();
    Ok(files)
}

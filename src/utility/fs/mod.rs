// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities for theme snapshots and scaffolding.
//!
//! ```text
//! walk:  list_files()     ignore::Walk, relative sorted file list
//!        WalkOptions      hidden, gitignore, skip_dirs
//! copy:  copy_dir_all()   recursive copy, keeps permission bits
//!        remove_dir_if_exists()  absent path is not an error
//! ```

pub mod copy;
pub mod walk;

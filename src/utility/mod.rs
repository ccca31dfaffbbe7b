// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   walk:  list_files(), WalkOptions
//!   copy:  copy_dir_all(), remove_dir_if_exists()
//! ```

pub mod fs;

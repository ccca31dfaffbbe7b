// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!     theme update              scaffolding
//!          |                  (init, add, deploy)
//!          v                        |
//!   ,------------------,            v
//!   | backend (traits) |         cmd.rs
//!   '--+----------+----'     clone / init_repo
//!      |          |          (async, terminal
//!      v          v           shows progress)
//!  GitQuery   GitMutation
//!  status     fetch/pull
//!  branch     stash push/pop
//!             add/reset
//!      \          /
//!       v        v
//!     ShellBackend
//!    (sync git CLI)
//! ```
//!
//! Nothing here reads `.git` directly; the theme locator only tests for its
//! existence.

pub mod backend;
pub mod cmd;

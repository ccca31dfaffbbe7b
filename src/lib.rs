// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |     init / add / update / deploy / ...
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!               theme        git    release
//!          classify, snap-  status,  version check,
//!          shot, stash,     stash,   self-update
//!          reconcile        pull        |
//!                 |                     v
//!              project                 net
//!          root, themes/            HTTP/DL
//!
//!   +-----------------------------------------+
//!   |  core   process runner, external tools  |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, console,  |
//!   |               build_info, utility       |
//!   +-----------------------------------------+
//! ```

pub mod build_info;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod console;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod net;
pub mod project;
pub mod release;
pub mod theme;
pub mod utility;

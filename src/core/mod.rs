// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process management and external tools.
//!
//! ```text
//!              core
//!               |
//!         +-----+-----+
//!         v           v
//!      process      tools
//!         |           |
//!      Builder     Tool { Node, Pnpm, Git }
//!      Output      lookup, --version probe,
//!                  per-OS install hints
//! ```

pub mod process;
pub mod tools;

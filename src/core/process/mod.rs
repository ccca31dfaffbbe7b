// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Running the external tools wordma drives (pnpm, node, git).
//!
//! Two shapes cover every caller: pnpm scripts and `git clone` own the
//! terminal, while version probes and `git init` are piped back and read.
//!
//! ```text
//! ProcessBuilder::which("pnpm")?            resolved via PATH
//!   .args(["run", "dev"]).cwd(theme)
//!   .inherit_stdio()                        Stream::Terminal
//!   .run().await
//!        |
//!        v
//!   tokio::process::Command
//!   piped streams drained line by line      Capture::TRACE | Capture::KEEP
//!   optional timeout, then kill
//!        |
//!        v
//!   ProcessOutput { code, stdout, stderr }  or ProcessError
//! ```

pub mod builder;
mod run;
#[cfg(test)]
mod tests;

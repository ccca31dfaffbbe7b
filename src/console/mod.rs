// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! User-facing console output and prompts.
//!
//! ```text
//!   Report (trait)
//!     report(Severity, msg)   ✓ success  ✗ error  ⚠ warning  ℹ info
//!     detail(line)            "  <line>" (plain, indented)
//!        |
//!   +----+-------------+
//!   v                  v
//! Console          MemoryConsole
//! (stdout/stderr)  (records lines, for tests)
//!
//!   prompt_line(question) -> trimmed line ("" on EOF)
//!   confirm(question)     -> y / yes
//! ```

use std::cell::RefCell;
use std::fmt;
use std::io::{self, BufRead, Write};

use colored::Colorize;

/// Kind of a reported message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Glyph printed in front of the message.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }

    fn colored_glyph(self) -> String {
        let glyph = self.glyph();
        match self {
            Self::Success => glyph.green().to_string(),
            Self::Error => glyph.red().to_string(),
            Self::Warning => glyph.yellow().to_string(),
            Self::Info => glyph.blue().to_string(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Sink for user-facing messages.
pub trait Report {
    /// Print a message prefixed by its severity glyph.
    fn report(&self, severity: Severity, message: &str);

    /// Print an indented plain line (hints, paths, commands to run).
    fn detail(&self, line: &str);

    fn success(&self, message: &str) {
        self.report(Severity::Success, message);
    }

    fn error(&self, message: &str) {
        self.report(Severity::Error, message);
    }

    fn warning(&self, message: &str) {
        self.report(Severity::Warning, message);
    }

    fn info(&self, message: &str) {
        self.report(Severity::Info, message);
    }
}

/// Terminal reporter. Errors and warnings go to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Report for Console {
    fn report(&self, severity: Severity, message: &str) {
        let line = format!("{} {message}", severity.colored_glyph());
        match severity {
            Severity::Error | Severity::Warning => eprintln!("{line}"),
            Severity::Success | Severity::Info => println!("{line}"),
        }
    }

    fn detail(&self, line: &str) {
        println!("  {line}");
    }
}

/// Reporter that keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: RefCell<Vec<String>>,
}

impl MemoryConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines, glyph-prefixed like the terminal output.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Whether any recorded line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|l| l.contains(needle))
    }

    /// Number of lines reported with `severity`.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        let prefix = format!("{} ", severity.glyph());
        self.lines
            .borrow()
            .iter()
            .filter(|l| l.starts_with(&prefix))
            .count()
    }
}

impl Report for MemoryConsole {
    fn report(&self, severity: Severity, message: &str) {
        self.lines
            .borrow_mut()
            .push(format!("{} {message}", severity.glyph()));
    }

    fn detail(&self, line: &str) {
        self.lines.borrow_mut().push(format!("  {line}"));
    }
}

/// Ask a question on stdout and read one trimmed line from stdin.
///
/// Returns an empty string on EOF or when stdin is not readable.
#[must_use]
pub fn prompt_line(question: &str) -> String {
    print!("{question}");
    io::stdout().flush().ok();
    read_answer(&mut io::stdin().lock())
}

/// Ask a yes/no question; only `y` or `yes` (any case) confirm.
#[must_use]
pub fn confirm(question: &str) -> bool {
    is_yes(&prompt_line(question))
}

pub(crate) fn read_answer(reader: &mut impl BufRead) -> String {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(_) => line.trim().to_string(),
        Err(_) => String::new(),
    }
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests;

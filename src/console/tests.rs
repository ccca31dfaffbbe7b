// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{MemoryConsole, Report, Severity, is_yes, read_answer};
use std::io::Cursor;

#[test]
fn test_memory_console_records_glyphs() {
    let console = MemoryConsole::new();
    console.success("done");
    console.warning("careful");
    console.detail("git stash pop");

    assert_eq!(
        console.lines(),
        vec!["✓ done", "⚠ careful", "  git stash pop"]
    );
    assert_eq!(console.count(Severity::Warning), 1);
    assert_eq!(console.count(Severity::Error), 0);
    assert!(console.contains("stash pop"));
}

#[test]
fn test_read_answer_trims_line() {
    let mut input = Cursor::new("  2 \nignored\n");
    assert_eq!(read_answer(&mut input), "2");
}

#[test]
fn test_read_answer_eof_is_empty() {
    let mut input = Cursor::new("");
    assert_eq!(read_answer(&mut input), "");
}

#[test]
fn test_is_yes() {
    assert!(is_yes("y"));
    assert!(is_yes("YES"));
    assert!(!is_yes(""));
    assert!(!is_yes("n"));
    assert!(!is_yes("yep"));
}

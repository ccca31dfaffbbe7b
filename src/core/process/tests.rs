// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use super::builder::{Capture, ProcessBuilder, Stream};
use crate::error::ProcessError;

fn sh(script: &str) -> ProcessBuilder {
    ProcessBuilder::new("/bin/sh").args(["-c", script])
}

#[tokio::test]
async fn test_stdout_is_kept_when_captured() {
    let output = sh("echo one; echo two").capture_stdout().run().await.unwrap();

    assert!(output.success());
    assert_eq!(output.stdout(), "one\ntwo");
    assert_eq!(output.stderr(), "");
}

#[tokio::test]
async fn test_streams_are_kept_apart() {
    let output = sh("echo out; echo err >&2")
        .capture_stdout()
        .capture_stderr()
        .run()
        .await
        .unwrap();

    assert_eq!(output.stdout(), "out");
    assert_eq!(output.stderr(), "err");
}

#[tokio::test]
async fn test_non_zero_exit_is_an_error() {
    let err = sh("exit 3").run().await.unwrap_err();

    match err.downcast_ref::<ProcessError>() {
        Some(ProcessError::NonZeroExit { code, command }) => {
            assert_eq!(*code, 3);
            assert_eq!(command, "sh -c \"exit 3\"");
        }
        other => panic!("expected NonZeroExit, got {other:?}"),
    }
}

#[tokio::test]
async fn test_env_and_cwd_apply() {
    let temp = tempfile::tempdir().unwrap();
    let output = sh("echo \"$WORDMA_PROBE\"; pwd")
        .env("WORDMA_PROBE", "aurora")
        .cwd(temp.path())
        .capture_stdout()
        .run()
        .await
        .unwrap();

    let mut lines = output.stdout().lines();
    assert_eq!(lines.next(), Some("aurora"));
    let cwd = std::path::Path::new(lines.next().unwrap()).canonicalize().unwrap();
    assert_eq!(cwd, temp.path().canonicalize().unwrap());
}

#[tokio::test]
async fn test_slow_process_is_killed() {
    let err = sh("sleep 5")
        .timeout(Duration::from_millis(100))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ProcessError>(),
        Some(ProcessError::TimedOut { .. })
    ));
}

#[tokio::test]
async fn test_missing_program_is_reported() {
    let err = ProcessBuilder::new("wordma_missing_tool_12345")
        .run()
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ProcessError>(),
        Some(ProcessError::ExecutableNotFound { name }) if name == "wordma_missing_tool_12345"
    ));
}

#[test]
fn test_which_resolves_git() {
    let git = ProcessBuilder::which("git").unwrap();
    assert!(git.program().is_absolute());
    assert_eq!(git.label(), "git");
    assert!(ProcessBuilder::exists("git"));
}

#[test]
fn test_which_reports_missing_program() {
    let err = ProcessBuilder::which("wordma_missing_tool_12345").unwrap_err();
    assert!(err.to_string().contains("wordma_missing_tool_12345"));
    assert!(!ProcessBuilder::exists("wordma_missing_tool_12345"));
}

#[test]
fn test_stream_capture_modes() {
    assert_eq!(Stream::default().capture(), Capture::TRACE);
    assert!(Stream::Terminal.capture().is_empty());
}

#[test]
fn test_command_line_quotes_spaces() {
    let git = ProcessBuilder::new("/usr/bin/git").args(["commit", "-m", "two words"]);
    assert_eq!(git.to_string(), "git commit -m \"two words\"");
}

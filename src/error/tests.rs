// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, StashStep, ThemeError, WordmaError, WordmaResult, bail_out, is_reported};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "release".to_string(),
        key: "repo".to_string(),
        message: "expected owner/name".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'repo' in section '[release]': expected owner/name");
}

#[test]
fn test_stash_failure_names_the_step() {
    let err = ThemeError::StashFailed {
        step: StashStep::UnstageConfig,
        message: "index.lock exists".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"failed to unstage config files: index.lock exists");
}

#[test]
fn test_theme_error_is_transparent_in_wordma_error() {
    let err: WordmaError = ThemeError::NotFound {
        name: "aurora".to_string(),
        available: vec!["nova (git repository)".to_string()],
    }
    .into();
    assert_eq!(err.to_string(), "theme 'aurora' not found in themes directory");
}

#[test]
fn test_wordma_error_size() {
    // Box<str> variants (Bailed, Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<WordmaError>();
    assert!(size <= 24, "WordmaError is {size} bytes, expected <= 24");
}

#[test]
fn test_wordma_result_size() {
    let size = std::mem::size_of::<WordmaResult<()>>();
    assert!(size <= 24, "WordmaResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_bailed_errors_are_reported() {
    let bailed: anyhow::Error = bail_out("theme not found").into();
    assert!(is_reported(&bailed));

    let other: anyhow::Error = WordmaError::Other("boom".into()).into();
    assert!(!is_reported(&other));
    assert!(!is_reported(&anyhow::anyhow!("plain")));
}

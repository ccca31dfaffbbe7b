// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::cmp::Ordering;
use std::fmt;

/// A `major.minor.patch` version, or a development build.
///
/// Parsing is lenient: a leading `v` is dropped, missing or non-numeric
/// components count as `0`, and anything after the third component is
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    /// `dev`, older than every release.
    Dev,
    Release([u64; 3]),
}

impl Version {
    /// Parses a version string or release tag.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input == "dev" {
            return Self::Dev;
        }

        let mut parts = [0; 3];
        for (slot, part) in parts
            .iter_mut()
            .zip(input.trim_start_matches('v').split('.'))
        {
            *slot = part.parse().unwrap_or(0);
        }
        Self::Release(parts)
    }

    #[must_use]
    pub const fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    /// Whether `other` is a newer version than `self`.
    #[must_use]
    pub fn is_older_than(&self, other: &Self) -> bool {
        self < other
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Dev, Self::Dev) => Ordering::Equal,
            (Self::Dev, Self::Release(_)) => Ordering::Less,
            (Self::Release(_), Self::Dev) => Ordering::Greater,
            (Self::Release(a), Self::Release(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dev => f.write_str("dev"),
            Self::Release([major, minor, patch]) => write!(f, "{major}.{minor}.{patch}"),
        }
    }
}

// SPDX-License-Identifier: Apache-2.0

//! Loose semantic-version parsing and canonical milestone formatting.
//!
//! Milestone titles and user-supplied specifications share one grammar:
//! `v?<major>(.<minor>(.<patch>)?)?` with non-negative integer components.
//! Anything else (extra components, non-numeric parts, empty string) is
//! not a version. No ranges, comparators, or pre-release/build metadata.

/// Parsed form of a version token.
///
/// `minor` and `patch` are optional; a token cannot specify a patch
/// without a minor. The source token is kept in `original` so exact-title
/// milestone matching and error messages can refer to what the user
/// actually typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec {
    /// Major component, always present.
    pub major: u64,
    /// Minor component, absent when the token names a whole major line.
    pub minor: Option<u64>,
    /// Patch component, absent unless the token is fully qualified.
    pub patch: Option<u64>,
    /// The token as supplied, including any `v` prefix.
    pub original: String,
}

impl VersionSpec {
    /// Parses a version token, accepting an optional leading `v`.
    ///
    /// Returns `None` for anything outside the grammar; there is no
    /// zero-value fallback.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let bare = token.strip_prefix('v').unwrap_or(token);
        if bare.is_empty() {
            return None;
        }

        let parts: Vec<&str> = bare.split('.').collect();
        if parts.len() > 3 {
            return None;
        }

        let mut components = parts.iter().map(|p| p.parse::<u64>().ok());
        let major = components.next().flatten()?;
        let minor = match components.next() {
            Some(value) => Some(value?),
            None => None,
        };
        let patch = match components.next() {
            Some(value) => Some(value?),
            None => None,
        };

        Some(Self {
            major,
            minor,
            patch,
            original: token.to_string(),
        })
    }
}

/// Renders a fully-qualified `major.minor.patch` milestone title.
///
/// Always three components, never a `v` prefix.
#[must_use]
pub fn format_milestone(major: u64, minor: u64, patch: u64) -> String {
    format!("{major}.{minor}.{patch}")
}

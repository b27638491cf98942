// SPDX-License-Identifier: Apache-2.0

//! Extracts the `/duplicate` command from free-text issue comments.

/// The trigger word scanned for at the start of a comment line.
pub const TRIGGER: &str = "/duplicate";

/// Scans a comment body for a `/duplicate` command line.
///
/// The first line beginning with the trigger word followed by whitespace
/// wins; the remainder is split on commas, each token trimmed, and empty
/// tokens dropped.
///
/// Returns `None` when no trigger line exists (the comment is not for
/// this handler). Returns `Some(vec![])` when a trigger line is present
/// but carries no tokens - callers must treat that as a user error, not
/// as "not applicable".
#[must_use]
pub fn parse_duplicate_command(body: &str) -> Option<Vec<String>> {
    for line in body.lines() {
        let Some(rest) = line.trim().strip_prefix(TRIGGER) else {
            continue;
        };
        // Require whitespace after the trigger so `/duplicated ...` is
        // not recognized.
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }

        let specs = rest
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(ToString::to_string)
            .collect();
        return Some(specs);
    }

    None
}

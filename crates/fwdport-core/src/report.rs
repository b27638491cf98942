// SPDX-License-Identifier: Apache-2.0

//! Rendering of the comments fwdport posts back on the triggering issue.

use std::fmt::Write;

use crate::duplicate::DuplicationOutcome;

/// Renders the summary comment for a processed `/duplicate` command.
///
/// Fixed header, attribution to the commenter, one status line per
/// outcome in input order, and the first line of the triggering comment
/// quoted at the end.
#[must_use]
pub fn render_summary(
    commenter: &str,
    comment_body: &str,
    outcomes: &[DuplicationOutcome],
) -> String {
    let mut body = String::from("## Issue duplication results\n\n");
    let _ = writeln!(body, "Requested by @{commenter}\n");

    for outcome in outcomes {
        body.push_str(&outcome_line(outcome));
        body.push('\n');
    }

    let trigger_line = comment_body.lines().next().unwrap_or_default();
    let _ = write!(body, "\n> {trigger_line}");
    body
}

/// One status line per outcome, markdown-linked for successes.
fn outcome_line(outcome: &DuplicationOutcome) -> String {
    match outcome {
        DuplicationOutcome::Success {
            milestone,
            milestone_created,
            number,
            url,
        } => {
            let mut line = format!("✅ Created [#{number}]({url}) for milestone `{milestone}`");
            if *milestone_created {
                line.push_str(" (milestone created)");
            }
            line
        }
        DuplicationOutcome::Failure { milestone, message } => {
            format!("❌ `{milestone}`: {message}")
        }
    }
}

/// The fixed-format reply for a comment the parser could not use: either
/// no `/duplicate` line at all, or one with no specifications.
///
/// This path never touches milestones or issues.
#[must_use]
pub fn render_usage_error() -> String {
    "⚠️ Invalid `/duplicate` command.\n\n\
     Usage: `/duplicate <version>[, <version>...]`\n\n\
     Each version may be a major (`2`), major.minor (`2.1`), full \
     `major.minor.patch` (`2.1.3`, optionally `v`-prefixed), or an exact \
     milestone title."
        .to_string()
}

/// The generic reply for a failure in shared setup (issue fetch,
/// milestone listing). Posted instead of a summary.
#[must_use]
pub fn render_unexpected_error(message: &str) -> String {
    format!("⚠️ An error occurred while duplicating this issue:\n\n```\n{message}\n```")
}

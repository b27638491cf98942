// SPDX-License-Identifier: Apache-2.0

//! Top-level handling of one `issue_comment` event.
//!
//! One run is a single logical thread of control: parse the comment,
//! read the world fresh (issue, open and closed milestones), resolve
//! specifications sequentially, duplicate, report. Failures local to one
//! specification become result lines; failures in shared setup abort the
//! run with a generic error comment and no summary.

use anyhow::{Context, Result};
use tracing::{debug, instrument, warn};

use crate::command::parse_duplicate_command;
use crate::duplicate::duplicate_issue;
use crate::event::IssueCommentEvent;
use crate::milestone::MilestoneState;
use crate::platform::Platform;
use crate::report;
use crate::resolver::resolve_specs;

/// Handles one triggering event end to end.
///
/// On an unexpected failure a generic error comment is posted
/// (best-effort) and the underlying error is returned so the invoking
/// environment sees a failed run.
#[instrument(skip(platform, event), fields(issue = event.issue.number))]
pub async fn run<P: Platform + ?Sized>(platform: &P, event: &IssueCommentEvent) -> Result<()> {
    match handle(platform, event).await {
        Ok(()) => Ok(()),
        Err(err) => {
            warn!(error = %err, "Run failed, posting error comment");
            let body = report::render_unexpected_error(&format!("{err:#}"));
            if let Err(post_err) = platform.create_comment(event.issue.number, &body).await {
                warn!(error = %post_err, "Failed to post error comment");
            }
            Err(err)
        }
    }
}

async fn handle<P: Platform + ?Sized>(platform: &P, event: &IssueCommentEvent) -> Result<()> {
    let issue_number = event.issue.number;
    let comment_body = event.comment.body.as_deref().unwrap_or_default();

    let specs = match parse_duplicate_command(comment_body) {
        None => {
            // Trigger wiring fired for a comment without a usable command
            // line; tell the user what the handler expected.
            debug!("Comment carries no /duplicate command line");
            platform
                .create_comment(issue_number, &report::render_usage_error())
                .await
                .context("Failed to post usage comment")?;
            return Ok(());
        }
        Some(specs) if specs.is_empty() => {
            debug!("Duplicate command names no versions");
            platform
                .create_comment(issue_number, &report::render_usage_error())
                .await
                .context("Failed to post usage comment")?;
            return Ok(());
        }
        Some(specs) => specs,
    };

    debug!(specs = ?specs, "Parsed duplicate command");

    let original = platform
        .get_issue(issue_number)
        .await
        .context("Failed to fetch the original issue")?;

    // Both states up front: the next-version computation must see closed
    // milestones.
    let mut milestones = platform
        .list_milestones(MilestoneState::Open)
        .await
        .context("Failed to list open milestones")?;
    milestones.extend(
        platform
            .list_milestones(MilestoneState::Closed)
            .await
            .context("Failed to list closed milestones")?,
    );
    debug!(milestones = milestones.len(), "Fetched milestone set");

    let targets = resolve_specs(platform, &specs, &mut milestones).await;
    let outcomes = duplicate_issue(platform, &original, issue_number, &targets).await;

    let summary = report::render_summary(&event.comment.user.login, comment_body, &outcomes);
    platform
        .create_comment(issue_number, &summary)
        .await
        .context("Failed to post summary comment")?;

    Ok(())
}

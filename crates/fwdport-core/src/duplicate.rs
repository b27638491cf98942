// SPDX-License-Identifier: Apache-2.0

//! Issue duplication across resolved milestones.
//!
//! One create-issue call per resolved target, in input order. A failed
//! target never aborts the remaining ones; every target ends up as
//! exactly one [`DuplicationOutcome`] for the report.

use tracing::{debug, instrument, warn};

use crate::platform::{IssueDetails, NewIssue, Platform};
use crate::resolver::ResolvedTarget;

/// Label attached to every duplicated issue.
pub const FORWARD_PORT_LABEL: &str = "forward-port";

/// Result of duplicating the issue into one target milestone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuplicationOutcome {
    /// A duplicate was created.
    Success {
        /// Target milestone title.
        milestone: String,
        /// Whether the milestone itself was created during this run.
        milestone_created: bool,
        /// Number of the new issue.
        number: u64,
        /// Web URL of the new issue.
        url: String,
    },
    /// The target carried a resolution error, or issue creation failed.
    Failure {
        /// Target milestone title or the offending specification.
        milestone: String,
        /// The error message, platform messages verbatim.
        message: String,
    },
}

/// Duplicates `original` into every resolved target, in order.
#[instrument(skip(platform, original, targets), fields(issue = issue_number, targets = targets.len()))]
pub async fn duplicate_issue<P: Platform + ?Sized>(
    platform: &P,
    original: &IssueDetails,
    issue_number: u64,
    targets: &[ResolvedTarget],
) -> Vec<DuplicationOutcome> {
    let mut outcomes = Vec::with_capacity(targets.len());

    for target in targets {
        let outcome = match target {
            // Resolution already failed; no API call for this target.
            ResolvedTarget::Failed { name, error } => DuplicationOutcome::Failure {
                milestone: name.clone(),
                message: error.clone(),
            },
            ResolvedTarget::Milestone {
                name,
                number,
                created,
            } => {
                let request = NewIssue {
                    title: original.title.clone(),
                    body: duplicate_body(issue_number, name, &original.body),
                    milestone: *number,
                    labels: labels_with_marker(&original.labels),
                    assignees: original.assignees.clone(),
                };
                match platform.create_issue(request).await {
                    Ok(issue) => {
                        debug!(milestone = %name, number = issue.number, "Duplicate created");
                        DuplicationOutcome::Success {
                            milestone: name.clone(),
                            milestone_created: *created,
                            number: issue.number,
                            url: issue.url,
                        }
                    }
                    Err(err) => {
                        warn!(milestone = %name, error = %err, "Duplicate creation failed");
                        DuplicationOutcome::Failure {
                            milestone: name.clone(),
                            message: err.to_string(),
                        }
                    }
                }
            }
        };
        outcomes.push(outcome);
    }

    outcomes
}

/// Builds the duplicate's body: a provenance header, a separator, then
/// the original body verbatim.
fn duplicate_body(issue_number: u64, milestone: &str, original_body: &str) -> String {
    format!("Duplicate of #{issue_number} for milestone {milestone}\n\n---\n\n{original_body}")
}

/// Original labels plus the forward-port marker, without duplicating it.
fn labels_with_marker(labels: &[String]) -> Vec<String> {
    let mut labels = labels.to_vec();
    if !labels.iter().any(|l| l == FORWARD_PORT_LABEL) {
        labels.push(FORWARD_PORT_LABEL.to_string());
    }
    labels
}

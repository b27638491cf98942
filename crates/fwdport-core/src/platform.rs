// SPDX-License-Identifier: Apache-2.0

//! Hosting-platform collaborator seam.
//!
//! The handler only talks to the platform through [`Platform`], so the
//! resolution and duplication logic can be exercised against in-memory
//! implementations. The production implementation is
//! [`crate::github::GitHubClient`].

use async_trait::async_trait;

use crate::Result;
use crate::milestone::{Milestone, MilestoneState};

/// The issue being duplicated, as read fresh at the start of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDetails {
    /// Issue title, copied unchanged onto duplicates.
    pub title: String,
    /// Issue body; empty string when the issue has none.
    pub body: String,
    /// Label names on the issue.
    pub labels: Vec<String>,
    /// Assignee logins on the issue.
    pub assignees: Vec<String>,
}

/// Request payload for creating one duplicated issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    /// Title, same as the original issue.
    pub title: String,
    /// Constructed duplicate body.
    pub body: String,
    /// Target milestone number.
    pub milestone: u64,
    /// Original labels plus the forward-port marker.
    pub labels: Vec<String>,
    /// Original assignees.
    pub assignees: Vec<String>,
}

/// A freshly created issue, as reported back by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    /// Issue number.
    pub number: u64,
    /// Web URL of the issue.
    pub url: String,
}

/// Platform operations consumed by the handler.
///
/// All calls are blocking, ordered operations from the handler's point of
/// view; any retry or backoff policy lives behind this trait, not in the
/// resolution logic.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Fetches the issue being duplicated.
    async fn get_issue(&self, number: u64) -> Result<IssueDetails>;

    /// Lists milestones in the given state.
    ///
    /// The handler calls this for both states and concatenates the
    /// results before resolution begins; closed-milestone visibility is
    /// required by the next-version computation.
    async fn list_milestones(&self, state: MilestoneState) -> Result<Vec<Milestone>>;

    /// Creates an open milestone with the given title.
    async fn create_milestone(&self, title: &str) -> Result<Milestone>;

    /// Creates a duplicated issue.
    async fn create_issue(&self, issue: NewIssue) -> Result<CreatedIssue>;

    /// Posts a comment on the triggering issue.
    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<()>;
}

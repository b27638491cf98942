// SPDX-License-Identifier: Apache-2.0

//! GitHub REST implementation of the [`Platform`] collaborator.
//!
//! Issues and comments go through octocrab's typed API; the milestones
//! endpoints are not covered by octocrab's high-level handlers, so those
//! use raw routes with our own serde models.

use async_trait::async_trait;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use crate::Result;
use crate::error::FwdportError;
use crate::milestone::{Milestone, MilestoneState};
use crate::platform::{CreatedIssue, IssueDetails, NewIssue, Platform};

/// Parses an `owner/repo` slug as supplied by `GITHUB_REPOSITORY`.
///
/// Validates format: exactly one `/`, non-empty parts.
pub fn parse_repo_slug(slug: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = slug.split('/').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(FwdportError::InvalidRepo {
            slug: slug.to_string(),
        });
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

/// Octocrab-backed GitHub client scoped to one repository.
pub struct GitHubClient {
    client: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubClient {
    /// Builds a client for `owner/repo` authenticated with a token.
    pub fn new(owner: String, repo: String, token: &SecretString) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.expose_secret().to_string())
            .build()?;
        Ok(Self {
            client,
            owner,
            repo,
        })
    }

    /// Builds a client from an `owner/repo` slug.
    pub fn from_slug(slug: &str, token: &SecretString) -> Result<Self> {
        let (owner, repo) = parse_repo_slug(slug)?;
        Self::new(owner, repo, token)
    }
}

#[async_trait]
impl Platform for GitHubClient {
    #[instrument(skip(self), fields(owner = %self.owner, repo = %self.repo))]
    async fn get_issue(&self, number: u64) -> Result<IssueDetails> {
        debug!("Fetching issue");

        let issue = self
            .client
            .issues(&self.owner, &self.repo)
            .get(number)
            .await?;

        Ok(IssueDetails {
            title: issue.title,
            body: issue.body.unwrap_or_default(),
            labels: issue.labels.iter().map(|l| l.name.clone()).collect(),
            assignees: issue.assignees.iter().map(|a| a.login.clone()).collect(),
        })
    }

    #[instrument(skip(self), fields(owner = %self.owner, repo = %self.repo, state = state.as_str()))]
    async fn list_milestones(&self, state: MilestoneState) -> Result<Vec<Milestone>> {
        let route = format!(
            "/repos/{}/{}/milestones?state={}&per_page=100",
            self.owner,
            self.repo,
            state.as_str()
        );
        let milestones: Vec<Milestone> = self.client.get(&route, None::<&()>).await?;

        debug!(count = milestones.len(), "Listed milestones");
        Ok(milestones)
    }

    #[instrument(skip(self), fields(owner = %self.owner, repo = %self.repo))]
    async fn create_milestone(&self, title: &str) -> Result<Milestone> {
        debug!("Creating milestone");

        let route = format!("/repos/{}/{}/milestones", self.owner, self.repo);
        let payload = serde_json::json!({ "title": title, "state": "open" });
        let milestone: Milestone = self.client.post(&route, Some(&payload)).await?;

        debug!(number = milestone.number, "Milestone created");
        Ok(milestone)
    }

    #[instrument(skip(self, issue), fields(owner = %self.owner, repo = %self.repo, milestone = issue.milestone))]
    async fn create_issue(&self, issue: NewIssue) -> Result<CreatedIssue> {
        debug!("Creating duplicate issue");

        let created = self
            .client
            .issues(&self.owner, &self.repo)
            .create(issue.title)
            .body(issue.body)
            .milestone(issue.milestone)
            .labels(issue.labels)
            .assignees(issue.assignees)
            .send()
            .await?;

        debug!(number = created.number, "Issue created");
        Ok(CreatedIssue {
            number: created.number,
            url: created.html_url.to_string(),
        })
    }

    #[instrument(skip(self, body), fields(owner = %self.owner, repo = %self.repo))]
    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<()> {
        debug!("Posting comment");

        self.client
            .issues(&self.owner, &self.repo)
            .create_comment(issue_number, body)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_repo_slug_valid() {
        let (owner, repo) = parse_repo_slug("octo-org/widgets").unwrap();
        assert_eq!(owner, "octo-org");
        assert_eq!(repo, "widgets");
    }

    #[test]
    fn parse_repo_slug_invalid() {
        assert!(parse_repo_slug("widgets").is_err());
        assert!(parse_repo_slug("a/b/c").is_err());
        assert!(parse_repo_slug("/widgets").is_err());
        assert!(parse_repo_slug("octo-org/").is_err());
    }

    #[test]
    fn milestone_deserializes_from_api_shape() {
        let raw = r#"{
            "url": "https://api.github.com/repos/o/r/milestones/3",
            "number": 3,
            "title": "1.2.0",
            "state": "open",
            "open_issues": 4
        }"#;
        let milestone: Milestone = serde_json::from_str(raw).unwrap();
        assert_eq!(milestone.title, "1.2.0");
        assert_eq!(milestone.number, 3);
        assert_eq!(milestone.state, MilestoneState::Open);
    }
}

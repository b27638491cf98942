// SPDX-License-Identifier: Apache-2.0

//! End-to-end handler tests against an in-memory platform.
//!
//! Cover the shared-mutable-milestone ordering guarantee, partial-failure
//! reporting, and the comment-level error paths without touching the
//! GitHub API.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use fwdport_core::event::{EventComment, EventIssue, EventUser, IssueCommentEvent};
use fwdport_core::{
    CreatedIssue, FwdportError, IssueDetails, Milestone, MilestoneState, NewIssue, Platform,
};

const ISSUE_NUMBER: u64 = 17;

struct MockPlatform {
    issue: IssueDetails,
    milestones: Mutex<Vec<Milestone>>,
    next_milestone_number: AtomicU64,
    next_issue_number: AtomicU64,
    created_milestones: Mutex<Vec<String>>,
    created_issues: Mutex<Vec<NewIssue>>,
    comments: Mutex<Vec<String>>,
    fail_get_issue: bool,
    fail_milestone_creation: bool,
    fail_issue_creation_for_milestone: Option<u64>,
}

impl MockPlatform {
    fn new(milestones: Vec<Milestone>) -> Self {
        Self {
            issue: IssueDetails {
                title: "Crash on startup".to_string(),
                body: "Steps to reproduce: run it.".to_string(),
                labels: vec!["bug".to_string()],
                assignees: vec!["alice".to_string()],
            },
            milestones: Mutex::new(milestones),
            next_milestone_number: AtomicU64::new(100),
            next_issue_number: AtomicU64::new(500),
            created_milestones: Mutex::new(Vec::new()),
            created_issues: Mutex::new(Vec::new()),
            comments: Mutex::new(Vec::new()),
            fail_get_issue: false,
            fail_milestone_creation: false,
            fail_issue_creation_for_milestone: None,
        }
    }

    fn comments(&self) -> Vec<String> {
        self.comments.lock().unwrap().clone()
    }

    fn created_issues(&self) -> Vec<NewIssue> {
        self.created_issues.lock().unwrap().clone()
    }

    fn created_milestones(&self) -> Vec<String> {
        self.created_milestones.lock().unwrap().clone()
    }
}

#[async_trait]
impl Platform for MockPlatform {
    async fn get_issue(&self, number: u64) -> fwdport_core::Result<IssueDetails> {
        if self.fail_get_issue {
            return Err(FwdportError::GitHub {
                message: format!("Not Found: issue #{number}"),
            });
        }
        Ok(self.issue.clone())
    }

    async fn list_milestones(&self, state: MilestoneState) -> fwdport_core::Result<Vec<Milestone>> {
        Ok(self
            .milestones
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.state == state)
            .cloned()
            .collect())
    }

    async fn create_milestone(&self, title: &str) -> fwdport_core::Result<Milestone> {
        if self.fail_milestone_creation {
            return Err(FwdportError::GitHub {
                message: "Validation Failed: already_exists".to_string(),
            });
        }
        let milestone = Milestone {
            title: title.to_string(),
            number: self.next_milestone_number.fetch_add(1, Ordering::SeqCst),
            state: MilestoneState::Open,
        };
        self.created_milestones
            .lock()
            .unwrap()
            .push(title.to_string());
        self.milestones.lock().unwrap().push(milestone.clone());
        Ok(milestone)
    }

    async fn create_issue(&self, issue: NewIssue) -> fwdport_core::Result<CreatedIssue> {
        if self.fail_issue_creation_for_milestone == Some(issue.milestone) {
            return Err(FwdportError::GitHub {
                message: "Resource not accessible by integration".to_string(),
            });
        }
        let number = self.next_issue_number.fetch_add(1, Ordering::SeqCst);
        self.created_issues.lock().unwrap().push(issue);
        Ok(CreatedIssue {
            number,
            url: format!("https://github.com/octo-org/widgets/issues/{number}"),
        })
    }

    async fn create_comment(&self, _issue_number: u64, body: &str) -> fwdport_core::Result<()> {
        self.comments.lock().unwrap().push(body.to_string());
        Ok(())
    }
}

fn event(body: &str) -> IssueCommentEvent {
    IssueCommentEvent {
        issue: EventIssue {
            number: ISSUE_NUMBER,
        },
        comment: EventComment {
            body: Some(body.to_string()),
            user: EventUser {
                login: "octocat".to_string(),
            },
        },
    }
}

fn milestone(title: &str, number: u64, state: MilestoneState) -> Milestone {
    Milestone {
        title: title.to_string(),
        number,
        state,
    }
}

#[tokio::test]
async fn repeated_spec_creates_milestone_once_and_reuses_it() {
    let platform = MockPlatform::new(Vec::new());

    fwdport_core::run(&platform, &event("/duplicate 2,2"))
        .await
        .unwrap();

    assert_eq!(platform.created_milestones(), vec!["2.0.0".to_string()]);

    let issues = platform.created_issues();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].milestone, issues[1].milestone);
}

#[tokio::test]
async fn reuses_latest_open_milestone_for_prefix_spec() {
    let platform = MockPlatform::new(vec![
        milestone("1.0.0", 1, MilestoneState::Closed),
        milestone("1.1.0", 2, MilestoneState::Open),
        milestone("1.2.0", 3, MilestoneState::Open),
    ]);

    fwdport_core::run(&platform, &event("/duplicate 1"))
        .await
        .unwrap();

    assert!(platform.created_milestones().is_empty());
    let issues = platform.created_issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].milestone, 3);
}

#[tokio::test]
async fn exact_open_title_wins_even_for_non_version_milestones() {
    let platform = MockPlatform::new(vec![milestone("Backlog", 9, MilestoneState::Open)]);

    fwdport_core::run(&platform, &event("/duplicate Backlog"))
        .await
        .unwrap();

    assert!(platform.created_milestones().is_empty());
    assert_eq!(platform.created_issues()[0].milestone, 9);
}

#[tokio::test]
async fn fully_closed_line_advances_to_next_patch() {
    let platform = MockPlatform::new(vec![milestone("3.0.0", 9, MilestoneState::Closed)]);

    fwdport_core::run(&platform, &event("/duplicate 3"))
        .await
        .unwrap();

    assert_eq!(platform.created_milestones(), vec!["3.0.1".to_string()]);
}

#[tokio::test]
async fn invalid_spec_becomes_result_line_without_mutation() {
    let platform = MockPlatform::new(Vec::new());

    fwdport_core::run(&platform, &event("/duplicate bogus"))
        .await
        .unwrap();

    assert!(platform.created_milestones().is_empty());
    assert!(platform.created_issues().is_empty());

    let comments = platform.comments();
    assert_eq!(comments.len(), 1);
    assert!(comments[0].contains("Invalid version specification: bogus"));
}

#[tokio::test]
async fn partial_failure_reports_success_and_error() {
    let platform = MockPlatform {
        fail_issue_creation_for_milestone: Some(2),
        ..MockPlatform::new(vec![
            milestone("1.0.0", 1, MilestoneState::Open),
            milestone("2.0.0", 2, MilestoneState::Open),
        ])
    };

    fwdport_core::run(&platform, &event("/duplicate 1,2"))
        .await
        .unwrap();

    // Both targets were attempted despite the second one failing.
    assert_eq!(platform.created_issues().len(), 1);

    let comments = platform.comments();
    assert_eq!(comments.len(), 1);
    let summary = &comments[0];
    assert!(summary.contains("✅"));
    assert!(summary.contains("`1.0.0`"));
    assert!(summary.contains("❌ `2.0.0`: GitHub API error: Resource not accessible by integration"));
}

#[tokio::test]
async fn milestone_creation_failure_is_surfaced_verbatim() {
    let platform = MockPlatform {
        fail_milestone_creation: true,
        ..MockPlatform::new(Vec::new())
    };

    fwdport_core::run(&platform, &event("/duplicate 4"))
        .await
        .unwrap();

    assert!(platform.created_issues().is_empty());
    let comments = platform.comments();
    assert!(
        comments[0]
            .contains("Failed to create milestone: GitHub API error: Validation Failed: already_exists")
    );
}

#[tokio::test]
async fn duplicate_carries_body_header_labels_and_assignees() {
    let platform = MockPlatform::new(vec![milestone("1.2.0", 5, MilestoneState::Open)]);

    fwdport_core::run(&platform, &event("/duplicate 1.2"))
        .await
        .unwrap();

    let issues = platform.created_issues();
    let issue = &issues[0];
    assert_eq!(issue.title, "Crash on startup");
    assert!(
        issue
            .body
            .starts_with("Duplicate of #17 for milestone 1.2.0\n\n---\n\n")
    );
    assert!(issue.body.ends_with("Steps to reproduce: run it."));
    assert_eq!(issue.labels, vec!["bug".to_string(), "forward-port".to_string()]);
    assert_eq!(issue.assignees, vec!["alice".to_string()]);
}

#[tokio::test]
async fn comment_without_command_gets_usage_reply() {
    let platform = MockPlatform::new(Vec::new());

    fwdport_core::run(&platform, &event("just chatting about /duplicated things"))
        .await
        .unwrap();

    assert!(platform.created_issues().is_empty());
    assert!(platform.created_milestones().is_empty());
    let comments = platform.comments();
    assert_eq!(comments.len(), 1);
    assert!(comments[0].contains("Usage:"));
}

#[tokio::test]
async fn command_without_specs_gets_usage_reply() {
    let platform = MockPlatform::new(Vec::new());

    fwdport_core::run(&platform, &event("/duplicate  , ,"))
        .await
        .unwrap();

    let comments = platform.comments();
    assert_eq!(comments.len(), 1);
    assert!(comments[0].contains("Usage:"));
}

#[tokio::test]
async fn fatal_issue_fetch_posts_generic_error_and_fails_run() {
    let platform = MockPlatform {
        fail_get_issue: true,
        ..MockPlatform::new(Vec::new())
    };

    let result = fwdport_core::run(&platform, &event("/duplicate 1")).await;
    assert!(result.is_err());

    let comments = platform.comments();
    assert_eq!(comments.len(), 1);
    assert!(comments[0].contains("An error occurred"));
    assert!(comments[0].contains("Not Found: issue #17"));
}

#[tokio::test]
async fn summary_quotes_trigger_line_and_names_commenter() {
    let platform = MockPlatform::new(vec![milestone("1.0.0", 1, MilestoneState::Open)]);

    fwdport_core::run(&platform, &event("/duplicate 1\nsome trailing context"))
        .await
        .unwrap();

    let comments = platform.comments();
    assert!(comments[0].contains("Requested by @octocat"));
    assert!(comments[0].ends_with("> /duplicate 1"));
}

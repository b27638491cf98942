// SPDX-License-Identifier: Apache-2.0

//! The `issue_comment` trigger event.
//!
//! GitHub Actions writes the webhook payload to the file named by
//! `GITHUB_EVENT_PATH`; only the fields the handler consumes are
//! deserialized here.

use std::path::Path;

use serde::Deserialize;

use crate::Result;
use crate::error::FwdportError;

/// The slice of an `issue_comment` event the handler consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueCommentEvent {
    /// The issue the comment was posted on.
    pub issue: EventIssue,
    /// The triggering comment.
    pub comment: EventComment,
}

/// Issue fields carried by the event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventIssue {
    /// Issue number.
    pub number: u64,
}

/// Comment fields carried by the event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventComment {
    /// Comment text; GitHub omits it for some edit events.
    #[serde(default)]
    pub body: Option<String>,
    /// Author of the comment.
    pub user: EventUser,
}

/// The commenting user.
#[derive(Debug, Clone, Deserialize)]
pub struct EventUser {
    /// GitHub login of the commenter.
    pub login: String,
}

impl IssueCommentEvent {
    /// Loads and parses an event payload from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| FwdportError::Event {
            message: format!("failed to read {}: {err}", path.display()),
        })?;
        serde_json::from_str(&raw).map_err(|err| FwdportError::Event {
            message: err.to_string(),
        })
    }
}

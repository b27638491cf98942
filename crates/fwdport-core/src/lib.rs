// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # fwdport Core
//!
//! Library behind the fwdport bot: reacts to a `/duplicate` issue
//! comment and duplicates the issue across one or more release
//! milestones, creating milestones on demand.
//!
//! The heart of the crate is specification resolution: a terse
//! version/milestone mini-language is parsed out of the comment, matched
//! against existing milestones with partial-semver prefix semantics, and
//! each specification resolves to a reused open milestone or a freshly
//! synthesized next patch version - deterministically, and idempotently
//! within one run.
//!
//! ## Modules
//!
//! - [`command`] - `/duplicate` comment parsing
//! - [`version`] - loose semver parsing and canonical formatting
//! - [`milestone`] - covering match and next-version computation
//! - [`resolver`] - sequential specification resolution
//! - [`duplicate`] - per-milestone issue duplication
//! - [`report`] - summary and error comment rendering
//! - [`handler`] - end-to-end event handling
//! - [`platform`] - the hosting-platform collaborator seam
//! - [`github`] - octocrab implementation of the seam
//! - [`event`] - the `issue_comment` trigger payload

pub use command::parse_duplicate_command;
pub use duplicate::{DuplicationOutcome, FORWARD_PORT_LABEL};
pub use error::FwdportError;
pub use event::IssueCommentEvent;
pub use github::GitHubClient;
pub use handler::run;
pub use milestone::{Milestone, MilestoneState};
pub use platform::{CreatedIssue, IssueDetails, NewIssue, Platform};
pub use resolver::ResolvedTarget;
pub use version::VersionSpec;

/// Convenience Result type for fwdport operations.
///
/// This is equivalent to `std::result::Result<T, FwdportError>`.
pub type Result<T> = std::result::Result<T, FwdportError>;

pub mod command;
pub mod duplicate;
pub mod error;
pub mod event;
pub mod github;
pub mod handler;
pub mod milestone;
pub mod platform;
pub mod report;
pub mod resolver;
pub mod version;

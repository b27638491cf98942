// SPDX-License-Identifier: Apache-2.0

//! fwdport - duplicate a GitHub issue across release milestones.
//!
//! GitHub Actions entry point: loads the `issue_comment` payload from
//! `GITHUB_EVENT_PATH`, builds an authenticated client for the event's
//! repository, and runs the duplication handler. Exits nonzero when the
//! run fails so the workflow step is marked failed.

mod cli;
mod errors;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use fwdport_core::{GitHubClient, IssueCommentEvent};
use secrecy::SecretString;
use tracing::debug;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging();

    let event = IssueCommentEvent::from_path(&cli.event_path)
        .context("Failed to load the event payload")?;
    debug!(issue = event.issue.number, "Loaded event payload");

    let token = SecretString::from(cli.token);
    let client = GitHubClient::from_slug(&cli.repository, &token)
        .context("Failed to build the GitHub client")?;

    match fwdport_core::run(&client, &event).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            Err(e)
        }
    }
}

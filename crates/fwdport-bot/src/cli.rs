// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for the fwdport bot.
//!
//! Every argument falls back to the environment variable GitHub Actions
//! provides, so the workflow step usually needs no arguments at all.

use std::path::PathBuf;

use clap::Parser;

/// fwdport - duplicate a GitHub issue across release milestones.
///
/// Reacts to an `issue_comment` event containing a `/duplicate` command
/// and creates one duplicate of the issue per requested milestone,
/// creating milestones on demand.
#[derive(Parser)]
#[command(name = "fwdport", version, about)]
pub struct Cli {
    /// Repository the event fired in, as owner/repo.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// Path to the issue_comment event payload JSON.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: PathBuf,

    /// GitHub token used for API calls.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,
}

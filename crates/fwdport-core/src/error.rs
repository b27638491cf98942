// SPDX-License-Identifier: Apache-2.0

//! Error types for fwdport.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! The handler and the bot binary use `anyhow::Result` for top-level
//! error handling; per-specification failures are converted into result
//! lines instead of propagating (see the resolver and orchestrator).

use thiserror::Error;

/// Errors that can occur during fwdport operations.
#[derive(Error, Debug)]
pub enum FwdportError {
    /// GitHub API error from octocrab.
    ///
    /// The message is surfaced verbatim in user-facing result lines, so
    /// creation rejections (duplicate title, missing permission) read the
    /// way the platform reported them.
    #[error("GitHub API error: {message}")]
    GitHub {
        /// Error message.
        message: String,
    },

    /// The `owner/repo` slug from the environment could not be parsed.
    #[error("Invalid repository slug: {slug} (expected owner/repo)")]
    InvalidRepo {
        /// The slug as received.
        slug: String,
    },

    /// The trigger event payload was missing or malformed.
    #[error("Invalid event payload: {message}")]
    Event {
        /// Error message.
        message: String,
    },
}

impl From<octocrab::Error> for FwdportError {
    fn from(err: octocrab::Error) -> Self {
        FwdportError::GitHub {
            message: err.to_string(),
        }
    }
}

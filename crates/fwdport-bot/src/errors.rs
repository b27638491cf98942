// SPDX-License-Identifier: Apache-2.0

//! Bot-specific error formatting with actionable hints.
//!
//! Downcasts `anyhow::Error` to `FwdportError` and appends a hint for
//! the failure classes a workflow author can fix themselves.

use anyhow::Error;
use fwdport_core::FwdportError;

/// Formats an error for the workflow log with a remediation hint.
///
/// If the error is not a `FwdportError`, returns the error chain as-is.
pub fn format_error(error: &Error) -> String {
    if let Some(err) = error.downcast_ref::<FwdportError>() {
        match err {
            FwdportError::GitHub { .. } => {
                format!(
                    "{err}\n\nTip: Check that the workflow token has `issues: write` permission."
                )
            }
            FwdportError::InvalidRepo { .. } => {
                format!("{err}\n\nTip: GITHUB_REPOSITORY must look like `owner/repo`.")
            }
            FwdportError::Event { .. } => {
                format!(
                    "{err}\n\nTip: fwdport must run on `issue_comment` events; check the workflow trigger."
                )
            }
        }
    } else {
        format!("{error:#}")
    }
}

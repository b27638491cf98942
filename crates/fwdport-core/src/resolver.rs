// SPDX-License-Identifier: Apache-2.0

//! Specification resolution.
//!
//! Turns each user-supplied specification into a concrete milestone,
//! creating one when no open milestone covers the spec. Specifications
//! are processed strictly in input order against a shared milestone list:
//! a milestone created for spec *i* must be visible to spec *i+1* in the
//! same call, so `/duplicate 2,2` reuses the milestone the first token
//! just created instead of creating it twice.

use tracing::{debug, instrument};

use crate::milestone::{Milestone, MilestoneState, find_latest, next_version};
use crate::platform::Platform;
use crate::version::VersionSpec;

/// The milestone a specification resolved to, or why it could not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    /// The spec maps to a usable open milestone.
    Milestone {
        /// Milestone title.
        name: String,
        /// Platform-assigned milestone number.
        number: u64,
        /// Whether the milestone was created during this run.
        created: bool,
    },
    /// The spec could not be resolved; carries the user-facing message.
    Failed {
        /// The spec as supplied.
        name: String,
        /// Why resolution failed.
        error: String,
    },
}

/// Resolves each specification to a milestone, in input order.
///
/// `milestones` is the full milestone set (open and closed,
/// concatenated); milestones created along the way are appended so later
/// specifications see them. Per-spec failures become [`ResolvedTarget::Failed`]
/// entries and never abort sibling specifications.
#[instrument(skip(platform, specs, milestones), fields(specs = specs.len()))]
pub async fn resolve_specs<P: Platform + ?Sized>(
    platform: &P,
    specs: &[String],
    milestones: &mut Vec<Milestone>,
) -> Vec<ResolvedTarget> {
    let mut targets = Vec::with_capacity(specs.len());
    for spec in specs {
        let target = resolve_one(platform, spec, milestones).await;
        targets.push(target);
    }
    targets
}

async fn resolve_one<P: Platform + ?Sized>(
    platform: &P,
    spec: &str,
    milestones: &mut Vec<Milestone>,
) -> ResolvedTarget {
    // An open milestone titled exactly like the spec wins outright. This
    // is what makes arbitrary (non-version) milestone titles addressable.
    if let Some(m) = milestones
        .iter()
        .find(|m| m.title == spec && m.state == MilestoneState::Open)
    {
        debug!(spec, milestone = %m.title, "Exact open milestone match");
        return ResolvedTarget::Milestone {
            name: m.title.clone(),
            number: m.number,
            created: false,
        };
    }

    // Latest open milestone covered by the spec. An exact-but-closed
    // title falls through to here and, failing this, to creation.
    if let Some(m) = find_latest(milestones, spec, true) {
        debug!(spec, milestone = %m.title, "Reusing latest open milestone");
        return ResolvedTarget::Milestone {
            name: m.title.clone(),
            number: m.number,
            created: false,
        };
    }

    // Nothing open covers the spec; synthesize the next patch version.
    let Some(parsed) = VersionSpec::parse(spec) else {
        debug!(spec, "Specification is not a version and names no milestone");
        return ResolvedTarget::Failed {
            name: spec.to_string(),
            error: format!("Invalid version specification: {spec}"),
        };
    };

    let title = next_version(milestones, &parsed);
    debug!(spec, title, "Creating milestone");
    match platform.create_milestone(&title).await {
        Ok(created) => {
            let target = ResolvedTarget::Milestone {
                name: created.title.clone(),
                number: created.number,
                created: true,
            };
            // Make the new milestone visible to the remaining specs.
            milestones.push(created);
            target
        }
        Err(err) => ResolvedTarget::Failed {
            name: spec.to_string(),
            error: format!("Failed to create milestone: {err}"),
        },
    }
}

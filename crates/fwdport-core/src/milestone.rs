// SPDX-License-Identifier: Apache-2.0

//! Milestone model, covering match, and next-version computation.
//!
//! A specification with N present components covers any milestone whose
//! first N version components are equal. The relation is one-directional:
//! a milestone titled `"2"` is not covered by spec `"2.1"`, because the
//! milestone's absent minor is compared literally.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::version::{VersionSpec, format_milestone};

/// Lifecycle state of a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneState {
    /// Milestone accepts new issues.
    Open,
    /// Milestone has been released or retired.
    Closed,
}

impl MilestoneState {
    /// Returns the state as the GitHub API spells it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MilestoneState::Open => "open",
            MilestoneState::Closed => "closed",
        }
    }
}

/// A milestone as mirrored from the hosting platform.
///
/// Never mutated in place; the handler only ever creates new milestones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Milestone title, usually a version string.
    pub title: String,
    /// Platform-assigned milestone number.
    pub number: u64,
    /// Open or closed.
    pub state: MilestoneState,
}

/// Whether a milestone's title is covered by a version specification.
///
/// Both the title and the spec must parse as versions; otherwise there is
/// no match. Absent components in the spec act as wildcards.
#[must_use]
pub fn milestone_matches_spec(milestone: &Milestone, spec: &str) -> bool {
    let (Some(m), Some(s)) = (
        VersionSpec::parse(&milestone.title),
        VersionSpec::parse(spec),
    ) else {
        return false;
    };

    if m.major != s.major {
        return false;
    }
    if let Some(minor) = s.minor
        && m.minor != Some(minor)
    {
        return false;
    }
    if let Some(patch) = s.patch
        && m.patch != Some(patch)
    {
        return false;
    }
    true
}

/// Sort key for greatest-tuple selection: absent components count as 0.
fn version_key(milestone: &Milestone) -> Option<(u64, u64, u64)> {
    VersionSpec::parse(&milestone.title)
        .map(|v| (v.major, v.minor.unwrap_or(0), v.patch.unwrap_or(0)))
}

/// Total order used to pick the "latest" covered milestone.
///
/// Greater version tuple wins. Identical tuples (a platform data anomaly,
/// e.g. titles `1.2` and `1.2.0`) break deterministically: open beats
/// closed, then the lower milestone number wins.
fn compare_latest(a: &Milestone, b: &Milestone) -> Ordering {
    version_key(a)
        .cmp(&version_key(b))
        .then_with(|| (a.state == MilestoneState::Open).cmp(&(b.state == MilestoneState::Open)))
        .then_with(|| b.number.cmp(&a.number))
}

/// Finds the latest milestone covered by `spec`.
///
/// With `open_only`, closed milestones are ignored; otherwise all states
/// participate (required when computing the next patch version after a
/// line has been fully released).
#[must_use]
pub fn find_latest<'a>(
    milestones: &'a [Milestone],
    spec: &str,
    open_only: bool,
) -> Option<&'a Milestone> {
    milestones
        .iter()
        .filter(|m| !open_only || m.state == MilestoneState::Open)
        .filter(|m| milestone_matches_spec(m, spec))
        .max_by(|a, b| compare_latest(a, b))
}

/// Computes the next milestone title for a specification no open
/// milestone covers.
///
/// If any milestone (open or closed) is covered, the latest one advances
/// by a patch, treating an absent patch as 0 before incrementing. With no
/// match at all, the spec's absent components are filled with zeros and
/// nothing is incremented.
#[must_use]
pub fn next_version(milestones: &[Milestone], spec: &VersionSpec) -> String {
    if let Some(latest) = find_latest(milestones, &spec.original, false)
        && let Some(v) = VersionSpec::parse(&latest.title)
    {
        return format_milestone(v.major, v.minor.unwrap_or(0), v.patch.map_or(1, |p| p + 1));
    }

    format_milestone(
        spec.major,
        spec.minor.unwrap_or(0),
        spec.patch.unwrap_or(0),
    )
}

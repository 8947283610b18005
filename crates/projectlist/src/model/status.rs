//! Project lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The lifecycle status of a project.
///
/// Seven statuses form a strictly ordered progression, from `conceived`
/// through `integrated`. The remaining two, `abandoned` and `on-hold`, are
/// terminal and sit outside that progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Idea recorded, nothing written yet.
    Conceived,

    /// Specification written.
    Specified,

    /// Implementation plan written.
    Planned,

    /// Work in progress.
    Implementing,

    /// Implementation finished, not yet committed.
    Implemented,

    /// Committed to a branch.
    Committed,

    /// Merged and released.
    Integrated,

    /// Dropped for good.
    Abandoned,

    /// Paused.
    OnHold,
}

impl ProjectStatus {
    /// Every status, progression first, then the terminal ones.
    pub const ALL: [ProjectStatus; 9] = [
        ProjectStatus::Conceived,
        ProjectStatus::Specified,
        ProjectStatus::Planned,
        ProjectStatus::Implementing,
        ProjectStatus::Implemented,
        ProjectStatus::Committed,
        ProjectStatus::Integrated,
        ProjectStatus::Abandoned,
        ProjectStatus::OnHold,
    ];

    /// The ordered lifecycle progression.
    pub const LIFECYCLE_STAGES: [ProjectStatus; 7] = [
        ProjectStatus::Conceived,
        ProjectStatus::Specified,
        ProjectStatus::Planned,
        ProjectStatus::Implementing,
        ProjectStatus::Implemented,
        ProjectStatus::Committed,
        ProjectStatus::Integrated,
    ];

    /// Statuses outside the progression.
    pub const TERMINAL: [ProjectStatus; 2] = [ProjectStatus::Abandoned, ProjectStatus::OnHold];

    /// Returns the name used in project list documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Conceived => "conceived",
            ProjectStatus::Specified => "specified",
            ProjectStatus::Planned => "planned",
            ProjectStatus::Implementing => "implementing",
            ProjectStatus::Implemented => "implemented",
            ProjectStatus::Committed => "committed",
            ProjectStatus::Integrated => "integrated",
            ProjectStatus::Abandoned => "abandoned",
            ProjectStatus::OnHold => "on-hold",
        }
    }

    /// Returns `true` for `abandoned` and `on-hold`.
    pub fn is_terminal(&self) -> bool {
        Self::TERMINAL.contains(self)
    }

    /// Zero-based position in [`LIFECYCLE_STAGES`](Self::LIFECYCLE_STAGES),
    /// or `None` for terminal statuses.
    pub fn stage_index(&self) -> Option<usize> {
        Self::LIFECYCLE_STAGES.iter().position(|s| s == self)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::unknown_status(s))
    }
}

//! Acceptance rules for parsed entries.
//!
//! An entry becomes a [`Project`] when, checked in this order:
//!
//! 1. its `id` is present, is not the `NNNN` template placeholder, and is
//!    exactly four ASCII digits;
//! 2. its `status` is one of the nine [`ProjectStatus`] values;
//! 3. its `title` is present and non-empty;
//! 4. it is not tagged `example`.
//!
//! The first failing rule decides the [`Rejection`].

use crate::error::Rejection;
use crate::model::{Project, ProjectEntry, ProjectStatus};

/// Placeholder id used by templates in project list documents.
pub const TEMPLATE_ID: &str = "NNNN";

/// Tag that marks documentation-only entries.
pub const EXAMPLE_TAG: &str = "example";

/// Run every rule against `entry`, returning the parsed status on success.
fn check(entry: &ProjectEntry) -> Result<ProjectStatus, Rejection> {
    let id = match entry.id.as_deref() {
        None | Some("") => return Err(Rejection::MissingId),
        Some(id) => id,
    };
    if id == TEMPLATE_ID {
        return Err(Rejection::TemplateId);
    }
    if !is_four_digits(id) {
        return Err(Rejection::MalformedId { id: id.to_string() });
    }

    let status = match entry.status.as_deref() {
        None | Some("") => return Err(Rejection::MissingStatus),
        Some(status) => status
            .parse::<ProjectStatus>()
            .map_err(|_| Rejection::InvalidStatus {
                status: status.to_string(),
            })?,
    };

    if entry.title.as_deref().is_none_or(str::is_empty) {
        return Err(Rejection::MissingTitle);
    }

    if entry.has_tag(EXAMPLE_TAG) {
        return Err(Rejection::ExampleEntry);
    }

    Ok(status)
}

fn is_four_digits(id: &str) -> bool {
    id.len() == 4 && id.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if `entry` would be accepted as a [`Project`].
///
/// # Example
///
/// ```rust
/// use projectlist::{is_valid_project, ProjectEntry};
///
/// let entry = ProjectEntry {
///     id: Some("0001".to_string()),
///     title: Some("Valid Project".to_string()),
///     status: Some("implementing".to_string()),
///     ..Default::default()
/// };
/// assert!(is_valid_project(&entry));
///
/// let template = ProjectEntry { id: Some("NNNN".to_string()), ..entry };
/// assert!(!is_valid_project(&template));
/// ```
pub fn is_valid_project(entry: &ProjectEntry) -> bool {
    check(entry).is_ok()
}

/// Validate `entry`, copying it into a [`Project`] on success.
pub fn validate(entry: &ProjectEntry) -> Result<Project, Rejection> {
    Project::try_from(entry.clone())
}

impl TryFrom<ProjectEntry> for Project {
    type Error = Rejection;

    fn try_from(entry: ProjectEntry) -> Result<Self, Self::Error> {
        let status = check(&entry)?;
        Ok(Project {
            id: entry.id.unwrap_or_default(),
            title: entry.title.unwrap_or_default(),
            status,
            summary: entry.summary,
            priority: entry.priority,
            release: entry.release,
            files: entry.files,
            dependencies: entry.dependencies,
            tags: entry.tags,
            ticks: entry.ticks,
            notes: entry.notes,
            extra: entry.extra,
        })
    }
}

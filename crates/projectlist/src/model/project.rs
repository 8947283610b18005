//! Project records, partial and validated.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::ProjectStatus;

/// Paths to the documents that belong to a project.
///
/// Each field has three states:
///
/// - `None`: the key was not written at all
/// - `Some(None)`: the key was written as `null` (not yet available)
/// - `Some(Some(path))`: the key holds a path
///
/// Renderers rely on the difference between the first two, so they are
/// never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFiles {
    /// Specification document.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "explicit_null"
    )]
    pub spec: Option<Option<String>>,

    /// Implementation plan.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "explicit_null"
    )]
    pub plan: Option<Option<String>>,

    /// Review notes.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "explicit_null"
    )]
    pub review: Option<Option<String>>,
}

impl ProjectFiles {
    /// Keys that belong inside a `files:` block.
    pub const KEYS: [&'static str; 3] = ["spec", "plan", "review"];

    /// Returns the slot for `key`, or `None` if `key` is not a file key.
    pub(crate) fn slot_mut(&mut self, key: &str) -> Option<&mut Option<Option<String>>> {
        match key {
            "spec" => Some(&mut self.spec),
            "plan" => Some(&mut self.plan),
            "review" => Some(&mut self.review),
            _ => None,
        }
    }
}

/// A present key deserializes to `Some`, even when its value is `null`.
fn explicit_null<'de, D>(deserializer: D) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// One entry as read from a document, before validation.
///
/// Every field is optional. Keys the parser does not know about are kept in
/// [`extra`](Self::extra) rather than dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    /// Four-digit identifier, as written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// One-line description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Status, as written; checked against [`ProjectStatus`] on validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Free-form priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Target release.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    /// Related documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<ProjectFiles>,
    /// Ids of projects this one depends on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    /// Free-form tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Amendment identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Vec<String>>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Any other `key: value` line.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ProjectEntry {
    /// Keys whose values are inline `[a, b]` lists.
    pub const LIST_KEYS: [&'static str; 3] = ["dependencies", "tags", "ticks"];

    /// Stores a scalar under `key`, routing unknown keys to `extra`.
    pub(crate) fn set_scalar(&mut self, key: &str, value: String) {
        let slot = match key {
            "id" => &mut self.id,
            "title" => &mut self.title,
            "summary" => &mut self.summary,
            "status" => &mut self.status,
            "priority" => &mut self.priority,
            "release" => &mut self.release,
            "notes" => &mut self.notes,
            _ => {
                self.extra.insert(key.to_string(), value);
                return;
            }
        };
        *slot = Some(value);
    }

    /// Returns the slot for a list key, or `None` if `key` is not one.
    pub(crate) fn list_mut(&mut self, key: &str) -> Option<&mut Option<Vec<String>>> {
        match key {
            "dependencies" => Some(&mut self.dependencies),
            "tags" => Some(&mut self.tags),
            "ticks" => Some(&mut self.ticks),
            _ => None,
        }
    }

    /// Returns `true` if the entry carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

impl From<Project> for ProjectEntry {
    fn from(project: Project) -> Self {
        Self {
            id: Some(project.id),
            title: Some(project.title),
            summary: project.summary,
            status: Some(project.status.as_str().to_string()),
            priority: project.priority,
            release: project.release,
            files: project.files,
            dependencies: project.dependencies,
            tags: project.tags,
            ticks: project.ticks,
            notes: project.notes,
            extra: project.extra,
        }
    }
}

/// A validated project.
///
/// `id` is always four ASCII digits, `title` is non-empty, and the tags
/// never include `example`. Build one from a [`ProjectEntry`] with
/// [`validate`](crate::validate::validate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Four-digit identifier.
    pub id: String,
    /// Display name.
    pub title: String,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// One-line description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Free-form priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Target release.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    /// Related documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<ProjectFiles>,
    /// Ids of projects this one depends on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Amendment identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Vec<String>>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Any other `key: value` line from the source entry.
    #[serde(flatten, default)]
    pub extra: BTreeMap<String, String>,
}

impl Project {
    /// Creates a project with only the required fields set.
    ///
    /// No validation is performed; use
    /// [`validate`](crate::validate::validate) for untrusted input.
    pub fn new<I, T>(id: I, title: T, status: ProjectStatus) -> Self
    where
        I: Into<String>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            status,
            summary: None,
            priority: None,
            release: None,
            files: None,
            dependencies: None,
            tags: None,
            ticks: None,
            notes: None,
            extra: BTreeMap::new(),
        }
    }

    /// Returns `true` if the project is abandoned or on hold.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

//! Line-oriented parsing of a single project entry.
//!
//! Entries are written in a small YAML-like dialect:
//!
//! ```yaml
//!   - id: "0039"
//!     title: "Codev CLI"
//!     status: implementing
//!     release: null
//!     files:
//!       spec: codev/specs/0039-codev-cli.md
//!       review: null
//!     dependencies: ["0005", "0022"]
//!     tags: [cli, npm]
//! ```
//!
//! There is no YAML grammar behind this. Each line is classified on its own
//! as `key: value` (an optional leading `- ` is ignored); anything else is
//! skipped. The only nesting is the `files:` record, whose keys are
//! recognized by name wherever they appear.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::{ProjectEntry, ProjectFiles};

/// Optional indentation, optional list dash, a bare word key, a colon, and
/// the rest of the line.
static KEY_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*-?\s*([A-Za-z0-9_]+):\s*(.*)$").expect("Invalid key/value line regex")
});

/// The literal written for "no value".
const NULL: &str = "null";

/// What a single line contributes to an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line<'a> {
    /// `files:` opens a fresh nested record.
    FilesHeader,
    /// `spec:`, `plan:` or `review:`; `None` is an explicit `null`.
    FileField(&'a str, Option<String>),
    /// `dependencies:`, `tags:` or `ticks:`.
    List(&'a str, Vec<String>),
    /// Any other key with a non-null value.
    Scalar(&'a str, String),
    /// Any other key written as `null`; contributes nothing.
    Null,
}

/// Classify one line, or return `None` if it is not a `key: value` line.
fn classify(line: &str) -> Option<Line<'_>> {
    let caps = KEY_VALUE_RE.captures(line)?;
    let key = caps.get(1)?.as_str();
    let value = unquote(caps.get(2).map_or("", |m| m.as_str()));

    let classified = if key == "files" {
        Line::FilesHeader
    } else if ProjectFiles::KEYS.contains(&key) {
        Line::FileField(key, (value != NULL).then(|| value.to_string()))
    } else if ProjectEntry::LIST_KEYS.contains(&key) {
        Line::List(key, parse_inline_list(value))
    } else if value == NULL {
        Line::Null
    } else {
        Line::Scalar(key, value.to_string())
    };
    Some(classified)
}

/// Parse one entry chunk into a partial record.
///
/// Never fails: lines that do not look like `key: value` are ignored, and
/// the result may be missing any field. Pass it to
/// [`validate`](crate::validate::validate) to find out whether it is a
/// usable project.
///
/// # Example
///
/// ```rust
/// use projectlist::markdown::parser::parse_project_entry;
///
/// let entry = parse_project_entry(
///     "  - id: \"0001\"\n    title: \"Test Project\"\n    status: implementing\n    priority: high\n",
/// );
/// assert_eq!(entry.id.as_deref(), Some("0001"));
/// assert_eq!(entry.title.as_deref(), Some("Test Project"));
/// assert_eq!(entry.status.as_deref(), Some("implementing"));
/// assert_eq!(entry.priority.as_deref(), Some("high"));
/// ```
pub fn parse_project_entry(text: &str) -> ProjectEntry {
    let mut entry = ProjectEntry::default();

    for line in text.lines() {
        match classify(line) {
            Some(Line::FilesHeader) => {
                entry.files = Some(ProjectFiles::default());
            }
            Some(Line::FileField(key, value)) => {
                let files = entry.files.get_or_insert_with(ProjectFiles::default);
                if let Some(slot) = files.slot_mut(key) {
                    *slot = Some(value);
                }
            }
            Some(Line::List(key, items)) => {
                if let Some(slot) = entry.list_mut(key) {
                    *slot = Some(items);
                }
            }
            Some(Line::Scalar(key, value)) => entry.set_scalar(key, value),
            Some(Line::Null) | None => {}
        }
    }

    entry
}

/// Trim `raw` and strip one matching pair of surrounding quotes.
///
/// A lone quote character counts as both ends of the pair and yields the
/// empty string. No escape processing happens inside the quotes.
fn unquote(raw: &str) -> &str {
    let value = raw.trim();
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            return value.get(1..value.len() - 1).unwrap_or_default();
        }
    }
    value
}

/// Parse `[a, "b", 'c']` into its items.
///
/// Anything not enclosed in brackets yields an empty list rather than an
/// error.
fn parse_inline_list(value: &str) -> Vec<String> {
    let Some(inner) = value
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return Vec::new();
    };

    if inner.trim().is_empty() {
        return Vec::new();
    }

    inner
        .split(',')
        .map(|item| strip_item_quotes(item.trim()).to_string())
        .collect()
}

/// Strip one leading and one trailing quote character, independently.
fn strip_item_quotes(item: &str) -> &str {
    let item = item.strip_prefix(['"', '\'']).unwrap_or(item);
    item.strip_suffix(['"', '\'']).unwrap_or(item)
}

// ============================================================================
// Tests
// ============================================================================

#![doc = include_str!("../README.md")]

//! # Modules
//!
//! - [`markdown`]: block extraction, entry splitting, entry parsing
//! - [`validate`]: acceptance rules for parsed entries
//! - [`query`]: status filters and grouping
//! - [`escape`]: HTML escaping for renderers
//! - [`model`]: project records and statuses
//! - [`error`]: error and rejection types

pub mod error;
pub mod escape;
pub mod markdown;
pub mod model;
pub mod query;
pub mod validate;

mod proptests;

use std::panic::{self, AssertUnwindSafe};

// Re-export key types at crate root for convenience
pub use error::{Error, Rejection, Result};
pub use escape::escape_html;
pub use markdown::parse_project_entry;
pub use model::{Project, ProjectEntry, ProjectFiles, ProjectStatus};
pub use query::{StatusGroups, active_projects, group_by_status, stage_index, terminal_projects};
pub use validate::{is_valid_project, validate};

/// An entry that was parsed but failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    /// Zero-based index of the `yaml` block in the document.
    pub block: usize,
    /// Zero-based index of the entry within its block.
    pub entry: usize,
    /// The first rule the entry broke.
    pub reason: Rejection,
    /// What was parsed before validation.
    pub partial: ProjectEntry,
}

/// Outcome of parsing a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Accepted projects, in document order.
    pub projects: Vec<Project>,
    /// Entries that were dropped, in document order.
    pub rejected: Vec<RejectedEntry>,
}

/// Parse a project list document, keeping rejected entries alongside the
/// accepted ones.
///
/// Unlike [`parse_projectlist`] this does not guard against panics; use
/// [`try_parse_projectlist`] for untrusted input.
pub fn parse_projectlist_report(content: &str) -> ParseReport {
    let mut report = ParseReport::default();
    if content.trim().is_empty() {
        return report;
    }

    for (block_index, block) in markdown::yaml_blocks(content).enumerate() {
        for (entry_index, chunk) in markdown::split_entries(block).enumerate() {
            let partial = parse_project_entry(chunk);
            match Project::try_from(partial.clone()) {
                Ok(project) => report.projects.push(project),
                Err(reason) => {
                    log::debug!(
                        "Skipping entry {entry_index} in yaml block {block_index}: {reason}"
                    );
                    report.rejected.push(RejectedEntry {
                        block: block_index,
                        entry: entry_index,
                        reason,
                        partial,
                    });
                }
            }
        }
    }

    report
}

/// Parse a project list document, converting a panic anywhere in the
/// pipeline into [`Error::Panicked`].
///
/// The panic hook still runs before the unwind is caught, so the default
/// hook prints its `thread ... panicked` message to stderr. Callers that
/// need silence must install their own hook with [`std::panic::set_hook`].
///
/// # Example
///
/// ```rust
/// use projectlist::try_parse_projectlist;
///
/// // Keep a caught panic off stderr while parsing.
/// let previous = std::panic::take_hook();
/// std::panic::set_hook(Box::new(|_| {}));
/// let report = try_parse_projectlist("```yaml\n- id: \"0001\"\n  title: A\n  status: planned\n```\n");
/// std::panic::set_hook(previous);
///
/// assert!(report.is_ok_and(|r| r.projects.len() == 1));
/// ```
pub fn try_parse_projectlist(content: &str) -> Result<ParseReport> {
    panic::catch_unwind(AssertUnwindSafe(|| parse_projectlist_report(content))).map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Error::Panicked { message }
    })
}

/// Parse a project list document into its valid projects.
///
/// Finds every fenced `yaml` block, splits each into entries, parses and
/// validates each entry, and returns the accepted projects in document
/// order. Invalid entries are dropped. This never fails: if anything goes
/// wrong the result is empty. A caught panic is still reported by the
/// process panic hook; see [`try_parse_projectlist`].
///
/// # Example
///
/// ```rust
/// use projectlist::{parse_projectlist, ProjectStatus};
///
/// let content = "## Active\n\n```yaml\n  - id: \"0001\"\n    title: \"First\"\n    status: implementing\n```\n";
/// let projects = parse_projectlist(content);
/// assert_eq!(projects.len(), 1);
/// assert_eq!(projects[0].status, ProjectStatus::Implementing);
///
/// assert!(parse_projectlist("Not valid YAML at all").is_empty());
/// ```
pub fn parse_projectlist(content: &str) -> Vec<Project> {
    match try_parse_projectlist(content) {
        Ok(report) => report.projects,
        Err(e) => {
            log::warn!("Returning no projects: {e}");
            Vec::new()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

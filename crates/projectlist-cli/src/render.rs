//! Output rendering for the `projectlist` commands.

use anyhow::Result;
use projectlist::{Project, ProjectStatus, RejectedEntry, StatusGroups, escape_html};
use serde::Serialize;

use crate::config::OutputFormat;

/// Render a flat list of projects.
pub fn projects(projects: &[&Project], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(project_table(projects)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(projects)?),
        OutputFormat::Html => Ok(project_list_html(projects)),
    }
}

/// Render projects bucketed by status, keeping the bucket order.
pub fn groups(groups: &StatusGroups<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let mut out = String::new();
            for (status, members) in groups.iter() {
                out.push_str(&format!("## {status} ({})\n", members.len()));
                out.push_str(&project_table(members));
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Group<'a> {
                status: ProjectStatus,
                projects: &'a [&'a Project],
            }

            let groups: Vec<Group<'_>> = groups
                .iter()
                .map(|(status, projects)| Group { status, projects })
                .collect();
            Ok(serde_json::to_string_pretty(&groups)?)
        }
        OutputFormat::Html => {
            let mut out = String::new();
            for (status, members) in groups.iter() {
                let status = escape_html(Some(status.as_str()));
                out.push_str(&format!("<section data-status=\"{status}\">\n"));
                out.push_str(&format!("<h2>{status} ({})</h2>\n", members.len()));
                out.push_str(&project_list_html(members));
                out.push_str("</section>\n");
            }
            Ok(out)
        }
    }
}

/// Render rejected entries. HTML falls back to the plain-text layout.
pub fn rejections(rejected: &[RejectedEntry], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        #[derive(Serialize)]
        struct Rejected<'a> {
            block: usize,
            entry: usize,
            id: Option<&'a str>,
            reason: String,
        }

        let rows: Vec<Rejected<'_>> = rejected
            .iter()
            .map(|r| Rejected {
                block: r.block,
                entry: r.entry,
                id: r.partial.id.as_deref(),
                reason: r.reason.to_string(),
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let mut out = String::new();
    for r in rejected {
        out.push_str(&format!(
            "block {} entry {} (id {}): {}\n",
            r.block,
            r.entry,
            r.partial.id.as_deref().unwrap_or("-"),
            r.reason
        ));
    }
    Ok(out)
}

/// The lifecycle progression followed by the terminal statuses.
pub fn stages() -> String {
    let mut out = String::new();
    for status in ProjectStatus::ALL {
        let index = status
            .stage_index()
            .map_or_else(|| "-".to_string(), |i| i.to_string());
        out.push_str(&format!("{index:>2}  {status}\n"));
    }
    out
}

fn project_table(projects: &[&Project]) -> String {
    let mut out = String::new();
    for p in projects {
        out.push_str(&format!("{:<6} {:<14} {}\n", p.id, p.status, p.title));
    }
    out
}

fn project_list_html(projects: &[&Project]) -> String {
    let mut out = String::from("<ul class=\"projects\">\n");
    for p in projects {
        out.push_str(&format!(
            "  <li data-status=\"{}\"><span class=\"id\">{}</span> {}</li>\n",
            escape_html(Some(p.status.as_str())),
            escape_html(Some(p.id.as_str())),
            escape_html(Some(p.title.as_str())),
        ));
    }
    out.push_str("</ul>\n");
    out
}

// ============================================================================
// Tests
// ============================================================================

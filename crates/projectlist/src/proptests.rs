//! Property-based tests for parsing, validation, and queries.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{
        Project, ProjectEntry, ProjectStatus, active_projects, escape_html, is_valid_project,
        parse_projectlist_report, stage_index, terminal_projects,
    };
    use proptest::prelude::*;

    fn any_status() -> impl Strategy<Value = ProjectStatus> {
        prop::sample::select(ProjectStatus::ALL.to_vec())
    }

    fn valid_entry() -> impl Strategy<Value = ProjectEntry> {
        ("[0-9]{4}", "\\PC{1,40}", any_status()).prop_map(|(id, title, status)| ProjectEntry {
            id: Some(id),
            title: Some(title),
            status: Some(status.as_str().to_string()),
            ..Default::default()
        })
    }

    fn bad_id() -> impl Strategy<Value = String> {
        prop_oneof!["[0-9]{0,3}", "[0-9]{5,8}", "[a-zA-Z]{4}", "[0-9]{2} [0-9]"]
    }

    fn bad_status() -> impl Strategy<Value = String> {
        "[a-zA-Z_-]{0,14}".prop_filter("must not be a real status", |s| {
            s.parse::<ProjectStatus>().is_err()
        })
    }

    fn projects() -> impl Strategy<Value = Vec<Project>> {
        prop::collection::vec(
            ("[0-9]{4}", any_status()).prop_map(|(id, status)| Project::new(id, "P", status)),
            0..20,
        )
    }

    proptest! {
        #[test]
        fn test_valid_entries_accepted(entry in valid_entry()) {
            prop_assert!(is_valid_project(&entry));
        }

        #[test]
        fn test_bad_id_rejected_alone(entry in valid_entry(), id in bad_id()) {
            let entry = ProjectEntry { id: Some(id), ..entry };
            prop_assert!(!is_valid_project(&entry));
        }

        #[test]
        fn test_bad_status_rejected_alone(entry in valid_entry(), status in bad_status()) {
            let entry = ProjectEntry { status: Some(status), ..entry };
            prop_assert!(!is_valid_project(&entry));
        }

        #[test]
        fn test_missing_title_rejected_alone(entry in valid_entry(), empty in any::<bool>()) {
            let title = if empty { Some(String::new()) } else { None };
            let entry = ProjectEntry { title, ..entry };
            prop_assert!(!is_valid_project(&entry));
        }

        #[test]
        fn test_stage_index_only_for_progression(s in "\\PC{0,16}") {
            let in_progression = ProjectStatus::LIFECYCLE_STAGES.iter().any(|st| st.as_str() == s);
            match stage_index(&s) {
                Some(i) => {
                    prop_assert!(in_progression);
                    prop_assert!(i <= 6);
                    prop_assert_eq!(ProjectStatus::LIFECYCLE_STAGES[i].as_str(), s.as_str());
                }
                None => prop_assert!(!in_progression),
            }
        }

        #[test]
        fn test_active_and_terminal_partition(list in projects()) {
            let active = active_projects(&list);
            let terminal = terminal_projects(&list);

            prop_assert_eq!(active.len() + terminal.len(), list.len());
            prop_assert!(active.iter().all(|p| !p.is_terminal()));
            prop_assert!(terminal.iter().all(|p| p.is_terminal()));
            for project in &list {
                let in_active = active.iter().any(|p| std::ptr::eq(*p, project));
                let in_terminal = terminal.iter().any(|p| std::ptr::eq(*p, project));
                prop_assert!(in_active != in_terminal);
            }
        }

        #[test]
        fn test_escape_removes_specials(s in "\\PC{0,60}") {
            let escaped = escape_html(Some(s.as_str()));
            prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
        }

        #[test]
        fn test_escape_plain_text_is_fixed_point(s in "[^&<>\"']{0,60}") {
            prop_assert_eq!(escape_html(Some(s.as_str())), s);
        }

        #[test]
        fn test_parser_total_on_arbitrary_blocks(body in "(\\PC|\n){0,200}") {
            let content = format!("```yaml\n{body}\n```\n");
            let report = parse_projectlist_report(&content);
            for project in &report.projects {
                prop_assert_eq!(project.id.len(), 4);
                prop_assert!(!project.title.is_empty());
            }
        }
    }
}

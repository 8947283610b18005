//! Filtering and grouping validated projects by status.
//!
//! All helpers borrow from the input slice and keep its order.

use crate::model::{Project, ProjectStatus};

/// Position of `status` in the lifecycle progression.
///
/// Returns `Some(0)` for `conceived` through `Some(6)` for `integrated`.
/// Terminal statuses (`abandoned`, `on-hold`) and unknown strings are not
/// part of the progression and return `None`.
///
/// # Example
///
/// ```rust
/// use projectlist::stage_index;
///
/// assert_eq!(stage_index("planned"), Some(2));
/// assert_eq!(stage_index("on-hold"), None);
/// assert_eq!(stage_index("invalid"), None);
/// ```
pub fn stage_index(status: &str) -> Option<usize> {
    ProjectStatus::LIFECYCLE_STAGES
        .iter()
        .position(|stage| stage.as_str() == status)
}

/// Projects that are neither abandoned nor on hold.
pub fn active_projects(projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|p| !p.is_terminal()).collect()
}

/// Projects that are abandoned or on hold.
pub fn terminal_projects(projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|p| p.is_terminal()).collect()
}

/// Projects bucketed by status, in the order the statuses were requested.
///
/// Every requested status has a bucket, possibly empty. Projects whose
/// status was not requested are in no bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusGroups<'a> {
    groups: Vec<(ProjectStatus, Vec<&'a Project>)>,
}

impl<'a> StatusGroups<'a> {
    /// Projects with `status`, or `None` if `status` was not requested.
    pub fn get(&self, status: ProjectStatus) -> Option<&[&'a Project]> {
        self.groups
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, projects)| projects.as_slice())
    }

    /// Requested statuses, in request order.
    pub fn statuses(&self) -> impl Iterator<Item = ProjectStatus> + '_ {
        self.groups.iter().map(|(s, _)| *s)
    }

    /// Iterate over `(status, projects)` pairs in request order.
    pub fn iter(&self) -> impl Iterator<Item = (ProjectStatus, &[&'a Project])> + '_ {
        self.groups.iter().map(|(s, p)| (*s, p.as_slice()))
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if no statuses were requested.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group `projects` under each of `statuses`.
///
/// A status requested twice gets a single bucket, at its first position.
///
/// # Example
///
/// ```rust
/// use projectlist::{group_by_status, Project, ProjectStatus};
///
/// let projects = vec![
///     Project::new("0001", "P1", ProjectStatus::Implementing),
///     Project::new("0002", "P2", ProjectStatus::Implementing),
///     Project::new("0003", "P3", ProjectStatus::Specified),
/// ];
///
/// let groups = group_by_status(&projects, &[ProjectStatus::Implementing, ProjectStatus::Conceived]);
/// assert_eq!(groups.get(ProjectStatus::Implementing).map(<[_]>::len), Some(2));
/// assert_eq!(groups.get(ProjectStatus::Conceived).map(<[_]>::len), Some(0));
/// assert!(groups.get(ProjectStatus::Specified).is_none());
/// ```
pub fn group_by_status<'a>(projects: &'a [Project], statuses: &[ProjectStatus]) -> StatusGroups<'a> {
    let mut groups: Vec<(ProjectStatus, Vec<&'a Project>)> = Vec::with_capacity(statuses.len());
    for &status in statuses {
        if groups.iter().any(|(s, _)| *s == status) {
            continue;
        }
        let members = projects.iter().filter(|p| p.status == status).collect();
        groups.push((status, members));
    }
    StatusGroups { groups }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, status: ProjectStatus) -> Project {
        Project::new(id, format!("Project {id}"), status)
    }

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    // ------------------------------------------------------------------------
    // stage_index tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_stage_index_lifecycle() {
        let expected = [
            ("conceived", 0),
            ("specified", 1),
            ("planned", 2),
            ("implementing", 3),
            ("implemented", 4),
            ("committed", 5),
            ("integrated", 6),
        ];
        for (status, index) in expected {
            assert_eq!(stage_index(status), Some(index), "{status}");
        }
    }

    #[test]
    fn test_stage_index_outside_progression() {
        assert_eq!(stage_index("invalid"), None);
        assert_eq!(stage_index("abandoned"), None);
        assert_eq!(stage_index("on-hold"), None);
        assert_eq!(stage_index(""), None);
        assert_eq!(stage_index("Conceived"), None);
    }

    // ------------------------------------------------------------------------
    // active/terminal tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_active_projects() {
        let projects = vec![
            project("0001", ProjectStatus::Implementing),
            project("0002", ProjectStatus::Abandoned),
            project("0003", ProjectStatus::OnHold),
            project("0004", ProjectStatus::Integrated),
        ];
        assert_eq!(ids(&active_projects(&projects)), vec!["0001", "0004"]);
    }

    #[test]
    fn test_terminal_projects() {
        let projects = vec![
            project("0001", ProjectStatus::Implementing),
            project("0002", ProjectStatus::Abandoned),
            project("0003", ProjectStatus::OnHold),
        ];
        assert_eq!(ids(&terminal_projects(&projects)), vec!["0002", "0003"]);
    }

    #[test]
    fn test_filters_on_empty_input() {
        assert!(active_projects(&[]).is_empty());
        assert!(terminal_projects(&[]).is_empty());
    }

    // ------------------------------------------------------------------------
    // group_by_status tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_group_by_status() {
        let projects = vec![
            project("0001", ProjectStatus::Implementing),
            project("0002", ProjectStatus::Implementing),
            project("0003", ProjectStatus::Specified),
        ];
        let groups = group_by_status(
            &projects,
            &[ProjectStatus::Implementing, ProjectStatus::Specified],
        );

        assert_eq!(groups.len(), 2);
        assert_eq!(groups.get(ProjectStatus::Implementing).map(<[_]>::len), Some(2));
        assert_eq!(groups.get(ProjectStatus::Specified).map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_group_missing_status_is_empty() {
        let projects = vec![project("0001", ProjectStatus::Implementing)];
        let groups = group_by_status(&projects, &[ProjectStatus::Conceived]);

        assert_eq!(groups.get(ProjectStatus::Conceived), Some(&[][..]));
        assert!(groups.get(ProjectStatus::Implementing).is_none());
    }

    #[test]
    fn test_group_preserves_request_order_and_dedups() {
        let projects = vec![project("0001", ProjectStatus::Planned)];
        let groups = group_by_status(
            &projects,
            &[
                ProjectStatus::OnHold,
                ProjectStatus::Planned,
                ProjectStatus::OnHold,
            ],
        );

        let statuses: Vec<ProjectStatus> = groups.statuses().collect();
        assert_eq!(statuses, vec![ProjectStatus::OnHold, ProjectStatus::Planned]);
    }

    #[test]
    fn test_group_keeps_project_order() {
        let projects = vec![
            project("0009", ProjectStatus::Committed),
            project("0001", ProjectStatus::Committed),
        ];
        let groups = group_by_status(&projects, &[ProjectStatus::Committed]);
        let members = groups.get(ProjectStatus::Committed).unwrap_or_default();
        assert_eq!(ids(members), vec!["0009", "0001"]);
    }

    #[test]
    fn test_group_no_statuses() {
        let projects = vec![project("0001", ProjectStatus::Planned)];
        assert!(group_by_status(&projects, &[]).is_empty());
    }
}

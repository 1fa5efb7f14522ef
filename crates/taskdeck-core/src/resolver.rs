use crate::{Project, Task, slug};

/// Outcome of resolving a route slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// A project's name encodes to the slug.
    Found(&'a Project),
    /// No project matches. Not an error.
    NotFound,
}

impl<'a> Resolution<'a> {
    /// The resolved project, if any.
    #[must_use]
    pub const fn project(self) -> Option<&'a Project> {
        match self {
            Self::Found(project) => Some(project),
            Self::NotFound => None,
        }
    }
}

/// Resolve `slug` to a project by re-encoding every candidate name.
///
/// Projects are scanned in the order supplied. When several names encode to
/// the same slug the first one in that order wins. An empty slug never
/// matches, even against a project whose name encodes to `""`.
#[must_use]
pub fn resolve<'a>(slug: &str, projects: &'a [Project]) -> Resolution<'a> {
    if slug.is_empty() {
        return Resolution::NotFound;
    }
    projects
        .iter()
        .find(|project| slug::encode(&project.name) == slug)
        .map_or(Resolution::NotFound, Resolution::Found)
}

/// Owning project of `task`. Unassigned tasks and dangling references yield `None`.
#[must_use]
pub fn project_for_task<'a>(task: &Task, projects: &'a [Project]) -> Option<&'a Project> {
    let project_id = task.project_id?;
    projects.iter().find(|project| project.id == project_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ProjectId;

    #[test]
    fn empty_collection_never_resolves() {
        for slug in ["", "acme-corp", "x"] {
            assert_eq!(resolve(slug, &[]), Resolution::NotFound);
        }
    }

    #[test]
    fn resolves_exact_slug_only() {
        let projects = vec![Project::new("Acme Corp")];
        assert_eq!(slug::encode("Acme Corp"), "acme-corp");
        assert_eq!(resolve("acme-corp", &projects), Resolution::Found(&projects[0]));
        assert_eq!(resolve("acme-corp-x", &projects), Resolution::NotFound);
    }

    #[test]
    fn first_project_wins_on_collision() {
        let projects = vec![
            Project::new("Other"),
            Project::new("Side Project"),
            Project::new("side-project"),
        ];
        let resolved = resolve("side-project", &projects)
            .project()
            .unwrap_or_else(|| panic!("collision must still resolve"));
        assert_eq!(resolved.id, projects[1].id);
    }

    #[test]
    fn empty_slug_does_not_match_unnamed_project() {
        let projects = vec![Project::new("!!!")];
        assert_eq!(resolve("", &projects), Resolution::NotFound);
    }

    #[test]
    fn dangling_project_reference_yields_none() {
        let projects = vec![Project::new("Home")];
        let owned = Task::new("a").in_project(projects[0].id);
        let dangling = Task::new("b").in_project(ProjectId::new());
        let unassigned = Task::new("c");
        assert_eq!(project_for_task(&owned, &projects), Some(&projects[0]));
        assert_eq!(project_for_task(&dangling, &projects), None);
        assert_eq!(project_for_task(&unassigned, &projects), None);
    }
}

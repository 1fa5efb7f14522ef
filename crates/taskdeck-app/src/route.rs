//! Route table of the tracker.

use std::fmt;

use taskdeck_core::slug::{escape, unescape};

/// A parsed route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Dashboard,
    /// `/tasks`
    Tasks,
    /// `/projects/{slug}`; `slug` is `None` when the parameter is missing.
    Project {
        /// Route parameter, percent-decoded.
        slug: Option<String>,
    },
    /// Any other path.
    Unknown(String),
}

impl Route {
    /// Parse a path. Query strings, fragments and trailing slashes are ignored;
    /// the slug segment is percent-decoded.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Dashboard,
            ["tasks"] => Self::Tasks,
            ["projects"] => Self::Project { slug: None },
            ["projects", slug] => Self::Project {
                slug: Some(unescape(slug).into_owned()),
            },
            _ => Self::Unknown(path.to_owned()),
        }
    }

    /// Route to a project's detail view. An empty slug is a missing one.
    #[must_use]
    pub fn project(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self::Project {
            slug: (!slug.is_empty()).then_some(slug),
        }
    }

    /// Canonical path of the route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/".to_owned(),
            Self::Tasks => "/tasks".to_owned(),
            Self::Project { slug: None } => "/projects".to_owned(),
            Self::Project { slug: Some(slug) } => format!("/projects/{}", escape(slug)),
            Self::Unknown(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_core::{Project, project_path};

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse(""), Route::Dashboard);
        assert_eq!(Route::parse("/tasks/"), Route::Tasks);
        assert_eq!(Route::parse("/projects/acme-corp"), Route::project("acme-corp"));
        assert_eq!(Route::parse("/projects/acme-corp?tab=1#top"), Route::project("acme-corp"));
    }

    #[test]
    fn missing_slug_is_kept_as_none() {
        assert_eq!(Route::parse("/projects"), Route::Project { slug: None });
        assert_eq!(Route::parse("/projects//"), Route::Project { slug: None });
    }

    #[test]
    fn unknown_paths_are_preserved() {
        assert_eq!(
            Route::parse("/projects/a/b"),
            Route::Unknown("/projects/a/b".to_owned())
        );
        assert_eq!(Route::parse("/settings"), Route::Unknown("/settings".to_owned()));
    }

    #[test]
    fn project_links_parse_back_to_their_slug() {
        let project = Project::new("Acme Corp");
        let route = Route::parse(&project_path(&project));
        assert_eq!(route, Route::project(project.slug()));
        assert_eq!(route.to_string(), "/projects/acme-corp");
    }

    #[test]
    fn non_ascii_project_links_round_trip() {
        let project = Project::new("Café Über");
        let path = project_path(&project);
        let route = Route::parse(&path);
        assert_eq!(route, Route::project("café-über"));
        assert_eq!(route.path(), path);
        assert_eq!(Route::parse("/projects/caf%C3%A9"), Route::project("café"));
    }

    #[test]
    fn empty_project_slug_is_missing() {
        assert_eq!(Route::project(""), Route::Project { slug: None });
    }
}

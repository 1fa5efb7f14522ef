//! Dashboard view model: stats cards, project preview and recent tasks.

use taskdeck_core::{Project, Task, TaskStats, project_path};

use crate::config::ViewConfig;
use crate::loadable::Loadable;

/// Shown when there are no projects.
pub const NO_PROJECTS_MESSAGE: &str =
    "No projects yet. Create your first project to organize your tasks.";
/// Shown when there are no tasks.
pub const NO_TASKS_MESSAGE: &str = "No tasks yet. Create your first task to get started.";

/// One labelled count on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    /// Card title.
    pub title: &'static str,
    /// Count.
    pub value: usize,
}

/// A project in the dashboard preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard<'a> {
    /// The project.
    pub project: &'a Project,
    /// Link to the project's detail view.
    pub href: String,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView<'a> {
    /// Tasks are still loading: stats and recent tasks show placeholders.
    pub tasks_loading: bool,
    /// Projects are still loading: the project grid shows placeholders.
    pub projects_loading: bool,
    /// Counts over every task; zero until tasks are loaded.
    pub stats: TaskStats,
    /// First projects in source order.
    pub project_cards: Vec<ProjectCard<'a>>,
    /// First tasks in source order.
    pub recent_tasks: Vec<&'a Task>,
}

impl<'a> DashboardView<'a> {
    /// Derive the dashboard from the current collections.
    #[must_use]
    pub fn build(
        tasks: &'a Loadable<Vec<Task>>,
        projects: &'a Loadable<Vec<Project>>,
        config: &ViewConfig,
    ) -> Self {
        let limits = &config.dashboard;
        Self {
            tasks_loading: tasks.is_loading(),
            projects_loading: projects.is_loading(),
            stats: TaskStats::aggregate(tasks.items()),
            project_cards: projects
                .items()
                .iter()
                .take(limits.project_preview)
                .map(|project| ProjectCard {
                    project,
                    href: project_path(project),
                })
                .collect(),
            recent_tasks: tasks.items().iter().take(limits.recent_tasks).collect(),
        }
    }

    /// The four headline counts, in display order.
    #[must_use]
    pub const fn stat_cards(&self) -> [StatCard; 4] {
        [
            StatCard {
                title: "Total Tasks",
                value: self.stats.total,
            },
            StatCard {
                title: "In Progress",
                value: self.stats.in_progress,
            },
            StatCard {
                title: "Completed",
                value: self.stats.completed,
            },
            StatCard {
                title: "High Priority",
                value: self.stats.high_priority,
            },
        ]
    }

    /// Message for the project section once loaded and empty.
    #[must_use]
    pub fn projects_empty_message(&self) -> Option<&'static str> {
        (!self.projects_loading && self.project_cards.is_empty()).then_some(NO_PROJECTS_MESSAGE)
    }

    /// Message for the recent tasks section once loaded and empty.
    #[must_use]
    pub fn tasks_empty_message(&self) -> Option<&'static str> {
        (!self.tasks_loading && self.recent_tasks.is_empty()).then_some(NO_TASKS_MESSAGE)
    }
}

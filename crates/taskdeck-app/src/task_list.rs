//! Plain task listing: `/tasks`.

use taskdeck_core::{Project, Task, filter_tasks, project_for_task, project_path};

use crate::dashboard::NO_TASKS_MESSAGE;
use crate::loadable::Loadable;
use crate::project_page::NO_MATCHES_MESSAGE;

/// A task with the project context it renders with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow<'a> {
    /// The task.
    pub task: &'a Task,
    /// Owning project, when the reference resolves.
    pub project: Option<&'a Project>,
    /// Link to the owning project, when it resolves.
    pub project_href: Option<String>,
}

/// Everything the task listing renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView<'a> {
    /// Tasks are still loading.
    pub loading: bool,
    /// Matching tasks, in source order.
    pub rows: Vec<TaskRow<'a>>,
    /// Message for an empty, loaded listing.
    pub empty_message: Option<&'static str>,
}

impl<'a> TaskListView<'a> {
    /// Derive the listing from every task, the projects and the search text.
    #[must_use]
    pub fn build(
        tasks: &'a Loadable<Vec<Task>>,
        projects: &'a Loadable<Vec<Project>>,
        query: &str,
    ) -> Self {
        let rows: Vec<TaskRow<'a>> = filter_tasks(tasks.items(), query)
            .into_iter()
            .map(|task| {
                let project = project_for_task(task, projects.items());
                TaskRow {
                    task,
                    project,
                    project_href: project.map(project_path),
                }
            })
            .collect();
        let empty_message = (!tasks.is_loading() && rows.is_empty()).then_some(if query.is_empty() {
            NO_TASKS_MESSAGE
        } else {
            NO_MATCHES_MESSAGE
        });
        Self {
            loading: tasks.is_loading(),
            rows,
            empty_message,
        }
    }
}

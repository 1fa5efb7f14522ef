//! Domain types and pure view queries for taskdeck.
//!
//! Everything in this crate is a pure function of its inputs: no I/O, no
//! caches, no logging. Collections are taken in the order the caller supplies
//! them and are never reordered.

/// Identifier types.
pub mod id;
/// Route-slug resolution against the project collection.
pub mod resolver;
/// Project name to URL slug encoding.
pub mod slug;
/// Task collection statistics.
pub mod stats;
/// Task status and priority enums.
pub mod status;
/// Free-text task search.
pub mod text_matcher;

use serde::{Deserialize, Serialize};

use crate::id::{ProjectId, TaskId};

pub use crate::resolver::{Resolution, project_for_task, resolve};
pub use crate::slug::{encode as encode_slug, project_path};
pub use crate::stats::TaskStats;
pub use crate::status::{ParseTokenError, Priority, TaskStatus};
pub use crate::text_matcher::{TextMatcher, filter_tasks};

/// Snapshot of a task as delivered by the task service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier of the task.
    pub id: TaskId,
    /// Human-readable title.
    pub title: String,
    /// Optional longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: TaskStatus,
    /// Urgency.
    #[serde(default)]
    pub priority: Priority,
    /// Owning project, if any. May point at a project that no longer exists.
    #[serde(default)]
    pub project_id: Option<ProjectId>,
}

impl Task {
    /// Create a `todo`/`medium` task with a fresh identifier.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: None,
            status: TaskStatus::default(),
            priority: Priority::default(),
            project_id: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Assign the task to a project.
    #[must_use]
    pub const fn in_project(mut self, project: ProjectId) -> Self {
        self.project_id = Some(project);
        self
    }
}

/// Snapshot of a project as delivered by the project service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Identifier of the project.
    pub id: ProjectId,
    /// Display name. Not guaranteed unique.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Presentation colour, passed through untouched.
    #[serde(default)]
    pub color: String,
    /// Number of tasks, as counted by the project service.
    #[serde(default)]
    pub task_count: usize,
}

impl Project {
    /// Create a project with a fresh identifier and no tasks.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            description: None,
            color: String::new(),
            task_count: 0,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// URL slug derived from the current name.
    #[must_use]
    pub fn slug(&self) -> String {
        slug::encode(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_reads_camel_case_wire_shape() {
        let project = ProjectId::new();
        let task_id = TaskId::new();
        let json = format!(
            r#"{{"id":"{task_id}","title":"Ship it","status":"in_progress","priority":"urgent","projectId":"{project}"}}"#
        );
        let task: Task = serde_json::from_str(&json).unwrap_or_else(|err| panic!("parse task: {err}"));
        assert_eq!(task.id, task_id);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, Priority::Urgent);
        assert_eq!(task.project_id, Some(project));
        assert_eq!(task.description, None);
    }

    #[test]
    fn project_defaults_optional_fields() {
        let id = ProjectId::new();
        let json = format!(r#"{{"id":"{id}","name":"Acme Corp","taskCount":3}}"#);
        let project: Project =
            serde_json::from_str(&json).unwrap_or_else(|err| panic!("parse project: {err}"));
        assert_eq!(project.task_count, 3);
        assert!(project.color.is_empty());
        assert_eq!(project.slug(), "acme-corp");
    }

    #[test]
    fn builders_fill_fields() {
        let project = ProjectId::new();
        let task = Task::new("Fix bug")
            .with_description("in parser")
            .with_status(TaskStatus::Blocked)
            .with_priority(Priority::Low)
            .in_project(project);
        assert_eq!(task.description.as_deref(), Some("in parser"));
        assert_eq!(task.status, TaskStatus::Blocked);
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.project_id, Some(project));
    }
}

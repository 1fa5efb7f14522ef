//! Task mutation API consumed by the edit state machine.

use anyhow::Error;
use taskdeck_core::id::{ProjectId, TaskId};
use taskdeck_core::{Priority, Task, TaskStatus};

/// Editable fields of a task, as submitted from the task form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Status.
    pub status: TaskStatus,
    /// Priority.
    pub priority: Priority,
    /// Owning project.
    pub project_id: Option<ProjectId>,
}

impl TaskDraft {
    /// Blank draft, optionally assigned to a project.
    #[must_use]
    pub fn for_project(project_id: Option<ProjectId>) -> Self {
        Self {
            project_id,
            ..Self::default()
        }
    }

    /// Materialize the draft as a task with the given identifier.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            project_id: self.project_id,
        }
    }
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            priority: task.priority,
            project_id: task.project_id,
        }
    }
}

/// Create/update/delete operations offered by the task service.
pub trait TaskMutations {
    /// Error type bubbled up from the backing service.
    type Error: Into<Error>;

    /// Create a task from the draft and return its identifier.
    ///
    /// # Errors
    /// Returns a service-specific error when the task cannot be created.
    fn create_task(&mut self, draft: TaskDraft) -> Result<TaskId, Self::Error>;

    /// Replace the editable fields of an existing task.
    ///
    /// # Errors
    /// Returns a service-specific error when the task cannot be updated.
    fn update_task(&mut self, task: TaskId, draft: TaskDraft) -> Result<(), Self::Error>;

    /// Delete a task.
    ///
    /// # Errors
    /// Returns a service-specific error when the task cannot be deleted.
    fn delete_task(&mut self, task: TaskId) -> Result<(), Self::Error>;
}

/// What happened to a mutation requested by the edit state machine.
///
/// The state machine closes its modal or dialog whatever the outcome; this
/// value only lets the caller surface the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Nothing was open, so nothing was sent.
    Idle,
    /// A task was created.
    Created(TaskId),
    /// A task was updated.
    Updated(TaskId),
    /// A task was deleted.
    Deleted(TaskId),
    /// The service rejected the request.
    Failed {
        /// `"create"`, `"update"` or `"delete"`.
        action: &'static str,
        /// Rendered error chain.
        message: String,
    },
}

impl MutationOutcome {
    /// Whether the service rejected the request.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

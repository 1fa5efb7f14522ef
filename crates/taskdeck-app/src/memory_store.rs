//! In-memory task service used by the CLI and tests.

use std::convert::Infallible;

use taskdeck_core::id::{ProjectId, TaskId};
use taskdeck_core::{Project, Task};
use thiserror::Error;
use tracing::debug;

use crate::mutation::{TaskDraft, TaskMutations};
use crate::source::{ProjectSource, Snapshot, TaskSource, scope_tasks};

/// Errors reported by [`MemoryStore`] mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No task carries the identifier.
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    /// The draft title is blank.
    #[error("Task title must not be empty")]
    EmptyTitle,
}

/// Task and project collections held in memory.
///
/// Keeps insertion order; each project's `task_count` is recounted after every
/// mutation.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tasks: Vec<Task>,
    projects: Vec<Project>,
}

impl MemoryStore {
    /// Build a store from existing collections.
    #[must_use]
    pub fn new(tasks: Vec<Task>, projects: Vec<Project>) -> Self {
        let mut store = Self { tasks, projects };
        store.recount_projects();
        store
    }

    /// Current tasks, in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Current projects, in insertion order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Copy of both collections.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.clone(),
            projects: self.projects.clone(),
        }
    }

    fn position(&self, task: TaskId) -> Result<usize, StoreError> {
        self.tasks
            .iter()
            .position(|candidate| candidate.id == task)
            .ok_or(StoreError::TaskNotFound(task))
    }

    fn recount_projects(&mut self) {
        for project in &mut self.projects {
            project.task_count = count_in_project(&self.tasks, project.id);
        }
    }
}

impl From<Snapshot> for MemoryStore {
    fn from(snapshot: Snapshot) -> Self {
        Self::new(snapshot.tasks, snapshot.projects)
    }
}

fn count_in_project(tasks: &[Task], project: ProjectId) -> usize {
    tasks
        .iter()
        .filter(|task| task.project_id == Some(project))
        .count()
}

fn validate(draft: &TaskDraft) -> Result<(), StoreError> {
    if draft.title.trim().is_empty() {
        return Err(StoreError::EmptyTitle);
    }
    Ok(())
}

impl TaskMutations for MemoryStore {
    type Error = StoreError;

    fn create_task(&mut self, draft: TaskDraft) -> Result<TaskId, Self::Error> {
        validate(&draft)?;
        let id = TaskId::new();
        self.tasks.push(draft.into_task(id));
        self.recount_projects();
        debug!(task = %id, "task created");
        Ok(id)
    }

    fn update_task(&mut self, task: TaskId, draft: TaskDraft) -> Result<(), Self::Error> {
        validate(&draft)?;
        let index = self.position(task)?;
        self.tasks[index] = draft.into_task(task);
        self.recount_projects();
        debug!(task = %task, "task updated");
        Ok(())
    }

    fn delete_task(&mut self, task: TaskId) -> Result<(), Self::Error> {
        let index = self.position(task)?;
        self.tasks.remove(index);
        self.recount_projects();
        debug!(task = %task, "task deleted");
        Ok(())
    }
}

impl TaskSource for MemoryStore {
    type Error = Infallible;

    async fn fetch_tasks(&self, project: Option<ProjectId>) -> Result<Vec<Task>, Self::Error> {
        Ok(scope_tasks(&self.tasks, project))
    }
}

impl ProjectSource for MemoryStore {
    type Error = Infallible;

    async fn fetch_projects(&self) -> Result<Vec<Project>, Self::Error> {
        Ok(self.projects.clone())
    }
}

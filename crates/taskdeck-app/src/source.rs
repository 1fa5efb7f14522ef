//! Asynchronous task and project sources.

use std::path::{Path, PathBuf};

use anyhow::{Context, Error, Result};
use serde::{Deserialize, Serialize};
use taskdeck_core::id::ProjectId;
use taskdeck_core::{Project, Task};
use tracing::{debug, warn};

use crate::loadable::Loadable;

/// Supplier of task collections.
#[allow(async_fn_in_trait)]
pub trait TaskSource {
    /// Error type bubbled up from the backing service.
    type Error: Into<Error>;

    /// Fetch tasks, optionally scoped to one project.
    ///
    /// # Errors
    /// Returns a source-specific error when the tasks cannot be read.
    async fn fetch_tasks(&self, project: Option<ProjectId>) -> Result<Vec<Task>, Self::Error>;
}

/// Supplier of project collections.
#[allow(async_fn_in_trait)]
pub trait ProjectSource {
    /// Error type bubbled up from the backing service.
    type Error: Into<Error>;

    /// Fetch every project.
    ///
    /// # Errors
    /// Returns a source-specific error when the projects cannot be read.
    async fn fetch_projects(&self) -> Result<Vec<Project>, Self::Error>;
}

/// Read tasks into the tri-state the views consume.
pub async fn load_tasks<S: TaskSource>(source: &S, project: Option<ProjectId>) -> Loadable<Vec<Task>> {
    match source.fetch_tasks(project).await {
        Ok(tasks) => {
            debug!(count = tasks.len(), scoped = project.is_some(), "tasks loaded");
            Loadable::Loaded(tasks)
        }
        Err(err) => failed("tasks", err.into()),
    }
}

/// Read projects into the tri-state the views consume.
pub async fn load_projects<S: ProjectSource>(source: &S) -> Loadable<Vec<Project>> {
    match source.fetch_projects().await {
        Ok(projects) => {
            debug!(count = projects.len(), "projects loaded");
            Loadable::Loaded(projects)
        }
        Err(err) => failed("projects", err.into()),
    }
}

fn failed<T>(what: &'static str, err: Error) -> Loadable<T> {
    warn!(what, error = %err, "failed to load");
    Loadable::Failed(format!("{err:#}"))
}

/// Keep the tasks owned by `project`, or all of them when unscoped.
#[must_use]
pub fn scope_tasks(tasks: &[Task], project: Option<ProjectId>) -> Vec<Task> {
    match project {
        None => tasks.to_vec(),
        Some(id) => tasks
            .iter()
            .filter(|task| task.project_id == Some(id))
            .cloned()
            .collect(),
    }
}

/// Both collections as exported by the task service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Tasks in service order.
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Projects in service order.
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Snapshot {
    /// Parse a JSON snapshot.
    ///
    /// # Errors
    /// Returns an error if the document is not a valid snapshot.
    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("failed to parse snapshot")
    }
}

/// JSON snapshot file read afresh on every fetch.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Source backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the snapshot.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole snapshot.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub async fn read(&self) -> Result<Snapshot> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        Snapshot::from_json(&contents).with_context(|| format!("in {}", self.path.display()))
    }
}

impl TaskSource for SnapshotFile {
    type Error = Error;

    async fn fetch_tasks(&self, project: Option<ProjectId>) -> Result<Vec<Task>> {
        let snapshot = self.read().await?;
        Ok(scope_tasks(&snapshot.tasks, project))
    }
}

impl ProjectSource for SnapshotFile {
    type Error = Error;

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        Ok(self.read().await?.projects)
    }
}

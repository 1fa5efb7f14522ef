//! View-state layer for taskdeck.
//!
//! Turns task and project collections plus transient UI inputs (search text,
//! route parameter) into page view models, and owns the edit/delete state
//! machine. Data fetching and task mutation are reached through the traits in
//! [`source`] and [`mutation`].

pub mod config;
pub mod dashboard;
pub mod edit_state;
pub mod loadable;
pub mod memory_store;
pub mod mutation;
pub mod project_page;
pub mod route;
pub mod source;
pub mod task_list;

// Re-exports for convenience
pub use config::{DashboardConfig, ViewConfig};
pub use dashboard::{DashboardView, ProjectCard, StatCard};
pub use edit_state::{DeleteState, ModalMode, ModalState, TaskEditState};
pub use loadable::Loadable;
pub use memory_store::{MemoryStore, StoreError};
pub use mutation::{MutationOutcome, TaskDraft, TaskMutations};
pub use project_page::{ProjectHeader, ProjectPage, ProjectView};
pub use route::Route;
pub use source::{ProjectSource, Snapshot, SnapshotFile, TaskSource, load_projects, load_tasks};
pub use task_list::{TaskListView, TaskRow};

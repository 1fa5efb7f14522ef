//! Create/edit modal and delete-confirmation dialog state.
//!
//! The two axes are independent: opening the modal never touches the pending
//! delete and vice versa. Mutations are fire-and-forget: the owning axis closes
//! whatever the service answers.

use taskdeck_core::Task;
use taskdeck_core::id::ProjectId;
use tracing::{debug, warn};

use crate::mutation::{MutationOutcome, TaskDraft, TaskMutations};

/// What the open modal is doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    /// Creating a new task, optionally pre-assigned to a project.
    Create {
        /// Project the form is seeded with.
        default_project: Option<ProjectId>,
    },
    /// Editing an existing task.
    Edit(Task),
}

/// Create/edit modal state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    /// Not shown.
    #[default]
    Closed,
    /// Shown in the given mode.
    Open(ModalMode),
}

/// Delete-confirmation dialog state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteState {
    /// No confirmation pending.
    #[default]
    None,
    /// Waiting for the user to confirm deleting this task.
    PendingDelete(Task),
}

/// Combined modal and dialog state of a task listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskEditState {
    modal: ModalState,
    delete: DeleteState,
}

impl TaskEditState {
    /// Both axes closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current modal state.
    #[must_use]
    pub const fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Current delete-confirmation state.
    #[must_use]
    pub const fn delete(&self) -> &DeleteState {
        &self.delete
    }

    /// Whether the modal is shown.
    #[must_use]
    pub const fn is_modal_open(&self) -> bool {
        matches!(self.modal, ModalState::Open(_))
    }

    /// Task being edited, if the modal is open in edit mode.
    #[must_use]
    pub const fn editing_task(&self) -> Option<&Task> {
        match &self.modal {
            ModalState::Open(ModalMode::Edit(task)) => Some(task),
            _ => None,
        }
    }

    /// Task awaiting delete confirmation.
    #[must_use]
    pub const fn pending_delete(&self) -> Option<&Task> {
        match &self.delete {
            DeleteState::PendingDelete(task) => Some(task),
            DeleteState::None => None,
        }
    }

    /// Draft the modal form starts from: the edited task's fields, or a blank
    /// task seeded with the default project. `None` while closed.
    #[must_use]
    pub fn initial_draft(&self) -> Option<TaskDraft> {
        match &self.modal {
            ModalState::Closed => None,
            ModalState::Open(ModalMode::Create { default_project }) => {
                Some(TaskDraft::for_project(*default_project))
            }
            ModalState::Open(ModalMode::Edit(task)) => Some(TaskDraft::from(task)),
        }
    }

    /// Open the modal to create a task. Replaces any mode already open.
    pub fn request_create(&mut self, default_project: Option<ProjectId>) {
        self.modal = ModalState::Open(ModalMode::Create { default_project });
    }

    /// Open the modal to edit `task`. Replaces any mode already open.
    pub fn request_edit(&mut self, task: Task) {
        self.modal = ModalState::Open(ModalMode::Edit(task));
    }

    /// Close the modal without submitting.
    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Ask for confirmation before deleting `task`. Only one task can be
    /// pending; a new request replaces the previous one.
    pub fn request_delete(&mut self, task: Task) {
        self.delete = DeleteState::PendingDelete(task);
    }

    /// Dismiss the delete confirmation.
    pub fn cancel_delete(&mut self) {
        self.delete = DeleteState::None;
    }

    /// Send the modal's draft to the task service and close the modal.
    ///
    /// Creates in create mode, updates the edited task in edit mode. The modal
    /// is closed even when the service fails; the failure is logged and handed
    /// back for the caller to surface.
    pub fn submit<M: TaskMutations>(&mut self, draft: TaskDraft, mutations: &mut M) -> MutationOutcome {
        let outcome = match std::mem::take(&mut self.modal) {
            ModalState::Closed => return MutationOutcome::Idle,
            ModalState::Open(ModalMode::Create { .. }) => match mutations.create_task(draft) {
                Ok(id) => MutationOutcome::Created(id),
                Err(err) => failure("create", err.into()),
            },
            ModalState::Open(ModalMode::Edit(task)) => match mutations.update_task(task.id, draft) {
                Ok(()) => MutationOutcome::Updated(task.id),
                Err(err) => failure("update", err.into()),
            },
        };
        debug!(?outcome, "task modal submitted");
        outcome
    }

    /// Delete the pending task and close the dialog, whatever the outcome.
    pub fn confirm_delete<M: TaskMutations>(&mut self, mutations: &mut M) -> MutationOutcome {
        let DeleteState::PendingDelete(task) = std::mem::take(&mut self.delete) else {
            return MutationOutcome::Idle;
        };
        let outcome = match mutations.delete_task(task.id) {
            Ok(()) => MutationOutcome::Deleted(task.id),
            Err(err) => failure("delete", err.into()),
        };
        debug!(?outcome, "delete confirmed");
        outcome
    }
}

fn failure(action: &'static str, err: anyhow::Error) -> MutationOutcome {
    warn!(action, error = %err, "task mutation failed");
    MutationOutcome::Failed {
        action,
        message: format!("{err:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_store::MemoryStore;
    use anyhow::anyhow;
    use taskdeck_core::id::TaskId;

    struct FailingService;

    impl TaskMutations for FailingService {
        type Error = anyhow::Error;

        fn create_task(&mut self, _draft: TaskDraft) -> Result<TaskId, Self::Error> {
            Err(anyhow!("service unavailable"))
        }

        fn update_task(&mut self, _task: TaskId, _draft: TaskDraft) -> Result<(), Self::Error> {
            Err(anyhow!("service unavailable"))
        }

        fn delete_task(&mut self, _task: TaskId) -> Result<(), Self::Error> {
            Err(anyhow!("service unavailable"))
        }
    }

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.into(),
            ..TaskDraft::default()
        }
    }

    #[test]
    fn starts_closed() {
        let state = TaskEditState::new();
        assert_eq!(state.modal(), &ModalState::Closed);
        assert_eq!(state.delete(), &DeleteState::None);
        assert!(state.initial_draft().is_none());
    }

    #[test]
    fn edit_and_delete_are_independent() {
        let t1 = Task::new("first");
        let t2 = Task::new("second");
        let mut state = TaskEditState::new();

        state.request_edit(t1.clone());
        assert_eq!(state.modal(), &ModalState::Open(ModalMode::Edit(t1.clone())));

        state.request_delete(t2.clone());
        assert_eq!(state.delete(), &DeleteState::PendingDelete(t2.clone()));
        assert_eq!(state.editing_task(), Some(&t1));

        state.cancel_delete();
        assert_eq!(state.editing_task(), Some(&t1));

        state.request_delete(t2);
        state.close_modal();
        assert!(state.pending_delete().is_some());
    }

    #[test]
    fn only_one_task_is_pending_delete() {
        let mut state = TaskEditState::new();
        let first = Task::new("first");
        let second = Task::new("second");
        state.request_delete(first);
        state.request_delete(second.clone());
        assert_eq!(state.pending_delete(), Some(&second));
    }

    #[test]
    fn create_request_seeds_default_project() {
        let project = ProjectId::new();
        let mut state = TaskEditState::new();
        state.request_create(Some(project));
        assert_eq!(
            state.modal(),
            &ModalState::Open(ModalMode::Create {
                default_project: Some(project)
            })
        );
        let seeded = state
            .initial_draft()
            .unwrap_or_else(|| panic!("open modal must provide a draft"));
        assert_eq!(seeded.project_id, Some(project));
    }

    #[test]
    fn submit_creates_and_closes() {
        let mut store = MemoryStore::default();
        let mut state = TaskEditState::new();
        state.request_create(None);

        let outcome = state.submit(draft("Write docs"), &mut store);

        let MutationOutcome::Created(id) = outcome else {
            panic!("expected created outcome, got {outcome:?}");
        };
        assert!(!state.is_modal_open());
        assert!(store.tasks().iter().any(|task| task.id == id));
    }

    #[test]
    fn submit_updates_edited_task() {
        let task = Task::new("Old title");
        let mut store = MemoryStore::new(vec![task.clone()], Vec::new());
        let mut state = TaskEditState::new();
        state.request_edit(task.clone());

        let outcome = state.submit(draft("New title"), &mut store);

        assert_eq!(outcome, MutationOutcome::Updated(task.id));
        assert_eq!(store.tasks()[0].title, "New title");
        assert_eq!(state.modal(), &ModalState::Closed);
    }

    #[test]
    fn failed_submit_still_closes_modal() {
        let mut state = TaskEditState::new();
        state.request_edit(Task::new("x"));
        state.request_delete(Task::new("y"));

        let outcome = state.submit(draft("x"), &mut FailingService);

        assert!(outcome.is_failure());
        assert!(!state.is_modal_open());
        assert!(state.pending_delete().is_some());
    }

    #[test]
    fn submit_while_closed_is_idle() {
        let mut state = TaskEditState::new();
        assert_eq!(state.submit(draft("x"), &mut FailingService), MutationOutcome::Idle);
    }

    #[test]
    fn confirm_delete_removes_and_closes() {
        let keep = Task::new("keep");
        let doomed = Task::new("doomed");
        let mut store = MemoryStore::new(vec![keep.clone(), doomed.clone()], Vec::new());
        let mut state = TaskEditState::new();
        state.request_edit(keep.clone());
        state.request_delete(doomed.clone());

        let outcome = state.confirm_delete(&mut store);

        assert_eq!(outcome, MutationOutcome::Deleted(doomed.id));
        assert_eq!(state.delete(), &DeleteState::None);
        assert_eq!(state.editing_task(), Some(&keep));
        assert_eq!(store.tasks(), &[keep]);
    }

    #[test]
    fn failed_delete_still_closes_dialog() {
        let mut state = TaskEditState::new();
        state.request_delete(Task::new("y"));

        let outcome = state.confirm_delete(&mut FailingService);

        let MutationOutcome::Failed { action, message } = outcome else {
            panic!("expected failure outcome");
        };
        assert_eq!(action, "delete");
        assert!(message.contains("service unavailable"));
        assert_eq!(state.delete(), &DeleteState::None);
    }

    #[test]
    fn confirm_without_pending_delete_is_idle() {
        let mut state = TaskEditState::new();
        assert_eq!(state.confirm_delete(&mut FailingService), MutationOutcome::Idle);
    }
}

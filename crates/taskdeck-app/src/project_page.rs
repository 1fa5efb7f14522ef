//! Project detail page: `/projects/{slug}`.

use taskdeck_core::id::ProjectId;
use taskdeck_core::{Project, Resolution, Task, TaskStats, filter_tasks, resolve};

use crate::edit_state::TaskEditState;
use crate::loadable::Loadable;
use crate::mutation::{MutationOutcome, TaskDraft, TaskMutations};
use crate::route::Route;

/// Shown when a search hides every task.
pub const NO_MATCHES_MESSAGE: &str = "No tasks match your search.";
/// Shown when the project has no tasks.
pub const NO_PROJECT_TASKS_MESSAGE: &str = "No tasks yet. Create your first task for this project.";

/// Header state of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectHeader<'a> {
    /// The route carried no slug.
    Invalid,
    /// Projects are still loading.
    Loading,
    /// No project encodes to the slug.
    NotFound,
    /// The resolved project.
    Found(&'a Project),
}

impl<'a> ProjectHeader<'a> {
    /// The resolved project, if any.
    #[must_use]
    pub const fn project(self) -> Option<&'a Project> {
        match self {
            Self::Found(project) => Some(project),
            Self::Invalid | Self::Loading | Self::NotFound => None,
        }
    }
}

/// Everything the project page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectView<'a> {
    /// Header state.
    pub header: ProjectHeader<'a>,
    /// Per-status counts; only present once a project is resolved.
    pub stats: Option<TaskStats>,
    /// `"{completed} of {total} completed"` when the project has tasks.
    pub completion_summary: Option<String>,
    /// Whether to show the search box (only when there are tasks to search).
    pub show_search: bool,
    /// Tasks are still loading.
    pub tasks_loading: bool,
    /// Tasks matching the search text, in source order.
    pub tasks: Vec<&'a Task>,
    /// Message for an empty, loaded task list.
    pub empty_message: Option<&'static str>,
}

/// Transient state of one project page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPage {
    slug: Option<String>,
    search: String,
    edit: TaskEditState,
}

impl ProjectPage {
    /// Page for the given route parameter.
    #[must_use]
    pub fn new(slug: Option<String>) -> Self {
        Self {
            slug,
            ..Self::default()
        }
    }

    /// Page for a project route; `None` for any other route.
    #[must_use]
    pub fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::Project { slug } => Some(Self::new(slug.clone())),
            Route::Dashboard | Route::Tasks | Route::Unknown(_) => None,
        }
    }

    /// Route parameter.
    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Follow a route parameter change. Search text and dialogs are kept.
    pub fn set_slug(&mut self, slug: Option<String>) {
        self.slug = slug;
    }

    /// Current search text.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Replace the search text. The latest call wins.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Modal and dialog state.
    #[must_use]
    pub const fn edit_state(&self) -> &TaskEditState {
        &self.edit
    }

    /// Resolve the header against the current projects.
    #[must_use]
    pub fn header<'a>(&self, projects: &'a Loadable<Vec<Project>>) -> ProjectHeader<'a> {
        let Some(slug) = self.slug.as_deref() else {
            return ProjectHeader::Invalid;
        };
        if projects.is_loading() {
            return ProjectHeader::Loading;
        }
        match resolve(slug, projects.items()) {
            Resolution::Found(project) => ProjectHeader::Found(project),
            Resolution::NotFound => ProjectHeader::NotFound,
        }
    }

    /// Project the task source should be scoped to, once resolved.
    #[must_use]
    pub fn task_scope(&self, projects: &Loadable<Vec<Project>>) -> Option<ProjectId> {
        self.header(projects).project().map(|project| project.id)
    }

    /// Derive the page from the current collections.
    ///
    /// `tasks` is expected to be scoped to [`Self::task_scope`].
    #[must_use]
    pub fn view<'a>(
        &self,
        projects: &'a Loadable<Vec<Project>>,
        tasks: &'a Loadable<Vec<Task>>,
    ) -> ProjectView<'a> {
        let header = self.header(projects);
        if header == ProjectHeader::Invalid {
            return ProjectView {
                header,
                stats: None,
                completion_summary: None,
                show_search: false,
                tasks_loading: false,
                tasks: Vec::new(),
                empty_message: None,
            };
        }

        let all_tasks = tasks.items();
        let stats = TaskStats::aggregate(all_tasks);
        let has_tasks = !all_tasks.is_empty();
        let visible = filter_tasks(all_tasks, &self.search);
        // An unresolved project has no task list to be empty.
        let listable = matches!(header, ProjectHeader::Found(_) | ProjectHeader::Loading);
        let empty_message = (listable && !tasks.is_loading() && visible.is_empty()).then_some(
            if self.search.is_empty() {
                NO_PROJECT_TASKS_MESSAGE
            } else {
                NO_MATCHES_MESSAGE
            },
        );

        ProjectView {
            header,
            stats: header.project().map(|_| stats),
            completion_summary: has_tasks.then(|| stats.completion_summary()),
            show_search: has_tasks,
            tasks_loading: tasks.is_loading(),
            tasks: visible,
            empty_message,
        }
    }

    /// Open the create modal seeded with the resolved project. Does nothing
    /// (and returns `false`) while no project is resolved.
    pub fn request_create(&mut self, projects: &Loadable<Vec<Project>>) -> bool {
        let Some(project) = self.task_scope(projects) else {
            return false;
        };
        self.edit.request_create(Some(project));
        true
    }

    /// Open the edit modal for `task`.
    pub fn request_edit(&mut self, task: Task) {
        self.edit.request_edit(task);
    }

    /// Ask for confirmation before deleting `task`.
    pub fn request_delete(&mut self, task: Task) {
        self.edit.request_delete(task);
    }

    /// Close the modal without submitting.
    pub fn close_modal(&mut self) {
        self.edit.close_modal();
    }

    /// Dismiss the delete confirmation.
    pub fn cancel_delete(&mut self) {
        self.edit.cancel_delete();
    }

    /// Submit the modal form.
    pub fn submit<M: TaskMutations>(&mut self, draft: TaskDraft, mutations: &mut M) -> MutationOutcome {
        self.edit.submit(draft, mutations)
    }

    /// Confirm the pending delete.
    pub fn confirm_delete<M: TaskMutations>(&mut self, mutations: &mut M) -> MutationOutcome {
        self.edit.confirm_delete(mutations)
    }
}

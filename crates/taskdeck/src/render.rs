//! Plain-text rendering of the page view models.

use std::io::Write;

use anyhow::Result;
use taskdeck_app::{
    DashboardView, Loadable, ProjectHeader, ProjectPage, ProjectSource, Route, TaskListView, TaskSource,
    ViewConfig, load_projects, load_tasks,
};
use taskdeck_core::{Project, Task, TaskStatus, project_for_task};
use tracing::warn;

const INVALID_PROJECT: &str = "Invalid project";
const PROJECT_NOT_FOUND: &str = "Project Not Found";
const PROJECT_NOT_FOUND_HINT: &str =
    "The project you're looking for doesn't exist or you don't have access to it.";

/// Load what `route` needs from `source` and print its view.
pub(super) async fn render_route<S, W>(
    source: &S,
    route: &Route,
    search: &str,
    config: &ViewConfig,
    out: &mut W,
) -> Result<()>
where
    S: TaskSource + ProjectSource,
    W: Write,
{
    let projects = load_projects(source).await;
    report_failure("projects", &projects);

    match route {
        Route::Dashboard => {
            let tasks = load_tasks(source, None).await;
            report_failure("tasks", &tasks);
            write_dashboard(out, &DashboardView::build(&tasks, &projects, config))
        }
        Route::Tasks => {
            let tasks = load_tasks(source, None).await;
            report_failure("tasks", &tasks);
            write_task_list(out, &TaskListView::build(&tasks, &projects, search))
        }
        Route::Project { slug } => {
            let mut page = ProjectPage::new(slug.clone());
            page.set_search_text(search);
            let tasks = match page.task_scope(&projects) {
                Some(scope) => load_tasks(source, Some(scope)).await,
                None => Loadable::Loaded(Vec::new()),
            };
            report_failure("tasks", &tasks);
            write_project(out, &page, &projects, &tasks)
        }
        Route::Unknown(path) => {
            writeln!(out, "No view for {path}")?;
            Ok(())
        }
    }
}

fn report_failure<T>(what: &str, loaded: &Loadable<T>) {
    if let Some(message) = loaded.error() {
        warn!(what, %message, "rendering with empty {what}");
    }
}

fn write_dashboard<W: Write>(out: &mut W, view: &DashboardView<'_>) -> Result<()> {
    writeln!(out, "Dashboard")?;
    let cards: Vec<String> = view
        .stat_cards()
        .iter()
        .map(|card| format!("{}: {}", card.title, card.value))
        .collect();
    writeln!(out, "  {}", cards.join(" | "))?;

    writeln!(out)?;
    writeln!(out, "Your Projects")?;
    if let Some(message) = view.projects_empty_message() {
        writeln!(out, "  {message}")?;
    }
    for card in &view.project_cards {
        writeln!(
            out,
            "  - {} ({} tasks) -> {}",
            card.project.name, card.project.task_count, card.href
        )?;
        if let Some(description) = &card.project.description {
            writeln!(out, "      {description}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Recent Tasks")?;
    if let Some(message) = view.tasks_empty_message() {
        writeln!(out, "  {message}")?;
    }
    for task in &view.recent_tasks {
        writeln!(out, "  {}", task_line(task, None))?;
    }
    Ok(())
}

fn write_task_list<W: Write>(out: &mut W, view: &TaskListView<'_>) -> Result<()> {
    writeln!(out, "Tasks")?;
    if let Some(message) = view.empty_message {
        writeln!(out, "  {message}")?;
    }
    for row in &view.rows {
        writeln!(out, "  {}", task_line(row.task, row.project))?;
    }
    Ok(())
}

fn write_project<W: Write>(
    out: &mut W,
    page: &ProjectPage,
    projects: &Loadable<Vec<Project>>,
    tasks: &Loadable<Vec<Task>>,
) -> Result<()> {
    let view = page.view(projects, tasks);
    match view.header {
        ProjectHeader::Invalid => {
            writeln!(out, "{INVALID_PROJECT}")?;
            return Ok(());
        }
        ProjectHeader::Loading => writeln!(out, "Loading project...")?,
        ProjectHeader::NotFound => {
            writeln!(out, "{PROJECT_NOT_FOUND}")?;
            writeln!(out, "  {PROJECT_NOT_FOUND_HINT}")?;
        }
        ProjectHeader::Found(project) => {
            writeln!(out, "{}", project.name)?;
            if let Some(description) = &project.description {
                writeln!(out, "  {description}")?;
            }
        }
    }

    if let Some(stats) = view.stats {
        let mut cells = vec![format!("Total: {}", stats.total)];
        cells.extend(
            TaskStatus::ALL
                .iter()
                .map(|status| format!("{}: {}", status.label(), stats.count(*status))),
        );
        writeln!(out, "  {}", cells.join(" | "))?;
    }

    writeln!(out)?;
    match &view.completion_summary {
        Some(summary) => writeln!(out, "Tasks ({summary})")?,
        None => writeln!(out, "Tasks")?,
    }
    if view.show_search && !page.search_text().is_empty() {
        writeln!(out, "  search: {}", page.search_text())?;
    }
    if let Some(message) = view.empty_message {
        writeln!(out, "  {message}")?;
    }
    let project_list = projects.items();
    for task in &view.tasks {
        writeln!(out, "  {}", task_line(task, project_for_task(task, project_list)))?;
    }
    Ok(())
}

fn task_line(task: &Task, project: Option<&Project>) -> String {
    let mut line = format!("[{}] {} ({})", task.status, task.title, task.priority);
    if let Some(project) = project {
        line.push_str(" · ");
        line.push_str(&project.name);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_app::MemoryStore;
    use taskdeck_core::Priority;

    fn store() -> MemoryStore {
        let acme = Project::new("Acme Corp").with_description("Client work");
        let tasks = vec![
            Task::new("Fix bug")
                .with_status(TaskStatus::Completed)
                .with_priority(Priority::High)
                .in_project(acme.id),
            Task::new("Write docs").in_project(acme.id),
            Task::new("Call plumber"),
        ];
        MemoryStore::new(tasks, vec![acme])
    }

    async fn render(route: &str, search: &str) -> String {
        let mut out = Vec::new();
        render_route(&store(), &Route::parse(route), search, &ViewConfig::default(), &mut out)
            .await
            .unwrap_or_else(|err| panic!("render {route}: {err:#}"));
        String::from_utf8(out).unwrap_or_else(|err| panic!("utf8: {err}"))
    }

    #[tokio::test(flavor = "current_thread")]
    async fn dashboard_lists_stats_projects_and_recent_tasks() {
        let text = render("/", "").await;
        assert!(text.contains("Total Tasks: 3 | In Progress: 0 | Completed: 1 | High Priority: 1"));
        assert!(text.contains("- Acme Corp (2 tasks) -> /projects/acme-corp"));
        assert!(text.contains("[todo] Call plumber (medium)"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn project_view_filters_by_search() {
        let text = render("/projects/acme-corp", "DOCS").await;
        assert!(text.starts_with("Acme Corp\n  Client work\n"));
        assert!(text.contains("Tasks (1 of 2 completed)"));
        assert!(text.contains("[todo] Write docs (medium) · Acme Corp"));
        assert!(!text.contains("Fix bug"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn unknown_and_invalid_project_routes() {
        let text = render("/projects/nope", "").await;
        assert!(text.starts_with(PROJECT_NOT_FOUND));
        assert!(!text.contains("Total:"));
        assert!(!text.contains("No tasks yet"));

        let text = render("/projects", "").await;
        assert_eq!(text, format!("{INVALID_PROJECT}\n"));

        let text = render("/settings", "").await;
        assert_eq!(text, "No view for /settings\n");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn task_listing_shows_project_names() {
        let text = render("/tasks", "").await;
        assert!(text.contains("[completed] Fix bug (high) · Acme Corp"));
        assert!(text.contains("[todo] Call plumber (medium)\n"));
    }
}

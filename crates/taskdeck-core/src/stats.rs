use serde::Serialize;

use crate::{Task, TaskStatus};

/// Per-category task counts, computed in a single pass.
///
/// The four status counts always sum to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Tasks in `todo`.
    pub todo: usize,
    /// Tasks in `in_progress`.
    pub in_progress: usize,
    /// Tasks in `completed`.
    pub completed: usize,
    /// Tasks in `blocked`.
    pub blocked: usize,
    /// Tasks whose priority is `high` or `urgent`.
    pub high_priority: usize,
}

impl TaskStats {
    /// Count the given tasks.
    #[must_use]
    pub fn aggregate<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        tasks.into_iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            match task.status {
                TaskStatus::Todo => stats.todo += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Completed => stats.completed += 1,
                TaskStatus::Blocked => stats.blocked += 1,
            }
            if task.priority.is_high() {
                stats.high_priority += 1;
            }
            stats
        })
    }

    /// Count for one status.
    #[must_use]
    pub const fn count(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
            TaskStatus::Blocked => self.blocked,
        }
    }

    /// `"{completed} of {total} completed"`.
    #[must_use]
    pub fn completion_summary(&self) -> String {
        format!("{} of {} completed", self.completed, self.total)
    }
}

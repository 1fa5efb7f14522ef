use crate::Task;

/// Case-insensitive substring matcher over a task's title and description.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    needle: String,
}

impl TextMatcher {
    /// Build a matcher for `query`. Returns `None` for the empty query, which
    /// matches everything.
    ///
    /// The query is not trimmed: whitespace is part of the needle.
    #[must_use]
    pub fn new(query: &str) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        Some(Self {
            needle: query.to_lowercase(),
        })
    }

    /// Whether the title, or the description when present, contains the query.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_field(&task.title)
            || task
                .description
                .as_deref()
                .is_some_and(|description| self.matches_field(description))
    }

    fn matches_field(&self, value: &str) -> bool {
        value.to_lowercase().contains(&self.needle)
    }
}

/// Narrow `tasks` to those matching `query`, preserving order.
#[must_use]
pub fn filter_tasks<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    match TextMatcher::new(query) {
        None => tasks.iter().collect(),
        Some(matcher) => tasks.iter().filter(|task| matcher.matches(task)).collect(),
    }
}

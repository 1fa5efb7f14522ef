//! Tri-state wrapper for values supplied by asynchronous sources.

/// Result of an external read as seen by the views.
///
/// `Loading` and `Failed` are not errors for the view layer: they render
/// neutral defaults (zeroed stats, empty lists).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Loadable<T> {
    /// The read has not completed yet.
    #[default]
    Loading,
    /// The read completed.
    Loaded(T),
    /// The read failed; the message is for display only.
    Failed(String),
}

impl<T> Loadable<T> {
    /// Whether the read is still in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// The failure message, if the read failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Loaded(_) => None,
        }
    }

    /// Map the loaded value.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Loadable<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Loading => Loadable::Loading,
            Self::Loaded(value) => Loadable::Loaded(f(value)),
            Self::Failed(message) => Loadable::Failed(message),
        }
    }
}

impl<T> Loadable<Vec<T>> {
    /// Loaded items, or an empty slice while loading or after a failure.
    #[must_use]
    pub fn items(&self) -> &[T] {
        match self.value() {
            Some(items) => items,
            None => &[],
        }
    }
}

impl<T, E> From<Result<T, E>> for Loadable<T>
where
    E: std::fmt::Display,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

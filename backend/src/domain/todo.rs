//! Todo entity and its write-side inputs.

use std::fmt;

use chrono::{DateTime, Utc};

/// Storage-assigned todo identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(i32);

impl TodoId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for TodoId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A titled task with a completion flag, as persisted.
///
/// `id` and `created_at` are assigned by storage and never change; only
/// `title` and `completed` are replaced by updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    title: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl Todo {
    /// Rehydrate a stored todo.
    pub fn new(
        id: TodoId,
        title: impl Into<String>,
        completed: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
            created_at,
        }
    }

    /// Storage-assigned identifier.
    pub fn id(&self) -> TodoId {
        self.id
    }

    /// Current title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the task is done.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Insertion time, set by storage.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Input for creating a todo. New todos always start incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    /// Title of the new todo.
    pub title: String,
}

impl NewTodo {
    /// Input for a todo titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// The mutable fields of a todo.
///
/// Updates replace both fields at once; seeding uses the same shape to
/// insert rows with an explicit completion flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoContent {
    /// Replacement title.
    pub title: String,
    /// Replacement completion flag.
    pub completed: bool,
}

impl TodoContent {
    /// Bundle a title and completion flag.
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }
}

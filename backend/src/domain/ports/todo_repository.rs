//! Driven port for todo persistence.

use async_trait::async_trait;

use crate::domain::{NewTodo, Todo, TodoContent, TodoId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by todo repository adapters.
    ///
    /// The message carries the storage driver's own text; callers surface it
    /// verbatim.
    pub enum TodoRepositoryError {
        /// A connection could not be checked out of the pool.
        Connection { message: String } => "{message}",
        /// A statement failed during execution.
        Query { message: String } => "{message}",
    }
}

/// Single-statement access to the `todos` table.
///
/// Missing rows are not errors at this boundary: lookups return `None`,
/// deletes return `false`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos, newest first.
    async fn list(&self) -> Result<Vec<Todo>, TodoRepositoryError>;

    /// Fetch one todo by identifier.
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoRepositoryError>;

    /// Insert an incomplete todo and return the stored record.
    async fn insert(&self, todo: &NewTodo) -> Result<Todo, TodoRepositoryError>;

    /// Replace title and completion flag, returning the stored record.
    async fn update(
        &self,
        id: TodoId,
        content: &TodoContent,
    ) -> Result<Option<Todo>, TodoRepositoryError>;

    /// Delete one todo; `false` when no row matched.
    async fn delete(&self, id: TodoId) -> Result<bool, TodoRepositoryError>;

    /// Number of stored todos.
    async fn count(&self) -> Result<i64, TodoRepositoryError>;

    /// Insert several todos in one statement, returning the row count.
    async fn insert_batch(&self, rows: &[TodoContent]) -> Result<usize, TodoRepositoryError>;
}

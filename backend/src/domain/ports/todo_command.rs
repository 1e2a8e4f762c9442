//! Driving port for todo mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewTodo, Todo, TodoContent, TodoId};

/// Write-side use cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoCommand: Send + Sync {
    /// Create an incomplete todo.
    async fn create(&self, todo: NewTodo) -> Result<Todo, Error>;

    /// Replace both mutable fields. Fails with `NotFound` for unknown ids.
    async fn update(&self, id: TodoId, content: TodoContent) -> Result<Todo, Error>;

    /// Remove a todo. Fails with `NotFound` when nothing was deleted.
    async fn delete(&self, id: TodoId) -> Result<(), Error>;
}

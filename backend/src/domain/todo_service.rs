//! Todo domain service.
//!
//! Implements both driving ports on top of a [`TodoRepository`], turning
//! missing rows into `NotFound` and every storage failure into an internal
//! error that carries the driver's message.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{TodoCommand, TodoQuery, TodoRepository, TodoRepositoryError};
use crate::domain::{Error, NewTodo, Todo, TodoContent, TodoId};

/// Message returned whenever an identifier matches no row.
pub const TODO_NOT_FOUND: &str = "Todo not found";

fn map_repository_error(error: TodoRepositoryError) -> Error {
    Error::internal(error.to_string())
}

fn not_found(id: TodoId) -> Error {
    tracing::debug!(todo_id = %id, "todo lookup matched no row");
    Error::not_found(TODO_NOT_FOUND)
}

/// Service backing [`TodoCommand`] and [`TodoQuery`].
#[derive(Clone)]
pub struct TodoService<R> {
    todo_repo: Arc<R>,
}

impl<R> TodoService<R> {
    /// Create a service over the given repository.
    pub fn new(todo_repo: Arc<R>) -> Self {
        Self { todo_repo }
    }
}

#[async_trait]
impl<R> TodoQuery for TodoService<R>
where
    R: TodoRepository,
{
    async fn list(&self) -> Result<Vec<Todo>, Error> {
        self.todo_repo.list().await.map_err(map_repository_error)
    }

    async fn get(&self, id: TodoId) -> Result<Todo, Error> {
        self.todo_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }
}

#[async_trait]
impl<R> TodoCommand for TodoService<R>
where
    R: TodoRepository,
{
    async fn create(&self, todo: NewTodo) -> Result<Todo, Error> {
        self.todo_repo
            .insert(&todo)
            .await
            .map_err(map_repository_error)
    }

    async fn update(&self, id: TodoId, content: TodoContent) -> Result<Todo, Error> {
        self.todo_repo
            .update(id, &content)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: TodoId) -> Result<(), Error> {
        let deleted = self
            .todo_repo
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if deleted { Ok(()) } else { Err(not_found(id)) }
    }
}

#[cfg(test)]
#[path = "todo_service_tests.rs"]
mod tests;

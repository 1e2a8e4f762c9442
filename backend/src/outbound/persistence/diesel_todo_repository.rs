//! PostgreSQL-backed `TodoRepository` implementation using Diesel.
//!
//! Every method is one statement on one pooled connection. Failures keep the
//! driver's own message so the HTTP layer can report it unchanged.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{NewTodo, Todo, TodoContent, TodoId};

use super::models::{NewTodoRow, SeedTodoRow, TodoRow, TodoUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::todos;

/// Diesel-backed implementation of the `TodoRepository` port.
#[derive(Clone)]
pub struct DieselTodoRepository {
    pool: DbPool,
}

impl DieselTodoRepository {
    /// Create a repository sharing the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TodoRepositoryError {
    TodoRepositoryError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error) -> TodoRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            debug!(error = info.message(), "database connection closed");
            TodoRepositoryError::connection(info.message())
        }
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, error = info.message(), "diesel operation failed");
            TodoRepositoryError::query(info.message())
        }
        other => {
            debug!(error = %other, "diesel operation failed");
            TodoRepositoryError::query(other.to_string())
        }
    }
}

#[async_trait]
impl TodoRepository for DieselTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TodoRow> = todos::table
            .select(TodoRow::as_select())
            .order((todos::created_at.desc(), todos::id.desc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TodoRow> = todos::table
            .find(id.get())
            .select(TodoRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Todo::from))
    }

    async fn insert(&self, todo: &NewTodo) -> Result<Todo, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: TodoRow = diesel::insert_into(todos::table)
            .values(&NewTodoRow {
                title: todo.title.as_str(),
            })
            .returning(TodoRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: TodoId,
        content: &TodoContent,
    ) -> Result<Option<Todo>, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TodoRow> = diesel::update(todos::table.find(id.get()))
            .set(&TodoUpdate {
                title: content.title.as_str(),
                completed: content.completed,
            })
            .returning(TodoRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Todo::from))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(todos::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }

    async fn count(&self) -> Result<i64, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        todos::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn insert_batch(&self, rows: &[TodoContent]) -> Result<usize, TodoRepositoryError> {
        if rows.is_empty() {
            return Ok(0);
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let values: Vec<SeedTodoRow<'_>> = rows
            .iter()
            .map(|row| SeedTodoRow {
                title: row.title.as_str(),
                completed: row.completed,
            })
            .collect();

        diesel::insert_into(todos::table)
            .values(&values)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}

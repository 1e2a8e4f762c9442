//! Driving port for todo reads.

use async_trait::async_trait;

use crate::domain::{Error, Todo, TodoId};

/// Read-side use cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoQuery: Send + Sync {
    /// Every todo, newest first.
    async fn list(&self) -> Result<Vec<Todo>, Error>;

    /// One todo by identifier. Fails with `NotFound` for unknown ids.
    async fn get(&self, id: TodoId) -> Result<Todo, Error>;
}

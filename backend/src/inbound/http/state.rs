//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the driving ports,
//! so they can be exercised without a database.

use std::sync::Arc;

use crate::domain::ports::{TodoCommand, TodoQuery};

/// Dependency bundle for the todo handlers.
#[derive(Clone)]
pub struct HttpState {
    pub todos: Arc<dyn TodoCommand>,
    pub todos_query: Arc<dyn TodoQuery>,
}

impl HttpState {
    /// Bundle the command and query ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use todo_backend::domain::TodoService;
    /// use todo_backend::inbound::http::state::HttpState;
    /// use todo_backend::outbound::persistence::{DbPool, DieselTodoRepository};
    ///
    /// fn build(pool: DbPool) -> HttpState {
    ///     let service = Arc::new(TodoService::new(Arc::new(DieselTodoRepository::new(pool))));
    ///     HttpState::new(service.clone(), service)
    /// }
    /// ```
    pub fn new(todos: Arc<dyn TodoCommand>, todos_query: Arc<dyn TodoQuery>) -> Self {
        Self { todos, todos_query }
    }
}

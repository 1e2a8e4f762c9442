//! Test helpers for inbound HTTP components.

use std::sync::{Arc, Mutex};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::Trace;
use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{NewTodo, Todo, TodoContent, TodoId, TodoService};
use crate::inbound::http::state::HttpState;

#[derive(Default)]
struct Table {
    rows: Vec<Todo>,
    last_id: i32,
}

/// `TodoRepository` backed by a vector.
///
/// Identifiers start at 1 and each insert is stamped one second after the
/// previous one, so list ordering is deterministic.
#[derive(Default)]
pub struct InMemoryTodoRepository {
    table: Mutex<Table>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Table> {
        self.table.lock().expect("in-memory table lock")
    }

    fn push(table: &mut Table, title: &str, completed: bool) -> Todo {
        table.last_id += 1;
        let epoch = DateTime::<Utc>::from_timestamp(1_735_689_600, 0).expect("valid epoch");
        let todo = Todo::new(
            TodoId::new(table.last_id),
            title,
            completed,
            epoch + Duration::seconds(i64::from(table.last_id)),
        );
        table.rows.push(todo.clone());
        todo
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        let mut rows = self.lock().rows.clone();
        rows.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(rows)
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoRepositoryError> {
        Ok(self.lock().rows.iter().find(|t| t.id() == id).cloned())
    }

    async fn insert(&self, todo: &NewTodo) -> Result<Todo, TodoRepositoryError> {
        Ok(Self::push(&mut self.lock(), &todo.title, false))
    }

    async fn update(
        &self,
        id: TodoId,
        content: &TodoContent,
    ) -> Result<Option<Todo>, TodoRepositoryError> {
        let mut table = self.lock();
        let Some(slot) = table.rows.iter_mut().find(|t| t.id() == id) else {
            return Ok(None);
        };
        *slot = Todo::new(id, content.title.clone(), content.completed, slot.created_at());
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, TodoRepositoryError> {
        let mut table = self.lock();
        let before = table.rows.len();
        table.rows.retain(|t| t.id() != id);
        Ok(table.rows.len() < before)
    }

    async fn count(&self) -> Result<i64, TodoRepositoryError> {
        Ok(i64::try_from(self.lock().rows.len()).unwrap_or(i64::MAX))
    }

    async fn insert_batch(&self, rows: &[TodoContent]) -> Result<usize, TodoRepositoryError> {
        let mut table = self.lock();
        for row in rows {
            Self::push(&mut table, &row.title, row.completed);
        }
        Ok(rows.len())
    }
}

/// Handler state wired to a real `TodoService` over `repo`.
pub fn state_for(repo: Arc<InMemoryTodoRepository>) -> HttpState {
    let service = Arc::new(TodoService::new(repo));
    HttpState::new(service.clone(), service)
}

/// App exposing the todo routes under `/api`, wrapped in the trace
/// middleware as in production.
pub fn todo_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(web::scope("/api").configure(super::todos::configure))
}

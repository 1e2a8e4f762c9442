//! Todo HTTP handlers.
//!
//! ```text
//! GET    /api/todos
//! GET    /api/todos/{id}
//! POST   /api/todos        {"title":"Buy milk"}
//! PUT    /api/todos/{id}   {"title":"Buy milk","completed":true}
//! DELETE /api/todos/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewTodo, Todo, TodoContent, TodoId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Todo as rendered to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TodoResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Learn Go")]
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id().get(),
            title: todo.title().to_owned(),
            completed: todo.completed(),
            created_at: todo.created_at(),
        }
    }
}

/// Body of `POST /api/todos`.
///
/// Clients may send a whole todo back: `id`, `completed` and `created_at`
/// are accepted and ignored, since storage assigns them. Any other key is
/// rejected.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTodoRequest {
    #[schema(example = "Build REST API")]
    pub title: String,
    #[serde(rename = "id", default)]
    #[schema(ignore)]
    _id: Option<IgnoredAny>,
    #[serde(rename = "completed", default)]
    #[schema(ignore)]
    _completed: Option<IgnoredAny>,
    #[serde(rename = "created_at", default)]
    #[schema(ignore)]
    _created_at: Option<IgnoredAny>,
}

impl From<CreateTodoRequest> for NewTodo {
    fn from(value: CreateTodoRequest) -> Self {
        NewTodo::new(value.title)
    }
}

/// Body of `PUT /api/todos/{id}`. Both fields are required.
///
/// `id` and `created_at` from a fetched todo are accepted and ignored: the
/// path names the row and the creation time never changes.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateTodoRequest {
    #[schema(example = "Write Documentation")]
    pub title: String,
    pub completed: bool,
    #[serde(rename = "id", default)]
    #[schema(ignore)]
    _id: Option<IgnoredAny>,
    #[serde(rename = "created_at", default)]
    #[schema(ignore)]
    _created_at: Option<IgnoredAny>,
}

impl From<UpdateTodoRequest> for TodoContent {
    fn from(value: UpdateTodoRequest) -> Self {
        TodoContent::new(value.title, value.completed)
    }
}

/// List every todo, newest first.
#[utoipa::path(
    get,
    path = "/api/todos",
    responses(
        (status = 200, description = "All todos", body = [TodoResponse]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["todos"],
    operation_id = "listTodos"
)]
#[get("/todos")]
pub async fn list_todos(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TodoResponse>>> {
    let todos = state.todos_query.list().await?;
    Ok(web::Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Fetch one todo.
#[utoipa::path(
    get,
    path = "/api/todos/{id}",
    params(("id" = i32, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "The todo", body = TodoResponse),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Todo not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["todos"],
    operation_id = "getTodo"
)]
#[get("/todos/{id}")]
pub async fn get_todo(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<TodoResponse>> {
    let id = TodoId::new(path.into_inner());
    let todo = state.todos_query.get(id).await?;
    Ok(web::Json(todo.into()))
}

/// Create an incomplete todo.
#[utoipa::path(
    post,
    path = "/api/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Created todo", body = TodoResponse),
        (status = 400, description = "Invalid request payload", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["todos"],
    operation_id = "createTodo"
)]
#[post("/todos")]
pub async fn create_todo(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTodoRequest>,
) -> ApiResult<HttpResponse> {
    let todo = state.todos.create(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(TodoResponse::from(todo)))
}

/// Replace a todo's title and completion flag.
#[utoipa::path(
    put,
    path = "/api/todos/{id}",
    params(("id" = i32, Path, description = "Todo ID")),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Updated todo", body = TodoResponse),
        (status = 400, description = "Invalid request payload", body = ErrorBody),
        (status = 404, description = "Todo not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["todos"],
    operation_id = "updateTodo"
)]
#[put("/todos/{id}")]
pub async fn update_todo(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UpdateTodoRequest>,
) -> ApiResult<web::Json<TodoResponse>> {
    let id = TodoId::new(path.into_inner());
    let todo = state.todos.update(id, payload.into_inner().into()).await?;
    Ok(web::Json(todo.into()))
}

/// Delete a todo.
#[utoipa::path(
    delete,
    path = "/api/todos/{id}",
    params(("id" = i32, Path, description = "Todo ID")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Todo not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["todos"],
    operation_id = "deleteTodo"
)]
#[delete("/todos/{id}")]
pub async fn delete_todo(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state.todos.delete(TodoId::new(path.into_inner())).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register the todo routes and their extractor configuration on a scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(super::extractors::json_config())
        .app_data(super::extractors::path_config())
        .service(list_todos)
        .service(get_todo)
        .service(create_todo)
        .service(update_todo)
        .service(delete_todo);
}

#[cfg(test)]
#[path = "todos_tests.rs"]
mod tests;

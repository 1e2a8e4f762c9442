//! Domain primitives, ports and services.
//!
//! Purpose: define the todo entity and the use cases inbound adapters call,
//! independent of HTTP and SQL.
//!
//! Public surface:
//! - `Todo`, `TodoId`, `NewTodo`, `TodoContent`: the entity and its inputs.
//! - `Error`, `ErrorCode`: transport-agnostic failures.
//! - `TodoService`: implementation of the `TodoCommand`/`TodoQuery` ports.
//! - `seed_sample_todos`: startup sample data.

pub mod error;
pub mod ports;
pub mod sample_todos;
pub mod todo;
pub mod todo_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::sample_todos::{SAMPLE_TODOS, SeedOutcome, seed_sample_todos};
pub use self::todo::{NewTodo, Todo, TodoContent, TodoId};
pub use self::todo_service::{TODO_NOT_FOUND, TodoService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

//! PostgreSQL persistence adapters using Diesel.
//!
//! - **Thin adapter**: [`DieselTodoRepository`] only translates between row
//!   structs and domain types.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Async pooling**: `diesel-async` connections pooled by `bb8`.
//! - **Schema bootstrap**: embedded migrations applied at startup.
//!
//! # Example
//!
//! ```ignore
//! use todo_backend::outbound::persistence::{DbPool, DieselTodoRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/todo")).await?;
//! let repo = DieselTodoRepository::new(pool);
//! ```

mod diesel_todo_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_todo_repository::DieselTodoRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations, run_migrations_blocking};
pub use pool::{DbPool, PoolConfig, PoolError};

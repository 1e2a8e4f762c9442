//! Storage preparation run once at startup.
//!
//! The pool is opened before the listener binds; migrations and seeding run
//! while the readiness endpoint still reports 503. Any failure here is fatal:
//! the binary logs it and exits non-zero.

use std::io;

use tracing::info;

use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{SeedOutcome, seed_sample_todos};
use crate::outbound::persistence::{
    DbPool, DieselTodoRepository, MigrationError, PoolConfig, PoolError, run_migrations,
};

use crate::inbound::http::health::HealthState;

use super::ServiceSettings;

/// Reasons the service could not start.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to load configuration: {message}")]
    Config { message: String },
    #[error("failed to connect to database: {0}")]
    Pool(#[from] PoolError),
    #[error("failed to create schema: {0}")]
    Migration(#[from] MigrationError),
    #[error("failed to seed sample data: {0}")]
    Seed(#[from] TodoRepositoryError),
}

impl StartupError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<StartupError> for io::Error {
    fn from(value: StartupError) -> Self {
        io::Error::other(value.to_string())
    }
}

/// Open the connection pool for the configured database.
///
/// # Errors
/// Returns [`StartupError::Pool`] when no connection can be established.
pub async fn connect(settings: &ServiceSettings) -> Result<DbPool, StartupError> {
    Ok(DbPool::new(PoolConfig::new(settings.database_url())).await?)
}

/// Insert the sample todos when `enabled`, returning what happened.
///
/// `None` means seeding was switched off and storage was not touched.
///
/// # Errors
/// Propagates repository failures.
pub async fn seed_if_enabled<R>(
    enabled: bool,
    repo: &R,
) -> Result<Option<SeedOutcome>, TodoRepositoryError>
where
    R: TodoRepository + ?Sized,
{
    if !enabled {
        info!("sample data seeding disabled");
        return Ok(None);
    }
    let outcome = seed_sample_todos(repo).await?;
    match outcome {
        SeedOutcome::Applied { inserted } => info!(inserted, "sample todos seeded"),
        SeedOutcome::AlreadyPopulated { existing } => info!(existing, "sample todos not needed"),
    }
    Ok(Some(outcome))
}

/// Create the schema and seed sample data when enabled, then mark storage
/// ready on `health`.
///
/// # Errors
/// Returns the first failing step as a [`StartupError`]; `health` is left
/// not ready.
pub async fn prepare_storage(
    settings: &ServiceSettings,
    pool: &DbPool,
    health: &HealthState,
) -> Result<(), StartupError> {
    let applied = run_migrations(&settings.database_url()).await?;
    info!(applied, "database schema ready");

    let repo = DieselTodoRepository::new(pool.clone());
    seed_if_enabled(settings.seed_sample_data(), &repo).await?;

    health.mark_storage_ready();
    Ok(())
}

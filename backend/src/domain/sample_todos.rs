//! Sample data inserted into an empty todo table at startup.

use tracing::info;

use crate::domain::TodoContent;
use crate::domain::ports::{TodoRepository, TodoRepositoryError};

/// Titles and completion flags of the sample todos, in insertion order.
pub const SAMPLE_TODOS: [(&str, bool); 3] = [
    ("Learn Go", false),
    ("Build REST API", false),
    ("Write Documentation", true),
];

/// Result of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table was empty and the samples were inserted.
    Applied { inserted: usize },
    /// The table already held rows; nothing was written.
    AlreadyPopulated { existing: i64 },
}

/// Insert [`SAMPLE_TODOS`] when the repository holds no todos.
///
/// The count and the insert are separate statements, so two processes
/// starting against the same empty table may both seed.
///
/// # Errors
/// Propagates any repository failure unchanged.
pub async fn seed_sample_todos<R>(repo: &R) -> Result<SeedOutcome, TodoRepositoryError>
where
    R: TodoRepository + ?Sized,
{
    let existing = repo.count().await?;
    if existing > 0 {
        info!(existing, "todos table already populated; sample data skipped");
        return Ok(SeedOutcome::AlreadyPopulated { existing });
    }

    let rows: Vec<TodoContent> = SAMPLE_TODOS
        .iter()
        .map(|(title, completed)| TodoContent::new(*title, *completed))
        .collect();
    let inserted = repo.insert_batch(&rows).await?;
    info!(inserted, "sample data inserted into todos table");
    Ok(SeedOutcome::Applied { inserted })
}

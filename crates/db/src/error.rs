use basic_template_core::error::CoreError;

/// Error returned by repository operations.
///
/// Separates domain outcomes (a missing row) from storage failures so callers
/// can map them independently.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

//! Repository error type.

use pavilio_core::EngineError;
use pavilio_shared::AppError;
use sea_orm::DbErr;

/// Errors returned by repositories.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The engine rejected the loaded data.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Engine(engine) => engine.into(),
            RepositoryError::Database(db) => Self::Database(db.to_string()),
        }
    }
}

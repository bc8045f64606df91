use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Failed to obtain a pooled connection.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// Underlying storage error. Unique-constraint and foreign-key
    /// violations surface here untranslated.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// The operation would break a referential invariant.
    #[error("{0}")]
    Conflict(String),
    /// Stored data failed domain validation during conversion.
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(value: TypeConstraintError) -> Self {
        RepositoryError::Validation(value.to_string())
    }
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::categories::{CreateCategoryFormError, UpdateCategoryFormError};
use crate::forms::posts::{CreatePostFormError, UpdatePostFormError};

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// The operation conflicts with existing references.
    #[error("{0}")]
    Conflict(String),
    /// Request form failed validation.
    #[error("{0}")]
    Form(String),
    /// A constrained domain type rejected the input.
    #[error("{0}")]
    TypeConstraint(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(value: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(value.to_string())
    }
}

impl From<CreatePostFormError> for ServiceError {
    fn from(value: CreatePostFormError) -> Self {
        ServiceError::Form(value.to_string())
    }
}

impl From<UpdatePostFormError> for ServiceError {
    fn from(value: UpdatePostFormError) -> Self {
        ServiceError::Form(value.to_string())
    }
}

impl From<CreateCategoryFormError> for ServiceError {
    fn from(value: CreateCategoryFormError) -> Self {
        ServiceError::Form(value.to_string())
    }
}

impl From<UpdateCategoryFormError> for ServiceError {
    fn from(value: UpdateCategoryFormError) -> Self {
        ServiceError::Form(value.to_string())
    }
}

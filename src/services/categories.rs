use crate::domain::types::CategoryId;
use crate::dto::categories::CategoryDto;
use crate::forms::categories::{CreateCategoryPayload, UpdateCategoryPayload};
use crate::repository::errors::RepositoryError;
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

/// List every category.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Create a category and return the created row.
pub fn create_category<R>(payload: CreateCategoryPayload, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryWriter,
{
    let category = payload.into_new_category();

    match repo.create_category(&category) {
        Ok(created) => Ok(created.into()),
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Apply a partial update and return the fresh row.
pub fn update_category<R>(payload: UpdateCategoryPayload, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryWriter,
{
    match repo.update_category(payload.category_id, &payload.patch) {
        Ok(Some(category)) => Ok(category.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Delete a category. Fails with a conflict while posts still reference it;
/// deleting an unknown id is a no-op.
pub fn delete_category<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    let id = CategoryId::new(id)?;

    match repo.delete_category(id) {
        Ok(_) => Ok(()),
        Err(RepositoryError::Conflict(message)) => Err(ServiceError::Conflict(message)),
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

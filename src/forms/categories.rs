use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{CategoryPatch, NewCategory};
use crate::domain::types::{CategoryId, CategoryName, Slug, TypeConstraintError};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
}

/// Validated creation request with the slug already derived from the name.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCategoryPayload {
    pub name: CategoryName,
    pub slug: Slug,
    pub description: Option<String>,
}

impl CreateCategoryPayload {
    pub fn into_new_category(self) -> NewCategory {
        NewCategory {
            name: self.name,
            slug: self.slug,
            description: self.description,
        }
    }
}

#[derive(Debug, Error)]
pub enum CreateCategoryFormError {
    #[error("Create category form validation failed: {0}")]
    Validation(String),
    #[error("Create category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CreateCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CreateCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CreateCategoryForm> for CreateCategoryPayload {
    type Error = CreateCategoryFormError;

    fn try_from(value: CreateCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let name = CategoryName::new(value.name)?;
        let slug = Slug::derive(name.as_str())?;

        Ok(Self {
            name,
            slug,
            description: value.description,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryForm {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Validated partial-update request; only supplied fields change.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategoryPayload {
    pub category_id: CategoryId,
    pub patch: CategoryPatch,
}

#[derive(Debug, Error)]
pub enum UpdateCategoryFormError {
    #[error("Update category form validation failed: {0}")]
    Validation(String),
    #[error("Update category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<(CategoryId, UpdateCategoryForm)> for UpdateCategoryPayload {
    type Error = UpdateCategoryFormError;

    fn try_from(
        (category_id, value): (CategoryId, UpdateCategoryForm),
    ) -> Result<Self, Self::Error> {
        value.validate()?;

        let name = value.name.map(CategoryName::new).transpose()?;
        // A changed name always re-derives the slug.
        let slug = name
            .as_ref()
            .map(|n| Slug::derive(n.as_str()))
            .transpose()?;

        Ok(Self {
            category_id,
            patch: CategoryPatch {
                name,
                slug,
                description: value.description,
            },
        })
    }
}

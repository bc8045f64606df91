use diesel::prelude::*;

use crate::domain::category::{
    Category as DomainCategory, CategoryPatch, NewCategory as DomainNewCategory,
};
use crate::domain::types::{CategoryName, Slug, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

/// Insertable form of [`Category`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

/// Changeset applying only the supplied fields of a [`CategoryPatch`].
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
pub struct CategoryChangeset {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            name: CategoryName::new(category.name)?,
            slug: Slug::new(category.slug)?,
            description: category.description,
        })
    }
}

impl From<DomainNewCategory> for NewCategory {
    fn from(category: DomainNewCategory) -> Self {
        Self {
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            description: category.description,
        }
    }
}

impl From<&CategoryPatch> for CategoryChangeset {
    fn from(patch: &CategoryPatch) -> Self {
        Self {
            name: patch.name.as_ref().map(|n| n.as_str().to_string()),
            slug: patch.slug.as_ref().map(|s| s.as_str().to_string()),
            description: patch.description.clone(),
        }
    }
}

impl CategoryChangeset {
    /// True when the changeset would touch no columns.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.slug.is_none() && self.description.is_none()
    }
}

use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::post::{NewPost, PostPatch};
use crate::domain::types::{
    CategoryId, PostBody, PostExcerpt, PostId, PostStatus, PostTitle, Slug, TypeConstraintError,
};

fn category_ids(raw: Vec<i32>) -> Result<Vec<CategoryId>, TypeConstraintError> {
    raw.into_iter().map(CategoryId::new).collect()
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(min = 1))]
    pub excerpt: String,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub categories: Vec<i32>,
}

/// Validated creation request with the slug already derived from the title.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePostPayload {
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostBody,
    pub excerpt: PostExcerpt,
    pub status: PostStatus,
    pub categories: Vec<CategoryId>,
}

impl CreatePostPayload {
    pub fn into_new_post(self) -> (NewPost, Vec<CategoryId>) {
        let now = Utc::now().naive_utc();
        (
            NewPost {
                title: self.title,
                slug: self.slug,
                excerpt: self.excerpt,
                content: self.content,
                status: self.status,
                created_at: now,
                updated_at: now,
            },
            self.categories,
        )
    }
}

#[derive(Debug, Error)]
pub enum CreatePostFormError {
    #[error("Create post form validation failed: {0}")]
    Validation(String),
    #[error("Create post form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CreatePostFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CreatePostFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CreatePostForm> for CreatePostPayload {
    type Error = CreatePostFormError;

    fn try_from(value: CreatePostForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let title = PostTitle::new(value.title)?;
        let slug = Slug::derive(title.as_str())?;

        Ok(Self {
            title,
            slug,
            content: PostBody::new(value.content)?,
            excerpt: PostExcerpt::new(value.excerpt)?,
            status: value.status,
            categories: category_ids(value.categories)?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostForm {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub content: Option<String>,
    #[validate(length(min = 1))]
    pub excerpt: Option<String>,
    pub status: Option<PostStatus>,
    pub categories: Option<Vec<i32>>,
}

/// Validated partial-update request; only supplied fields change.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePostPayload {
    pub post_id: PostId,
    pub patch: PostPatch,
}

#[derive(Debug, Error)]
pub enum UpdatePostFormError {
    #[error("Update post form validation failed: {0}")]
    Validation(String),
    #[error("Update post form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdatePostFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdatePostFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<(PostId, UpdatePostForm)> for UpdatePostPayload {
    type Error = UpdatePostFormError;

    fn try_from((post_id, value): (PostId, UpdatePostForm)) -> Result<Self, Self::Error> {
        value.validate()?;

        let title = value.title.map(PostTitle::new).transpose()?;
        // A changed title always re-derives the slug.
        let slug = title
            .as_ref()
            .map(|t| Slug::derive(t.as_str()))
            .transpose()?;

        Ok(Self {
            post_id,
            patch: PostPatch {
                title,
                slug,
                excerpt: value.excerpt.map(PostExcerpt::new).transpose()?,
                content: value.content.map(PostBody::new).transpose()?,
                status: value.status,
                categories: value.categories.map(category_ids).transpose()?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_form_derives_slug_from_title() {
        let form = CreatePostForm {
            title: "Hello, World!".to_string(),
            content: "body".to_string(),
            excerpt: "summary".to_string(),
            status: PostStatus::Draft,
            categories: vec![],
        };

        let payload: CreatePostPayload = form.try_into().unwrap();
        assert_eq!(payload.slug.as_str(), "hello-world");
    }

    #[test]
    fn create_form_rejects_empty_title() {
        let form = CreatePostForm {
            title: String::new(),
            content: "body".to_string(),
            excerpt: "summary".to_string(),
            status: PostStatus::Draft,
            categories: vec![],
        };

        let payload: Result<CreatePostPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn create_form_rejects_non_positive_category_ids() {
        let form = CreatePostForm {
            title: "Title".to_string(),
            content: "body".to_string(),
            excerpt: "summary".to_string(),
            status: PostStatus::Draft,
            categories: vec![1, 0],
        };

        let payload: Result<CreatePostPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn update_form_without_title_leaves_slug_unset() {
        let form = UpdatePostForm {
            title: None,
            content: Some("new body".to_string()),
            excerpt: None,
            status: Some(PostStatus::Published),
            categories: None,
        };

        let payload =
            UpdatePostPayload::try_from((PostId::new(1).unwrap(), form)).unwrap();
        assert!(payload.patch.slug.is_none());
        assert!(payload.patch.categories.is_none());
        assert_eq!(payload.patch.status, Some(PostStatus::Published));
    }

    #[test]
    fn update_form_with_title_re_derives_slug() {
        let form = UpdatePostForm {
            title: Some("New Title Here".to_string()),
            content: None,
            excerpt: None,
            status: None,
            categories: Some(vec![]),
        };

        let payload =
            UpdatePostPayload::try_from((PostId::new(2).unwrap(), form)).unwrap();
        assert_eq!(
            payload.patch.slug.as_ref().map(|s| s.as_str()),
            Some("new-title-here")
        );
        assert_eq!(payload.patch.categories, Some(vec![]));
    }
}

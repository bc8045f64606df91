use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::post::{NewPost as DomainNewPost, Post as DomainPost, PostPatch};
use crate::domain::types::{PostBody, PostExcerpt, PostTitle, Slug, TypeConstraintError};

/// Diesel model representing the `posts` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::posts)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Post`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::posts)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset applying only the supplied fields of a [`PostPatch`].
///
/// `updated_at` is unconditional so every update refreshes it.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::posts)]
pub struct PostChangeset {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
    pub updated_at: NaiveDateTime,
}

/// Diesel model for a `posts_to_categories` join row.
#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(table_name = crate::schema::posts_to_categories)]
#[diesel(primary_key(post_id, category_id))]
#[diesel(belongs_to(Post, foreign_key = post_id))]
pub struct PostCategoryLink {
    pub post_id: i32,
    pub category_id: i32,
}

/// Insertable form of [`PostCategoryLink`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::posts_to_categories)]
pub struct NewPostCategoryLink {
    pub post_id: i32,
    pub category_id: i32,
}

impl TryFrom<Post> for DomainPost {
    type Error = TypeConstraintError;

    fn try_from(post: Post) -> Result<Self, Self::Error> {
        Ok(Self {
            id: post.id.try_into()?,
            title: PostTitle::new(post.title)?,
            slug: Slug::new(post.slug)?,
            excerpt: post.excerpt.map(PostExcerpt::new).transpose()?,
            content: post.content.map(PostBody::new).transpose()?,
            status: post.status.try_into()?,
            created_at: post.created_at,
            updated_at: post.updated_at,
        })
    }
}

impl From<DomainNewPost> for NewPost {
    fn from(post: DomainNewPost) -> Self {
        Self {
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            excerpt: post.excerpt.into_inner(),
            content: post.content.into_inner(),
            status: post.status.as_str().to_string(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl PostChangeset {
    /// Builds a changeset from a patch, stamping `updated_at` with `now`.
    pub fn from_patch(patch: &PostPatch, now: NaiveDateTime) -> Self {
        Self {
            title: patch.title.as_ref().map(|t| t.as_str().to_string()),
            slug: patch.slug.as_ref().map(|s| s.as_str().to_string()),
            excerpt: patch.excerpt.as_ref().map(|e| e.as_str().to_string()),
            content: patch.content.as_ref().map(|c| c.as_str().to_string()),
            status: patch.status.map(|s| s.as_str().to_string()),
            updated_at: now,
        }
    }
}

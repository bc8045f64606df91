use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::types::{
    CategoryId, PostBody, PostExcerpt, PostId, PostStatus, PostTitle, Slug,
};

/// Canonical post record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: Slug,
    pub excerpt: Option<PostExcerpt>,
    pub content: Option<PostBody>,
    pub status: PostStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A post together with its eagerly loaded categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWithCategories {
    pub post: Post,
    pub categories: Vec<Category>,
}

/// Data required to insert a new [`Post`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: Slug,
    pub excerpt: PostExcerpt,
    pub content: PostBody,
    pub status: PostStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Partial update for an existing [`Post`]; only supplied fields change.
///
/// `slug` is carried alongside `title` so the two always change together.
/// A supplied `categories` list replaces the post's join set wholesale; an
/// omitted list leaves existing links untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPatch {
    pub title: Option<PostTitle>,
    pub slug: Option<Slug>,
    pub excerpt: Option<PostExcerpt>,
    pub content: Option<PostBody>,
    pub status: Option<PostStatus>,
    pub categories: Option<Vec<CategoryId>>,
}

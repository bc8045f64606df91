use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::post::{Post, PostWithCategories};
use crate::domain::types::PostStatus;
use crate::dto::categories::CategoryDto;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub status: PostStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Post shape returned by the query procedures, categories included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostWithCategoriesDto {
    #[serde(flatten)]
    pub post: PostDto,
    pub categories: Vec<CategoryDto>,
}

/// Listing envelope: the total matching the filters, alongside the
/// requested page of posts. `total` counts all matches even when
/// pagination trims the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostListDto {
    pub total: usize,
    pub posts: Vec<PostWithCategoriesDto>,
}

impl From<Post> for PostDto {
    fn from(value: Post) -> Self {
        Self {
            id: value.id.get(),
            title: value.title.into_inner(),
            slug: value.slug.into_inner(),
            excerpt: value.excerpt.map(|e| e.into_inner()),
            content: value.content.map(|c| c.into_inner()),
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<PostWithCategories> for PostWithCategoriesDto {
    fn from(value: PostWithCategories) -> Self {
        Self {
            post: value.post.into(),
            categories: value.categories.into_iter().map(Into::into).collect(),
        }
    }
}

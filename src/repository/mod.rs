use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, CategoryPatch, NewCategory};
use crate::domain::post::{NewPost, Post, PostPatch, PostWithCategories};
use crate::domain::types::{CategoryId, PostId, PostStatus, Slug};
use crate::pagination::Pagination;
use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod errors;
pub mod post;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing posts.
#[derive(Debug, Clone, Default)]
pub struct PostListQuery {
    /// Restrict to posts with this publication status.
    pub status: Option<PostStatus>,
    /// Restrict to posts linked to this category.
    pub category_id: Option<CategoryId>,
    /// Title substring search.
    pub search: Option<String>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl PostListQuery {
    pub fn status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations for post entities.
pub trait PostReader {
    /// List posts matching the supplied query parameters, each with its
    /// joined categories.
    fn list_posts(&self, query: PostListQuery)
    -> RepositoryResult<(usize, Vec<PostWithCategories>)>;
    /// Retrieve a post and its categories by slug.
    fn get_post_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<PostWithCategories>>;
}

/// Write operations for post entities and their category links.
pub trait PostWriter {
    /// Persist a new post and one join row per category id, atomically.
    fn create_post(&self, post: &NewPost, categories: &[CategoryId]) -> RepositoryResult<Post>;
    /// Apply a partial update. A supplied category list replaces the join
    /// set wholesale. Returns `None` when no post has this id.
    fn update_post(&self, id: PostId, patch: &PostPatch) -> RepositoryResult<Option<Post>>;
    /// Delete a post and its join rows. Returns the number of post rows
    /// removed; deleting an unknown id removes zero rows.
    fn delete_post(&self, id: PostId) -> RepositoryResult<usize>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories, name-ordered.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Apply a partial update. Returns `None` when no category has this id.
    fn update_category(
        &self,
        id: CategoryId,
        patch: &CategoryPatch,
    ) -> RepositoryResult<Option<Category>>;
    /// Delete a category. Fails with [`errors::RepositoryError::Conflict`]
    /// while any join row still references it.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}

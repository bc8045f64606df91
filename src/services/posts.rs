use serde::Deserialize;

use crate::domain::types::{CategoryId, PostId, PostStatus, Slug};
use crate::dto::posts::{PostDto, PostListDto, PostWithCategoriesDto};
use crate::forms::posts::{CreatePostPayload, UpdatePostPayload};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{PostListQuery, PostReader, PostWriter};

use super::{ServiceError, ServiceResult};

/// Query parameters accepted by the post listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct PostListParams {
    pub status: Option<PostStatus>,
    pub category_id: Option<i32>,
    pub query: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// List posts with their categories, applying optional status, category,
/// search and pagination filters. The returned envelope carries the total
/// matching the filters so clients can compute page counts.
pub fn list_posts<R>(params: PostListParams, repo: &R) -> ServiceResult<PostListDto>
where
    R: PostReader,
{
    let mut query = PostListQuery::default();

    if let Some(status) = params.status {
        query = query.status(status);
    }

    if let Some(category_id) = params.category_id {
        query = query.category(CategoryId::new(category_id)?);
    }

    match &params.query {
        Some(search) if !search.is_empty() => {
            query = query.search(search.clone());
        }
        _ => {}
    }

    if let Some(page) = params.page {
        query = query.paginate(page, params.per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE));
    }

    match repo.list_posts(query) {
        Ok((total, posts)) => Ok(PostListDto {
            total,
            posts: posts.into_iter().map(Into::into).collect(),
        }),
        Err(e) => {
            log::error!("Failed to list posts: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// List only published posts.
pub fn list_published_posts<R>(repo: &R) -> ServiceResult<Vec<PostWithCategoriesDto>>
where
    R: PostReader,
{
    match repo.list_posts(PostListQuery::default().status(PostStatus::Published)) {
        Ok((_total, posts)) => Ok(posts.into_iter().map(Into::into).collect()),
        Err(e) => {
            log::error!("Failed to list published posts: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Fetch a single post with categories by slug.
pub fn get_post_by_slug<R>(slug: &str, repo: &R) -> ServiceResult<PostWithCategoriesDto>
where
    R: PostReader,
{
    let slug = Slug::new(slug)?;

    match repo.get_post_by_slug(&slug) {
        Ok(Some(post)) => Ok(post.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get post by slug: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Create a post and its category links. Returns the created row without
/// re-fetching the joined categories.
pub fn create_post<R>(payload: CreatePostPayload, repo: &R) -> ServiceResult<PostDto>
where
    R: PostWriter,
{
    let (new_post, categories) = payload.into_new_post();

    match repo.create_post(&new_post, &categories) {
        Ok(post) => Ok(post.into()),
        Err(e) => {
            log::error!("Failed to create post: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Apply a partial update and return the fresh row.
pub fn update_post<R>(payload: UpdatePostPayload, repo: &R) -> ServiceResult<PostDto>
where
    R: PostWriter,
{
    match repo.update_post(payload.post_id, &payload.patch) {
        Ok(Some(post)) => Ok(post.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update post: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Delete a post and its category links. Deleting an unknown id is a no-op.
pub fn delete_post<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: PostWriter,
{
    let id = PostId::new(id)?;

    match repo.delete_post(id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete post: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::posts::{CreatePostForm, UpdatePostForm};
    use crate::repository::test::TestRepository;

    fn create_payload(title: &str, categories: Vec<i32>) -> CreatePostPayload {
        CreatePostForm {
            title: title.to_string(),
            content: "body".to_string(),
            excerpt: "summary".to_string(),
            status: PostStatus::Draft,
            categories,
        }
        .try_into()
        .unwrap()
    }

    #[test]
    fn creates_and_lists_posts() {
        let repo = TestRepository::default();
        repo.seed_category("Rust");

        let created = create_post(create_payload("Hello, World!", vec![1]), &repo).unwrap();
        assert_eq!(created.slug, "hello-world");

        let listing = list_posts(PostListParams::default(), &repo).unwrap();
        assert_eq!(listing.total, 1);
        assert_eq!(listing.posts.len(), 1);
        assert_eq!(listing.posts[0].categories.len(), 1);
    }

    #[test]
    fn listing_reports_total_across_pages() {
        let repo = TestRepository::default();
        for i in 1..=3 {
            create_post(create_payload(&format!("Post number {i}"), vec![]), &repo).unwrap();
        }

        let params = PostListParams {
            page: Some(1),
            per_page: Some(2),
            ..Default::default()
        };
        let page = list_posts(params, &repo).unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.posts.len(), 2);
    }

    #[test]
    fn published_listing_excludes_drafts() {
        let repo = TestRepository::default();
        create_post(create_payload("Draft Post", vec![]), &repo).unwrap();

        let mut published = create_payload("Published Post", vec![]);
        published.status = PostStatus::Published;
        create_post(published, &repo).unwrap();

        let posts = list_published_posts(&repo).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].post.slug, "published-post");

        let all = list_posts(PostListParams::default(), &repo).unwrap();
        assert_eq!(all.total, 2);
    }

    #[test]
    fn get_by_slug_reports_not_found() {
        let repo = TestRepository::default();
        let err = get_post_by_slug("missing", &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn update_replaces_category_set_when_supplied() {
        let repo = TestRepository::default();
        repo.seed_category("Rust");
        repo.seed_category("Web");
        let created = create_post(create_payload("Linked Post", vec![1, 2]), &repo).unwrap();

        let form = UpdatePostForm {
            title: None,
            content: None,
            excerpt: None,
            status: None,
            categories: Some(vec![]),
        };
        let payload =
            UpdatePostPayload::try_from((PostId::new(created.id).unwrap(), form)).unwrap();
        update_post(payload, &repo).unwrap();

        let fetched = get_post_by_slug("linked-post", &repo).unwrap();
        assert!(fetched.categories.is_empty());
    }

    #[test]
    fn update_unknown_post_reports_not_found() {
        let repo = TestRepository::default();
        let form = UpdatePostForm {
            title: Some("Anything".to_string()),
            content: None,
            excerpt: None,
            status: None,
            categories: None,
        };
        let payload = UpdatePostPayload::try_from((PostId::new(99).unwrap(), form)).unwrap();

        let err = update_post(payload, &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn delete_is_idempotent() {
        let repo = TestRepository::default();
        let created = create_post(create_payload("Short Lived", vec![]), &repo).unwrap();

        delete_post(created.id, &repo).unwrap();
        delete_post(created.id, &repo).unwrap();

        let err = get_post_by_slug("short-lived", &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }
}

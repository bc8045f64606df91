use chrono::Utc;

use inkpost::domain::category::NewCategory;
use inkpost::domain::post::{NewPost, PostPatch};
use inkpost::domain::types::{
    CategoryId, CategoryName, PostBody, PostExcerpt, PostStatus, PostTitle, Slug,
};
use inkpost::repository::errors::RepositoryError;
use inkpost::repository::{
    CategoryReader, CategoryWriter, PostListQuery, PostReader, PostWriter,
};

mod common;

fn new_post(title: &str, status: PostStatus) -> NewPost {
    let now = Utc::now().naive_utc();
    NewPost {
        title: PostTitle::new(title).expect("valid title"),
        slug: Slug::derive(title).expect("derivable slug"),
        excerpt: PostExcerpt::new(format!("{title} excerpt")).expect("valid excerpt"),
        content: PostBody::new(format!("{title} body")).expect("valid content"),
        status,
        created_at: now,
        updated_at: now,
    }
}

fn new_category(name: &str) -> NewCategory {
    NewCategory {
        name: CategoryName::new(name).expect("valid name"),
        slug: Slug::derive(name).expect("derivable slug"),
        description: None,
    }
}

#[test]
fn create_post_links_categories() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let rust = repo.create_category(&new_category("Rust")).unwrap();
    let web = repo.create_category(&new_category("Web")).unwrap();

    let created = repo
        .create_post(&new_post("Hello, World!", PostStatus::Draft), &[rust.id, web.id])
        .unwrap();
    assert_eq!(created.slug, "hello-world");

    let fetched = repo
        .get_post_by_slug(&Slug::new("hello-world").unwrap())
        .unwrap()
        .expect("post should exist");

    let mut linked: Vec<CategoryId> = fetched.categories.iter().map(|c| c.id).collect();
    linked.sort();
    assert_eq!(linked, vec![rust.id, web.id]);
}

#[test]
fn create_post_with_unknown_category_rolls_back() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let unknown = CategoryId::new(999).unwrap();
    let result = repo.create_post(&new_post("Orphan Links", PostStatus::Draft), &[unknown]);
    assert!(matches!(result, Err(RepositoryError::Database(_))));

    // The failed link insert must not leave the post row behind.
    let fetched = repo
        .get_post_by_slug(&Slug::new("orphan-links").unwrap())
        .unwrap();
    assert!(fetched.is_none());
}

#[test]
fn duplicate_slug_is_a_constraint_violation() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    repo.create_post(&new_post("Same Title", PostStatus::Draft), &[])
        .unwrap();
    let result = repo.create_post(&new_post("Same Title", PostStatus::Draft), &[]);
    assert!(matches!(result, Err(RepositoryError::Database(_))));
}

#[test]
fn update_with_empty_category_list_clears_links() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let category = repo.create_category(&new_category("Rust")).unwrap();
    let created = repo
        .create_post(&new_post("Linked Post", PostStatus::Draft), &[category.id])
        .unwrap();

    let patch = PostPatch {
        categories: Some(vec![]),
        ..Default::default()
    };
    repo.update_post(created.id, &patch).unwrap().expect("post exists");

    let fetched = repo
        .get_post_by_slug(&Slug::new("linked-post").unwrap())
        .unwrap()
        .expect("post should exist");
    assert!(fetched.categories.is_empty());

    // The category itself is untouched and now deletable.
    assert_eq!(repo.delete_category(category.id).unwrap(), 1);
}

#[test]
fn update_without_category_list_keeps_links() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let category = repo.create_category(&new_category("Rust")).unwrap();
    let created = repo
        .create_post(&new_post("Keep My Links", PostStatus::Draft), &[category.id])
        .unwrap();

    let patch = PostPatch {
        status: Some(PostStatus::Published),
        ..Default::default()
    };
    let updated = repo
        .update_post(created.id, &patch)
        .unwrap()
        .expect("post exists");
    assert_eq!(updated.status, PostStatus::Published);

    let fetched = repo
        .get_post_by_slug(&Slug::new("keep-my-links").unwrap())
        .unwrap()
        .expect("post should exist");
    assert_eq!(fetched.categories.len(), 1);
}

#[test]
fn update_title_re_derives_slug() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let created = repo
        .create_post(&new_post("First Title", PostStatus::Draft), &[])
        .unwrap();

    let title = PostTitle::new("Second Title!").unwrap();
    let patch = PostPatch {
        slug: Some(Slug::derive(title.as_str()).unwrap()),
        title: Some(title),
        ..Default::default()
    };
    let updated = repo
        .update_post(created.id, &patch)
        .unwrap()
        .expect("post exists");
    assert_eq!(updated.slug, "second-title");
    // Untouched fields survive the patch.
    assert_eq!(updated.excerpt, created.excerpt);

    assert!(repo
        .get_post_by_slug(&Slug::new("first-title").unwrap())
        .unwrap()
        .is_none());
}

#[test]
fn update_refreshes_updated_at() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let created = repo
        .create_post(&new_post("Timestamped", PostStatus::Draft), &[])
        .unwrap();

    // Keep the clock readings apart.
    std::thread::sleep(std::time::Duration::from_millis(50));

    let patch = PostPatch {
        status: Some(PostStatus::Published),
        ..Default::default()
    };
    let updated = repo
        .update_post(created.id, &patch)
        .unwrap()
        .expect("post exists");

    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
}

#[test]
fn update_unknown_post_returns_none() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let patch = PostPatch {
        status: Some(PostStatus::Published),
        ..Default::default()
    };
    let updated = repo
        .update_post(inkpost::domain::types::PostId::new(42).unwrap(), &patch)
        .unwrap();
    assert!(updated.is_none());
}

#[test]
fn delete_post_removes_post_and_links() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let category = repo.create_category(&new_category("Rust")).unwrap();
    let created = repo
        .create_post(&new_post("Short Lived", PostStatus::Draft), &[category.id])
        .unwrap();

    assert_eq!(repo.delete_post(created.id).unwrap(), 1);
    assert!(repo
        .get_post_by_slug(&Slug::new("short-lived").unwrap())
        .unwrap()
        .is_none());

    // No dangling link rows: the category is deletable again.
    assert_eq!(repo.delete_category(category.id).unwrap(), 1);

    // Deleting again is a no-op.
    assert_eq!(repo.delete_post(created.id).unwrap(), 0);
}

#[test]
fn delete_referenced_category_fails_with_conflict() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let category = repo.create_category(&new_category("Rust")).unwrap();
    repo.create_post(&new_post("Uses Rust", PostStatus::Draft), &[category.id])
        .unwrap();

    let result = repo.delete_category(category.id);
    assert!(matches!(result, Err(RepositoryError::Conflict(_))));

    // Category and link survive the failed delete.
    assert!(repo.get_category_by_id(category.id).unwrap().is_some());
    let fetched = repo
        .get_post_by_slug(&Slug::new("uses-rust").unwrap())
        .unwrap()
        .expect("post should exist");
    assert_eq!(fetched.categories.len(), 1);
}

#[test]
fn published_filter_excludes_drafts() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    repo.create_post(&new_post("Draft Piece", PostStatus::Draft), &[])
        .unwrap();
    repo.create_post(&new_post("Published Piece", PostStatus::Published), &[])
        .unwrap();

    let (total, published) = repo
        .list_posts(PostListQuery::default().status(PostStatus::Published))
        .unwrap();
    assert_eq!(total, 1);
    assert!(published.iter().all(|p| p.post.status == PostStatus::Published));

    let (all_total, _) = repo.list_posts(PostListQuery::default()).unwrap();
    assert_eq!(all_total, 2);
}

#[test]
fn list_filters_by_category_and_search() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let rust = repo.create_category(&new_category("Rust")).unwrap();
    repo.create_post(&new_post("Ownership Explained", PostStatus::Draft), &[rust.id])
        .unwrap();
    repo.create_post(&new_post("Unrelated Piece", PostStatus::Draft), &[])
        .unwrap();

    let (total, items) = repo
        .list_posts(PostListQuery::default().category(rust.id))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].post.slug, "ownership-explained");

    let (total, items) = repo
        .list_posts(PostListQuery::default().search("Ownership"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].post.slug, "ownership-explained");
}

#[test]
fn list_paginates() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    for i in 1..=5 {
        repo.create_post(&new_post(&format!("Post number {i}"), PostStatus::Draft), &[])
            .unwrap();
    }

    let (total, items) = repo
        .list_posts(PostListQuery::default().paginate(1, 2))
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(items.len(), 2);

    let (_, last_page) = repo
        .list_posts(PostListQuery::default().paginate(3, 2))
        .unwrap();
    assert_eq!(last_page.len(), 1);

    // Absurd page numbers must not panic; the total still counts everything.
    let (total, far_out) = repo
        .list_posts(PostListQuery::default().paginate(usize::MAX, 2))
        .unwrap();
    assert_eq!(total, 5);
    assert!(far_out.is_empty());
}

#[test]
fn category_update_returns_fresh_row() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let created = repo.create_category(&new_category("Old Name")).unwrap();

    let name = CategoryName::new("Renamed Category").unwrap();
    let patch = inkpost::domain::category::CategoryPatch {
        slug: Some(Slug::derive(name.as_str()).unwrap()),
        name: Some(name),
        description: Some("now described".to_string()),
    };
    let updated = repo
        .update_category(created.id, &patch)
        .unwrap()
        .expect("category exists");

    assert_eq!(updated.name, "Renamed Category");
    assert_eq!(updated.slug, "renamed-category");
    assert_eq!(updated.description.as_deref(), Some("now described"));
}

#[test]
fn concurrent_creates_with_same_slug_let_exactly_one_win() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let repo = repo.clone();
            std::thread::spawn(move || {
                repo.create_post(&new_post("Contested Title", PostStatus::Draft), &[])
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(results
        .iter()
        .any(|r| matches!(r, Err(RepositoryError::Database(_)))));
}

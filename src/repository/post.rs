use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::Category;
use crate::domain::post::{NewPost, Post, PostPatch, PostWithCategories};
use crate::domain::types::{CategoryId, PostId, Slug};
use crate::models::category::Category as DbCategory;
use crate::models::post::{
    NewPost as DbNewPost, NewPostCategoryLink as DbNewPostCategoryLink, Post as DbPost,
    PostCategoryLink as DbPostCategoryLink, PostChangeset,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, PostListQuery, PostReader, PostWriter};

fn insert_links(
    conn: &mut SqliteConnection,
    post_id: i32,
    category_ids: &[CategoryId],
) -> QueryResult<usize> {
    use crate::schema::posts_to_categories;

    let links = category_ids
        .iter()
        .map(|category_id| DbNewPostCategoryLink {
            post_id,
            category_id: category_id.get(),
        })
        .collect::<Vec<_>>();

    diesel::insert_into(posts_to_categories::table)
        .values(&links)
        .execute(conn)
}

impl PostReader for DieselRepository {
    fn list_posts(
        &self,
        query: PostListQuery,
    ) -> RepositoryResult<(usize, Vec<PostWithCategories>)> {
        use crate::schema::{categories, posts, posts_to_categories};

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = posts::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(status) = query.status {
                items = items.filter(posts::status.eq(status.as_str()));
            }

            if let Some(category_id) = query.category_id {
                items = items.filter(
                    posts::id.eq_any(
                        posts_to_categories::table
                            .filter(posts_to_categories::category_id.eq(category_id.get()))
                            .select(posts_to_categories::post_id),
                    ),
                );
            }

            if let Some(search) = &query.search {
                items = items.filter(posts::title.like(format!("%{search}%")));
            }

            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(pagination) = &query.pagination {
            // Page and size come from request parameters; saturate instead of
            // overflowing on absurd values.
            let page = i64::try_from(pagination.page).unwrap_or(i64::MAX).max(1);
            let per_page = i64::try_from(pagination.per_page).unwrap_or(i64::MAX);
            items = items
                .offset((page - 1).saturating_mul(per_page))
                .limit(per_page);
        }

        let db_posts = items
            .order(posts::created_at.desc())
            .load::<DbPost>(&mut conn)?;

        let grouped_links = DbPostCategoryLink::belonging_to(&db_posts)
            .inner_join(categories::table)
            .load::<(DbPostCategoryLink, DbCategory)>(&mut conn)?
            .grouped_by(&db_posts);

        let items = db_posts
            .into_iter()
            .zip(grouped_links)
            .map(|(post, links)| {
                let categories = links
                    .into_iter()
                    .map(|(_, category)| category.try_into())
                    .collect::<Result<Vec<Category>, _>>()?;
                Ok(PostWithCategories {
                    post: post.try_into()?,
                    categories,
                })
            })
            .collect::<Result<Vec<PostWithCategories>, RepositoryError>>()?;

        Ok((total, items))
    }

    fn get_post_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<PostWithCategories>> {
        use crate::schema::{categories, posts, posts_to_categories};

        let mut conn = self.conn()?;

        let post = posts::table
            .filter(posts::slug.eq(slug.as_str()))
            .first::<DbPost>(&mut conn)
            .optional()?;

        let Some(post) = post else {
            return Ok(None);
        };

        let categories = posts_to_categories::table
            .inner_join(categories::table)
            .filter(posts_to_categories::post_id.eq(post.id))
            .select(categories::all_columns)
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(Some(PostWithCategories {
            post: post.try_into()?,
            categories,
        }))
    }
}

impl PostWriter for DieselRepository {
    fn create_post(&self, post: &NewPost, categories: &[CategoryId]) -> RepositoryResult<Post> {
        use crate::schema::posts;

        let mut conn = self.conn()?;
        let db_post: DbNewPost = post.clone().into();

        let created = conn.transaction::<DbPost, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(posts::table)
                .values(&db_post)
                .get_result::<DbPost>(conn)?;

            if !categories.is_empty() {
                insert_links(conn, created.id, categories)?;
            }

            Ok(created)
        })?;

        Ok(created.try_into()?)
    }

    fn update_post(&self, id: PostId, patch: &PostPatch) -> RepositoryResult<Option<Post>> {
        use crate::schema::{posts, posts_to_categories};

        let mut conn = self.conn()?;
        let changeset = PostChangeset::from_patch(patch, Utc::now().naive_utc());

        let updated = conn.transaction::<Option<DbPost>, RepositoryError, _>(|conn| {
            let updated = diesel::update(posts::table.filter(posts::id.eq(id.get())))
                .set(&changeset)
                .get_result::<DbPost>(conn)
                .optional()?;

            let Some(updated) = updated else {
                return Ok(None);
            };

            // Replace the join set wholesale when a category list is supplied.
            if let Some(category_ids) = &patch.categories {
                diesel::delete(
                    posts_to_categories::table
                        .filter(posts_to_categories::post_id.eq(id.get())),
                )
                .execute(conn)?;

                if !category_ids.is_empty() {
                    insert_links(conn, id.get(), category_ids)?;
                }
            }

            Ok(Some(updated))
        })?;

        Ok(updated.map(TryInto::try_into).transpose()?)
    }

    fn delete_post(&self, id: PostId) -> RepositoryResult<usize> {
        use crate::schema::{posts, posts_to_categories};

        let mut conn = self.conn()?;

        let affected = conn.transaction::<usize, RepositoryError, _>(|conn| {
            diesel::delete(
                posts_to_categories::table.filter(posts_to_categories::post_id.eq(id.get())),
            )
            .execute(conn)?;

            Ok(diesel::delete(posts::table.filter(posts::id.eq(id.get()))).execute(conn)?)
        })?;

        Ok(affected)
    }
}

use diesel::prelude::*;

use crate::domain::category::{Category, CategoryPatch, NewCategory};
use crate::domain::types::CategoryId;
use crate::models::category::{
    Category as DbCategory, CategoryChangeset, NewCategory as DbNewCategory,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .order(categories::name.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::id.eq(id.get()))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(TryInto::try_into).transpose()?)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let created = diesel::insert_into(categories::table)
            .values(&db_category)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_category(
        &self,
        id: CategoryId,
        patch: &CategoryPatch,
    ) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let changeset: CategoryChangeset = patch.into();

        // Diesel rejects changesets that touch no columns.
        let updated = if changeset.is_empty() {
            categories::table
                .filter(categories::id.eq(id.get()))
                .first::<DbCategory>(&mut conn)
                .optional()?
        } else {
            diesel::update(categories::table.filter(categories::id.eq(id.get())))
                .set(&changeset)
                .get_result::<DbCategory>(&mut conn)
                .optional()?
        };

        Ok(updated.map(TryInto::try_into).transpose()?)
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        use crate::schema::{categories, posts_to_categories};

        let mut conn = self.conn()?;

        let affected = conn.transaction::<usize, RepositoryError, _>(|conn| {
            let references: i64 = posts_to_categories::table
                .filter(posts_to_categories::category_id.eq(id.get()))
                .count()
                .get_result(conn)?;

            if references > 0 {
                return Err(RepositoryError::Conflict(
                    "category is associated with existing posts and cannot be deleted"
                        .to_string(),
                ));
            }

            Ok(diesel::delete(categories::table.filter(categories::id.eq(id.get())))
                .execute(conn)?)
        })?;

        Ok(affected)
    }
}

//! Categories Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::categories::models::{Category, CategoryUuid};

const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");
const GET_CATEGORY_SQL: &str = include_str!("sql/get_category.sql");
const CREATE_CATEGORY_SQL: &str = include_str!("sql/create_category.sql");
const RENAME_CATEGORY_SQL: &str = include_str!("sql/rename_category.sql");
const DELETE_CATEGORY_SQL: &str = include_str!("sql/delete_category.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCategoriesRepository;

impl PgCategoriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Category>, sqlx::Error> {
        query_as::<Postgres, Category>(LIST_CATEGORIES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
    ) -> Result<Category, sqlx::Error> {
        query_as::<Postgres, Category>(GET_CATEGORY_SQL)
            .bind(category.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Category, sqlx::Error> {
        query_as::<Postgres, Category>(CREATE_CATEGORY_SQL)
            .bind(name)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn rename_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
        name: &str,
    ) -> Result<Category, sqlx::Error> {
        query_as::<Postgres, Category>(RENAME_CATEGORY_SQL)
            .bind(category.into_uuid())
            .bind(name)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CATEGORY_SQL)
            .bind(category.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Category {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CategoryUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

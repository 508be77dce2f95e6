//! Products Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::{
    categories::models::CategoryUuid,
    products::models::{NewProduct, Product, ProductUpdate, ProductUuid},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const SEARCH_PRODUCTS_SQL: &str = include_str!("sql/search_products.sql");
const LIST_PRODUCTS_BY_CATEGORY_SQL: &str = include_str!("sql/list_products_by_category.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(CREATE_PRODUCT_SQL)
            .bind(&product.name)
            .bind(&product.description)
            .bind(try_into_amount(product.price, "price")?)
            .bind(i64::from(product.quantity))
            .bind(product.expires_on.map(SqlxDate::from))
            .bind(product.category_uuid.map(CategoryUuid::into_uuid))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        update: &ProductUpdate,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(&update.name)
            .bind(&update.description)
            .bind(try_into_amount(update.price, "price")?)
            .bind(i64::from(update.quantity))
            .bind(update.expires_on.map(SqlxDate::from))
            .bind(update.category_uuid.map(CategoryUuid::into_uuid))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Single scan over name OR description, so a product matching both
    /// appears exactly once.
    pub(crate) async fn search_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        keyword: &str,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(SEARCH_PRODUCTS_SQL)
            .bind(keyword)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_products_by_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_BY_CATEGORY_SQL)
            .bind(category.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price = try_get_amount(row, "price")?;

        let quantity_i32: i32 = row.try_get("quantity")?;
        let quantity = u32::try_from(quantity_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price,
            quantity,
            expires_on: row
                .try_get::<Option<SqlxDate>, _>("expires_on")?
                .map(SqlxDate::to_jiff),
            category_uuid: row
                .try_get::<Option<Uuid>, _>("category_uuid")?
                .map(CategoryUuid::from_uuid),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

pub(crate) fn try_get_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn try_into_amount(amount: u64, col: &str) -> Result<i64, sqlx::Error> {
    i64::try_from(amount).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

//! Carts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    carts::models::{Cart, CartUuid, NewCart},
    products::repository::try_get_amount,
};

const CREATE_CART_SQL: &str = include_str!("../sql/create_cart.sql");
const GET_CART_SQL: &str = include_str!("../sql/get_cart.sql");
const GET_CART_BY_EMAIL_SQL: &str = include_str!("../sql/get_cart_by_email.sql");
const RECOMPUTE_CART_TOTAL_SQL: &str = include_str!("../sql/recompute_cart_total.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: &NewCart,
    ) -> Result<Cart, sqlx::Error> {
        query_as::<Postgres, Cart>(CREATE_CART_SQL)
            .bind(&cart.customer_email)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Cart, sqlx::Error> {
        query_as::<Postgres, Cart>(GET_CART_SQL)
            .bind(cart.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_cart_by_email(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer_email: &str,
    ) -> Result<Cart, sqlx::Error> {
        query_as::<Postgres, Cart>(GET_CART_BY_EMAIL_SQL)
            .bind(customer_email)
            .fetch_one(&mut **tx)
            .await
    }

    /// Rewrites the cart total from its items inside the current transaction.
    pub(crate) async fn recompute_total(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<(), sqlx::Error> {
        query(RECOMPUTE_CART_TOTAL_SQL)
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for Cart {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            customer_email: row.try_get("customer_email")?,
            total: try_get_amount(row, "total")?,
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

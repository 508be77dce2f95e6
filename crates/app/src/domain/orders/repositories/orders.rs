//! Orders Repository

use std::str::FromStr;

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    orders::models::{NewOrder, Order, OrderStatus, OrderUuid, PaymentMethod, ShippingAddress},
    products::repository::try_get_amount,
};

const CREATE_ORDER_SQL: &str = include_str!("../sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("../sql/list_orders.sql");
const LIST_ORDERS_BY_EMAIL_SQL: &str = include_str!("../sql/list_orders_by_email.sql");
const LIST_ORDERS_BY_STATUS_SQL: &str = include_str!("../sql/list_orders_by_status.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("../sql/update_order_status.sql");
const DELETE_ORDER_SQL: &str = include_str!("../sql/delete_order.sql");
const RECOMPUTE_ORDER_TOTAL_SQL: &str = include_str!("../sql/recompute_order_total.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &NewOrder,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(CREATE_ORDER_SQL)
            .bind(&order.customer_name)
            .bind(&order.customer_email)
            .bind(&order.contact_number)
            .bind(&order.shipping.address)
            .bind(&order.shipping.city)
            .bind(&order.shipping.state)
            .bind(&order.shipping.postal_code)
            .bind(&order.shipping.country)
            .bind(OrderStatus::Pending.as_str())
            .bind(order.payment_method.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(LIST_ORDERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders_by_email(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer_email: &str,
    ) -> Result<Vec<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(LIST_ORDERS_BY_EMAIL_SQL)
            .bind(customer_email)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders_by_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        status: OrderStatus,
    ) -> Result<Vec<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(LIST_ORDERS_BY_STATUS_SQL)
            .bind(status.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(UPDATE_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ORDER_SQL)
            .bind(order.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Rewrites the order total from its item lines inside the current
    /// transaction.
    pub(crate) async fn recompute_total(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<(), sqlx::Error> {
        query(RECOMPUTE_ORDER_TOTAL_SQL)
            .bind(order.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status_raw: String = row.try_get("status")?;
        let status = OrderStatus::from_str(&status_raw).map_err(|e| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(e),
        })?;

        let payment_raw: String = row.try_get("payment_method")?;
        let payment_method =
            PaymentMethod::from_str(&payment_raw).map_err(|e| sqlx::Error::ColumnDecode {
                index: "payment_method".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            customer_name: row.try_get("customer_name")?,
            customer_email: row.try_get("customer_email")?,
            contact_number: row.try_get("contact_number")?,
            shipping: ShippingAddress {
                address: row.try_get("shipping_address")?,
                city: row.try_get("shipping_city")?,
                state: row.try_get("shipping_state")?,
                postal_code: row.try_get("shipping_postal_code")?,
                country: row.try_get("shipping_country")?,
            },
            status,
            payment_method,
            total: try_get_amount(row, "total")?,
            items: Vec::new(),
            ordered_at: row.try_get::<SqlxTimestamp, _>("ordered_at")?.to_jiff(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

//! Order Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    orders::models::{NewOrderItem, OrderItem, OrderItemUuid, OrderUuid},
    products::{
        models::ProductUuid,
        repository::{try_get_amount, try_into_amount},
    },
};

const CREATE_ORDER_ITEM_SQL: &str = include_str!("../sql/create_order_item.sql");
const GET_ORDER_ITEMS_SQL: &str = include_str!("../sql/get_order_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderItemsRepository;

impl PgOrderItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Inserts an item line, capturing the product's current price when the
    /// item carries none.
    ///
    /// Returns `None` when the product does not exist.
    pub(crate) async fn create_order_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        item: NewOrderItem,
    ) -> Result<Option<OrderItem>, sqlx::Error> {
        let unit_price = item
            .unit_price
            .map(|price| try_into_amount(price, "unit_price"))
            .transpose()?;

        query_as::<Postgres, OrderItem>(CREATE_ORDER_ITEM_SQL)
            .bind(order.into_uuid())
            .bind(item.product_uuid.into_uuid())
            .bind(i64::from(item.quantity))
            .bind(unit_price)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn get_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Vec<OrderItem>, sqlx::Error> {
        query_as::<Postgres, OrderItem>(GET_ORDER_ITEMS_SQL)
            .bind(order.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity_i32: i32 = row.try_get("quantity")?;
        let quantity = u32::try_from(quantity_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: OrderItemUuid::from_uuid(row.try_get("uuid")?),
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            quantity,
            unit_price: try_get_amount(row, "unit_price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

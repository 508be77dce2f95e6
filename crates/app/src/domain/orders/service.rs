//! Orders service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::orders::{
        errors::OrdersServiceError,
        models::{NewOrder, Order, OrderStatus, OrderUuid},
        repositories::{PgOrderItemsRepository, PgOrdersRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders: PgOrdersRepository,
    items: PgOrderItemsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders: PgOrdersRepository::new(),
            items: PgOrderItemsRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        if order.items.is_empty() {
            return Err(OrdersServiceError::EmptyItems);
        }

        if order.items.iter().any(|item| item.quantity == 0) {
            return Err(OrdersServiceError::InvalidQuantity);
        }

        if order.customer_name.trim().is_empty()
            || order.customer_email.trim().is_empty()
            || order.contact_number.trim().is_empty()
            || order.shipping.has_blank_field()
        {
            return Err(OrdersServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let created = self.orders.create_order(&mut tx, &order).await?;

        for item in &order.items {
            self.items
                .create_order_item(&mut tx, created.uuid, *item)
                .await?
                .ok_or(OrdersServiceError::ProductNotFound)?;
        }

        self.orders.recompute_total(&mut tx, created.uuid).await?;

        let mut order = self.orders.get_order(&mut tx, created.uuid).await?;
        order.items = self.items.get_order_items(&mut tx, created.uuid).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut loaded = self.orders.get_order(&mut tx, order).await?;
        loaded.items = self.items.get_order_items(&mut tx, order).await?;

        tx.commit().await?;

        Ok(loaded)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.orders.list_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn list_orders_by_email(
        &self,
        customer_email: &str,
    ) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self
            .orders
            .list_orders_by_email(&mut tx, customer_email)
            .await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn list_orders_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.orders.list_orders_by_status(&mut tx, status).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut updated = self.orders.update_status(&mut tx, order, status).await?;
        updated.items = self.items.get_order_items(&mut tx, order).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.orders.delete_order(&mut tx, order).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Places an order with at least one item.
    ///
    /// The order starts as `Pending`; item prices missing from the request
    /// are captured from the product catalog in the same transaction.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Retrieves a single order with its item lines.
    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError>;

    /// All orders, newest first, without item lines.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// A customer's orders, newest first, without item lines.
    async fn list_orders_by_email(
        &self,
        customer_email: &str,
    ) -> Result<Vec<Order>, OrdersServiceError>;

    /// Orders in a given status, newest first, without item lines.
    async fn list_orders_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<Order>, OrdersServiceError>;

    /// Moves an order to a new status.
    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;

    /// Deletes an order and its item lines.
    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError>;
}

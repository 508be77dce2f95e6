//! Carts service.
//!
//! Every mutation recomputes the cart total inside the same transaction, so
//! callers always observe a total equal to the sum of the item subtotals.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};

use crate::{
    database::Db,
    domain::carts::{
        errors::CartsServiceError,
        models::{Cart, CartItemUuid, CartUuid, NewCart, NewCartItem},
        repositories::{PgCartItemsRepository, PgCartsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts: PgCartsRepository,
    items: PgCartItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts: PgCartsRepository::new(),
            items: PgCartItemsRepository::new(),
        }
    }

    async fn load_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Cart, CartsServiceError> {
        let mut loaded = self.carts.get_cart(tx, cart).await?;
        loaded.items = self.items.get_cart_items(tx, cart).await?;

        Ok(loaded)
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError> {
        if cart.customer_email.trim().is_empty() {
            return Err(CartsServiceError::EmptyCustomerEmail);
        }

        let mut tx = self.db.begin().await?;

        let created = self.carts.create_cart(&mut tx, &cart).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_cart(&self, cart: CartUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.load_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn get_cart_by_email(&self, customer_email: &str) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut cart = self.carts.get_cart_by_email(&mut tx, customer_email).await?;
        cart.items = self.items.get_cart_items(&mut tx, cart.uuid).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn add_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<Cart, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin().await?;

        // Distinguishes an unknown cart from an unknown product.
        self.carts.get_cart(&mut tx, cart).await?;

        self.items
            .upsert_cart_item(&mut tx, cart, item)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        self.carts.recompute_total(&mut tx, cart).await?;

        let cart = self.load_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn update_item_quantity(
        &self,
        cart: CartUuid,
        item: CartItemUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        self.carts.get_cart(&mut tx, cart).await?;

        if quantity == 0 {
            let rows_affected = self.items.delete_cart_item(&mut tx, cart, item).await?;

            if rows_affected == 0 {
                return Err(CartsServiceError::ItemNotFound);
            }
        } else {
            self.items
                .update_quantity(&mut tx, cart, item, quantity)
                .await?
                .ok_or(CartsServiceError::ItemNotFound)?;
        }

        self.carts.recompute_total(&mut tx, cart).await?;

        let cart = self.load_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn remove_item(
        &self,
        cart: CartUuid,
        item: CartItemUuid,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        self.carts.get_cart(&mut tx, cart).await?;

        let rows_affected = self.items.delete_cart_item(&mut tx, cart, item).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::ItemNotFound);
        }

        self.carts.recompute_total(&mut tx, cart).await?;

        let cart = self.load_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn clear_cart(&self, cart: CartUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        self.carts.get_cart(&mut tx, cart).await?;

        self.items.clear_cart_items(&mut tx, cart).await?;
        self.carts.recompute_total(&mut tx, cart).await?;

        let cart = self.load_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Creates an empty cart for a customer.
    ///
    /// At most one cart exists per customer email.
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError>;

    /// Retrieves a cart with its items.
    async fn get_cart(&self, cart: CartUuid) -> Result<Cart, CartsServiceError>;

    /// Retrieves the cart belonging to a customer email.
    async fn get_cart_by_email(&self, customer_email: &str) -> Result<Cart, CartsServiceError>;

    /// Adds a product to the cart, summing quantities when the product is
    /// already present. The unit price recorded on first add is kept.
    async fn add_item(&self, cart: CartUuid, item: NewCartItem)
    -> Result<Cart, CartsServiceError>;

    /// Sets the quantity of an existing item. A quantity of zero removes the
    /// item.
    async fn update_item_quantity(
        &self,
        cart: CartUuid,
        item: CartItemUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError>;

    /// Removes an item from the cart.
    async fn remove_item(
        &self,
        cart: CartUuid,
        item: CartItemUuid,
    ) -> Result<Cart, CartsServiceError>;

    /// Removes every item, leaving an empty cart with a zero total.
    async fn clear_cart(&self, cart: CartUuid) -> Result<Cart, CartsServiceError>;
}

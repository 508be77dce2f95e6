//! Cart Models

use jiff::Timestamp;

use crate::{domain::products::models::ProductUuid, uuids::TypedUuid};

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItem>;

/// Cart Model
///
/// A cart belongs to a single customer, identified by email. The total is
/// maintained by the service and always equals the sum of
/// `quantity * unit_price` over the items.
#[derive(Debug, Clone)]
pub struct Cart {
    pub uuid: CartUuid,
    pub customer_email: String,
    /// Total in minor units (cents).
    pub total: u64,
    pub items: Vec<CartItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Cart Item Model
#[derive(Debug, Clone)]
pub struct CartItem {
    pub uuid: CartItemUuid,
    pub cart_uuid: CartUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    /// Product price captured when the item was first added.
    pub unit_price: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Cart Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCart {
    pub customer_email: String,
}

/// New Cart Item Model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewCartItem {
    pub product_uuid: ProductUuid,
    pub quantity: u32,
}

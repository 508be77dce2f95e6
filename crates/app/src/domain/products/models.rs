//! Product Models

use jiff::{Timestamp, civil::Date};

use crate::{domain::categories::models::CategoryUuid, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product Model
#[derive(Debug, Clone)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    /// Price in minor units (cents).
    pub price: u64,
    /// Stock on hand.
    pub quantity: u32,
    pub expires_on: Option<Date>,
    pub category_uuid: Option<CategoryUuid>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub quantity: u32,
    pub expires_on: Option<Date>,
    pub category_uuid: Option<CategoryUuid>,
}

/// Product Update Model
///
/// Replaces every mutable field; the uuid is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub quantity: u32,
    pub expires_on: Option<Date>,
    pub category_uuid: Option<CategoryUuid>,
}

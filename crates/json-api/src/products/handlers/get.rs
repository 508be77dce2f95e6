//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use souk_app::domain::products::models::Product;

use crate::{extensions::*, products::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    /// The product name
    pub name: String,

    /// The product description
    pub description: String,

    /// The price in minor units (cents)
    pub price: u64,

    /// The stock on hand
    pub quantity: u32,

    /// The expiry date, if any
    pub expires_on: Option<String>,

    /// The category the product belongs to, if any
    pub category_uuid: Option<Uuid>,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            expires_on: product.expires_on.map(|date| date.to_string()),
            category_uuid: product.category_uuid.map(Into::into),
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let product = state
        .app
        .products
        .get_product(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

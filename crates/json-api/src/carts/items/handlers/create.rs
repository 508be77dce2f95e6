//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use souk_app::domain::carts::models::NewCartItem;

use crate::{
    carts::{errors::into_status_error, get::CartResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    /// The product to add
    pub product_uuid: Uuid,

    /// How many units to add
    pub quantity: u32,
}

/// Add Cart Item Handler
///
/// Adds a product to the cart. Adding a product that is already in the
/// cart sums the quantities; the unit price recorded on first add is
/// kept.
#[endpoint(
    tags("carts"),
    summary = "Add Cart Item",
    security(("bearer_auth" = [])),
    status_codes(200, 400, 401, 404, 500)
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    body: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let body = body.into_inner();

    let cart = state
        .app
        .carts
        .add_item(
            cart.into_inner().into(),
            NewCartItem {
                product_uuid: body.product_uuid.into(),
                quantity: body.quantity,
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

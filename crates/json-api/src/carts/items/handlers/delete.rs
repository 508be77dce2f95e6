//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, get::CartResponse},
    extensions::*,
    state::State,
};

/// Remove Cart Item Handler
///
/// Removes an item from the cart and returns the updated cart.
#[endpoint(
    tags("carts"),
    summary = "Remove Cart Item",
    security(("bearer_auth" = [])),
    status_codes(200, 401, 404, 500)
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    item: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let cart = state
        .app
        .carts
        .remove_item(cart.into_inner().into(), item.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

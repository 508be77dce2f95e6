//! Find Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    carts::{errors::into_status_error, get::CartResponse},
    extensions::*,
    state::State,
};

/// Find Cart Handler
///
/// Returns the cart belonging to a customer email.
#[endpoint(
    tags("carts"),
    summary = "Find Cart by Email",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    email: QueryParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let cart = state
        .app
        .carts
        .get_cart_by_email(&email.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

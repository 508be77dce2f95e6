//! Create Cart Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use souk_app::domain::carts::models::NewCart;

use crate::{
    carts::{errors::into_status_error, get::CartResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartRequest {
    /// The customer the cart belongs to
    pub customer_email: String,
}

/// Create Cart Handler
///
/// Creates an empty cart for a customer. Each customer has at most one
/// cart.
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    security(("bearer_auth" = [])),
    status_codes(201, 400, 401, 409, 500)
)]
pub(crate) async fn handler(
    body: JsonBody<CreateCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let cart = state
        .app
        .carts
        .create_cart(NewCart {
            customer_email: body.into_inner().customer_email,
        })
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);
    res.add_header(LOCATION, format!("/carts/{}", cart.uuid), true)
        .or_500("failed to set location header")?;

    Ok(Json(cart.into()))
}

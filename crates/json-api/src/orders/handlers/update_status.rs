//! Update Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use souk_app::domain::orders::models::OrderStatus;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderStatusRequest {
    /// The new status, e.g. `PROCESSING` or `SHIPPED`
    pub status: String,
}

/// Update Order Status Handler
///
/// Moves an order to a new fulfilment status.
#[endpoint(
    tags("orders"),
    summary = "Update Order Status",
    security(("bearer_auth" = [])),
    status_codes(200, 400, 401, 404, 500)
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    body: JsonBody<UpdateOrderStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let status = body
        .into_inner()
        .status
        .parse::<OrderStatus>()
        .map_err(|_| StatusError::bad_request().brief("Unknown order status"))?;

    let order = state
        .app
        .orders
        .update_status(order.into_inner().into(), status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

//! Get Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use souk_app::domain::orders::models::{Order, OrderItem, ShippingAddress};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    /// The unique identifier of the order line
    pub uuid: Uuid,

    /// The product ordered
    pub product_uuid: Uuid,

    /// How many units were ordered
    pub quantity: u32,

    /// The price charged per unit, in minor units
    pub unit_price: u64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        OrderItemResponse {
            uuid: item.uuid.into(),
            product_uuid: item.product_uuid.into(),
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShippingAddressResponse {
    /// The street address
    pub address: String,

    /// The city
    pub city: String,

    /// The state or province
    pub state: String,

    /// The postal code
    pub postal_code: String,

    /// The country
    pub country: String,
}

impl From<ShippingAddress> for ShippingAddressResponse {
    fn from(shipping: ShippingAddress) -> Self {
        ShippingAddressResponse {
            address: shipping.address,
            city: shipping.city,
            state: shipping.state,
            postal_code: shipping.postal_code,
            country: shipping.country,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// The name of the customer placing the order
    pub customer_name: String,

    /// The customer the order belongs to
    pub customer_email: String,

    /// The contact number for delivery
    pub contact_number: String,

    /// Where the order ships to
    pub shipping: ShippingAddressResponse,

    /// The fulfilment status
    pub status: String,

    /// The payment method chosen at checkout
    pub payment_method: String,

    /// The order total in minor units
    pub total: u64,

    /// The ordered lines; empty in list responses
    pub items: Vec<OrderItemResponse>,

    /// The date and time the order was placed
    pub ordered_at: String,

    /// The date and time the order was created
    pub created_at: String,

    /// The date and time the order was last updated
    pub updated_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            uuid: order.uuid.into(),
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            contact_number: order.contact_number,
            shipping: order.shipping.into(),
            status: order.status.to_string(),
            payment_method: order.payment_method.to_string(),
            total: order.total,
            items: order.items.into_iter().map(Into::into).collect(),
            ordered_at: order.ordered_at.to_string(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

/// Get Order Handler
///
/// Returns an order with its item lines.
#[endpoint(tags("orders"), summary = "Get Order", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let order = state
        .app
        .orders
        .get_order(order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
